// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod project_view;


pub use catalog_service::{CatalogService, LoadedCatalog};

pub use project_view::ProjectFilterView;
