// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO invariant enforcement
// - NO event emission
// - Sources hand back raw records; the catalog service validates them

pub mod catalog_repository;
pub mod records;

pub use catalog_repository::{BuiltinCatalogRepository, CatalogRepository, JsonCatalogRepository};
pub use records::{CatalogDocument, LinkRecord, ProfileRecord, ProjectRecord};

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
