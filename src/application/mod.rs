// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the rendering layer and the services
// - Translates domain entities into DTOs
// - Holds session state and configuration

pub mod config;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use config::SiteConfig;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
