// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod filter;
pub mod profile;
pub mod project;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Project Domain
pub use project::{validate_project, Project, ProjectCategory, ProjectLink, GITHUB_LINK_LABEL};

// Profile Domain
pub use profile::{validate_profile, Profile, ProfileLinks};

// Catalog
pub use catalog::Catalog;

// Filter Selection
pub use filter::CategoryFilter;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of schema rules and invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Schema violation in record '{record}': {reason}")]
    SchemaViolation { record: String, reason: String },

    #[error("Duplicate project identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Unknown category: {0:?} (expected All, Roblox, Unity or Tooling)")]
    UnknownCategory(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
