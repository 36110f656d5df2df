// src/lib.rs
// Portfolio - Project catalog and static resume site
//
// Architecture:
// - Domain-centric: Records, invariants and the category filter live in the domain
// - Event-driven: Loading, selection and site output are announced on the bus
// - Explicit: A malformed catalog is rejected as a whole, never partially shown
// - Static output: One page per filter option, no client-side state

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod data;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_profile,
    validate_project,
    // Catalog
    Catalog,
    // Filter
    CategoryFilter,
    DomainError,
    DomainResult,
    // Profile
    Profile,
    ProfileLinks,
    // Project
    Project,
    ProjectCategory,
    ProjectLink,
    GITHUB_LINK_LABEL,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_logging_handlers,
    CatalogLoaded,
    CategorySelected,
    DomainEvent,
    EventBus,
    EventLogEntry,
    SiteRendered,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    BuiltinCatalogRepository,
    CatalogDocument,
    CatalogRepository,
    JsonCatalogRepository,
    ProfileRecord,
    ProjectRecord,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{HtmlRenderer, RenderedSite, SiteWriter};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, LoadedCatalog, ProjectFilterView};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppState,
    CardSection,
    ErrorResponse,
    ErrorType,
    FilterOptionDto,
    MediaSlotDto,
    ProjectCardDto,
    SiteConfig,
    ViewFrameDto,
};
