// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::{CatalogLoaded, CategorySelected, DomainEvent, SiteRendered};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_logging_handlers;
