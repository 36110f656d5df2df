// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::CategoryFilter;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted once the catalog and profile passed validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub source: String,
    pub project_count: usize,
}

impl CatalogLoaded {
    pub fn new(source: String, project_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            source,
            project_count,
        }
    }
}

impl DomainEvent for CatalogLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogLoaded" }
}

// ============================================================================
// VIEW EVENTS
// ============================================================================

/// Emitted after the view switched selection and recomputed its list
///
/// Re-selecting the active filter still emits (previous == selected).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySelected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub previous: CategoryFilter,
    pub selected: CategoryFilter,
    pub visible_count: usize,
}

impl CategorySelected {
    pub fn new(previous: CategoryFilter, selected: CategoryFilter, visible_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            previous,
            selected,
            visible_count,
        }
    }
}

impl DomainEvent for CategorySelected {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CategorySelected" }
}

// ============================================================================
// SITE EVENTS
// ============================================================================

/// Emitted when every page of the static site has been written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRendered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub pages: Vec<PathBuf>,
}

impl SiteRendered {
    pub fn new(output_dir: PathBuf, pages: Vec<PathBuf>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            output_dir,
            pages,
        }
    }
}

impl DomainEvent for SiteRendered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SiteRendered" }
}
