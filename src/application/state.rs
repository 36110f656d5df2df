// src/application/state.rs

use std::sync::Arc;

use crate::application::config::SiteConfig;
use crate::domain::Profile;
use crate::error::AppResult;
use crate::events::{register_logging_handlers, EventBus};
use crate::services::{CatalogService, LoadedCatalog, ProjectFilterView};

/// Application state for one session.
/// The view is owned here and handed to renderers explicitly.
pub struct AppState {
    pub config: SiteConfig,
    pub event_bus: Arc<EventBus>,
    pub catalog_service: Arc<CatalogService>,
    pub profile: Arc<Profile>,
    pub view: ProjectFilterView,
}

impl AppState {
    /// Wire the bus, load and validate the catalog, and open a view on "All"
    pub fn bootstrap(config: SiteConfig) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());
        register_logging_handlers(&event_bus);

        let catalog_service = Arc::new(CatalogService::new(
            config.repository(),
            Arc::clone(&event_bus),
        ));
        let LoadedCatalog { catalog, profile } = catalog_service.load()?;
        let view = ProjectFilterView::new(catalog, Arc::clone(&event_bus));

        Ok(Self {
            config,
            event_bus,
            catalog_service,
            profile,
            view,
        })
    }
}
