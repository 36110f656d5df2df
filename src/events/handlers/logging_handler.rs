// src/events/handlers/logging_handler.rs
//
// Turns catalog, view and site events into log lines.

use log::info;

use crate::events::bus::EventBus;
use crate::events::types::{CatalogLoaded, CategorySelected, SiteRendered};

/// Subscribe log handlers for every event the crate emits
pub fn register_logging_handlers(event_bus: &EventBus) {
    event_bus.subscribe::<CatalogLoaded, _>(|event| {
        info!(
            "catalog loaded from {} ({} projects)",
            event.source, event.project_count
        );
    });

    event_bus.subscribe::<CategorySelected, _>(|event| {
        if event.previous == event.selected {
            info!(
                "filter {} re-selected, {} projects visible",
                event.selected, event.visible_count
            );
        } else {
            info!(
                "filter {} -> {}, {} projects visible",
                event.previous, event.selected, event.visible_count
            );
        }
    });

    event_bus.subscribe::<SiteRendered, _>(|event| {
        info!(
            "wrote {} pages to {}",
            event.pages.len(),
            event.output_dir.display()
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_one_handler_per_event() {
        let bus = EventBus::new();
        register_logging_handlers(&bus);

        assert_eq!(bus.subscriber_count::<CatalogLoaded>(), 1);
        assert_eq!(bus.subscriber_count::<CategorySelected>(), 1);
        assert_eq!(bus.subscriber_count::<SiteRendered>(), 1);
    }
}
