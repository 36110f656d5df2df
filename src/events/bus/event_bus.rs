// events/bus/event_bus.rs
//
// Synchronous, typed event bus.
//
// Handlers run inline, in subscription order, on the emitting thread.
// Every emission is logged; the most recent ones are kept in a bounded log.

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error};

use crate::events::types::DomainEvent;

/// Type-erased event handler
type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Number of emissions the log retains; older entries are dropped first
pub const EVENT_LOG_CAPACITY: usize = 256;

/// The Event Bus
///
/// Lets the catalog service, the filter view and the site writer announce
/// what happened without knowing who listens.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order
/// - Type-safe through generics
/// - A panicking handler does not stop the others
/// - Handlers may subscribe while an event is being dispatched
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
    event_log: Arc<RwLock<VecDeque<EventLogEntry>>>,
}

/// A recorded emission
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(VecDeque::with_capacity(EVENT_LOG_CAPACITY))),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<CategorySelected, _>(|event| {
    ///     log::info!("now showing {}", event.selected);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Arc::new(move |event_any: &dyn Any| {
            match event_any.downcast_ref::<E>() {
                Some(event) => handler(event),
                None => error!(
                    "failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                ),
            }
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Emit an event to every subscriber of its type
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        // Snapshot so no lock is held while handlers run
        let event_handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        let entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.len(),
        };

        debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            entry.event_type, entry.event_id, entry.handler_count
        );

        {
            let mut log = self.event_log.write().unwrap_or_else(PoisonError::into_inner);
            if log.len() == EVENT_LOG_CAPACITY {
                log.pop_front();
            }
            log.push_back(entry);
        }

        for (idx, handler) in event_handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if result.is_err() {
                error!("handler {} for {} panicked", idx, event.event_type());
            }
        }
    }

    /// The most recent emissions, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_event_log(&self) {
        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryFilter, ProjectCategory};
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn selected(category: ProjectCategory) -> CategorySelected {
        CategorySelected::new(CategoryFilter::All, CategoryFilter::Only(category), 1)
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<CategorySelected, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(selected(ProjectCategory::Unity));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handlers_receive_typed_payload() {
        let bus = EventBus::new();
        let seen = Arc::new(RwLock::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        bus.subscribe::<CategorySelected, _>(move |event| {
            seen_clone.write().unwrap().push(event.selected);
        });

        bus.emit(selected(ProjectCategory::Tooling));

        assert_eq!(
            *seen.read().unwrap(),
            vec![CategoryFilter::Only(ProjectCategory::Tooling)]
        );
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<CatalogLoaded, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(CatalogLoaded::new("builtin".to_string(), 6));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();

        bus.emit(CatalogLoaded::new("builtin".to_string(), 6));
        bus.emit(selected(ProjectCategory::Roblox));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "CatalogLoaded");
        assert_eq!(log[1].event_type, "CategorySelected");

        bus.clear_event_log();
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_event_log_keeps_only_recent_emissions() {
        let bus = EventBus::new();

        for count in 0..EVENT_LOG_CAPACITY + 44 {
            bus.emit(CatalogLoaded::new("builtin".to_string(), count));
        }
        bus.emit(selected(ProjectCategory::Unity));

        let log = bus.get_event_log();
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(log.last().unwrap().event_type, "CategorySelected");
    }

    #[test]
    fn test_handler_can_subscribe_during_emit() {
        let bus = EventBus::new();
        let inner = bus.clone();

        bus.subscribe::<CatalogLoaded, _>(move |_| {
            inner.subscribe::<SiteRendered, _>(|_| {});
        });

        bus.emit(CatalogLoaded::new("builtin".to_string(), 6));

        assert_eq!(bus.subscriber_count::<SiteRendered>(), 1);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<CategorySelected>(), 0);

        bus.subscribe::<CategorySelected, _>(|_| {});
        bus.subscribe::<CategorySelected, _>(|_| {});
        assert_eq!(bus.subscriber_count::<CategorySelected>(), 2);

        assert_eq!(bus.subscriber_count::<SiteRendered>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<CategorySelected, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<CategorySelected, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(selected(ProjectCategory::Unity));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = EventBus::new();
        let clone = bus.clone();

        clone.subscribe::<CatalogLoaded, _>(|_| {});
        assert_eq!(bus.subscriber_count::<CatalogLoaded>(), 1);
    }
}
