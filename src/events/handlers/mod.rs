// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.
// Only the registration functions are exported.

pub mod logging_handler;

pub use logging_handler::register_logging_handlers;
