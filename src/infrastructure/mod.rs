// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod html_renderer;
pub mod site_writer;

pub use html_renderer::{escape, HtmlRenderer};
pub use site_writer::{RenderedSite, SiteWriter};
