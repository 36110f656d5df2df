// src/application/config.rs
//
// Site configuration, assembled by the binary from CLI flags and env.

use std::path::PathBuf;
use std::sync::Arc;

use crate::repositories::{BuiltinCatalogRepository, CatalogRepository, JsonCatalogRepository};

pub const DEFAULT_OUTPUT_DIR: &str = "site";
pub const DEFAULT_PAGE_TITLE: &str = "Portfolio / Resume";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// JSON catalog document; the built-in catalog when absent
    pub data_path: Option<PathBuf>,

    /// Directory the static pages are written to
    pub output_dir: PathBuf,

    /// Kicker shown above the name and used in the <title>
    pub page_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Self {
        self.data_path = data_path;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_page_title(mut self, page_title: String) -> Self {
        self.page_title = page_title;
        self
    }

    /// The catalog source this configuration points at
    pub fn repository(&self) -> Arc<dyn CatalogRepository> {
        match &self.data_path {
            Some(path) => Arc::new(JsonCatalogRepository::new(path.clone())),
            None => Arc::new(BuiltinCatalogRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_catalog() {
        let config = SiteConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.repository().describe(), "builtin");
    }

    #[test]
    fn test_data_path_selects_json_source() {
        let config = SiteConfig::default().with_data_path(Some(PathBuf::from("catalog.json")));
        assert_eq!(config.repository().describe(), "catalog.json");
    }
}
