// src/repositories/catalog_repository.rs
//
// Catalog sources - built-in data or a JSON document on disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::data;
use crate::error::{AppError, AppResult};
use crate::repositories::records::{CatalogDocument, ProfileRecord, ProjectRecord};

#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Load the raw, unvalidated catalog document
    fn load(&self) -> AppResult<CatalogDocument>;

    /// Human-readable name of the source, for logs and events
    fn describe(&self) -> String;
}

/// Serves the catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogRepository;

impl BuiltinCatalogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogRepository for BuiltinCatalogRepository {
    fn load(&self) -> AppResult<CatalogDocument> {
        let document = CatalogDocument::from_records(
            ProfileRecord::from(&data::profile()),
            data::projects().iter().map(ProjectRecord::from).collect(),
        )?;
        Ok(document)
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// Reads and writes the catalog as a JSON document
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a document as pretty JSON, creating parent directories
    pub fn save(&self, document: &CatalogDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        debug!("saved catalog document to {}", self.path.display());
        Ok(())
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn load(&self) -> AppResult<CatalogDocument> {
        if !self.path.exists() {
            return Err(AppError::NotFound(format!(
                "catalog file {}",
                self.path.display()
            )));
        }

        let raw = fs::read_to_string(&self.path)?;
        let document: CatalogDocument = serde_json::from_str(&raw)?;
        debug!(
            "read {} project records from {}",
            document.projects.len(),
            self.path.display()
        );
        Ok(document)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_document_has_every_project() {
        let document = BuiltinCatalogRepository::new().load().unwrap();
        assert_eq!(document.projects.len(), data::projects().len());
        assert_eq!(document.profile.name.as_deref(), Some(data::profile().name.as_str()));
    }

    #[test]
    fn test_json_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let repo = JsonCatalogRepository::new(dir.path().join("nested").join("catalog.json"));

        let document = BuiltinCatalogRepository::new().load().unwrap();
        repo.save(&document).unwrap();

        assert_eq!(repo.load().unwrap(), document);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = JsonCatalogRepository::new(dir.path().join("absent.json"));

        assert!(matches!(repo.load(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"profile\": ").unwrap();

        let repo = JsonCatalogRepository::new(&path);
        assert!(matches!(repo.load(), Err(AppError::Serialization(_))));
    }
}
