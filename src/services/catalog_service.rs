// src/services/catalog_service.rs
use std::sync::Arc;

use log::{info, warn};

use crate::domain::{validate_profile, Catalog, DomainResult, Profile, Project};
use crate::error::AppResult;
use crate::events::{CatalogLoaded, EventBus};
use crate::repositories::{CatalogDocument, CatalogRepository, JsonCatalogRepository};
use crate::repositories::{ProfileRecord, ProjectRecord};

/// A catalog and profile that passed every load-time check
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Arc<Catalog>,
    pub profile: Arc<Profile>,
}

pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    event_bus: Arc<EventBus>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    /// Load, map and validate the catalog.
    /// Any malformed record rejects the whole load; nothing partial is returned.
    pub fn load(&self) -> AppResult<LoadedCatalog> {
        let source = self.repository.describe();
        let document = self.repository.load()?;

        let loaded = Self::validate_document(document).map_err(|e| {
            warn!("catalog from {} rejected: {}", source, e);
            e
        })?;

        info!(
            "validated {} projects and profile '{}' from {}",
            loaded.catalog.len(),
            loaded.profile.name,
            source
        );
        self.event_bus
            .emit(CatalogLoaded::new(source, loaded.catalog.len()));

        Ok(loaded)
    }

    /// Load and validate, then write the catalog to `target` as JSON.
    /// Returns the number of projects written.
    pub fn export(&self, target: &JsonCatalogRepository) -> AppResult<usize> {
        let loaded = self.load()?;
        let document = CatalogDocument::from_records(
            ProfileRecord::from(loaded.profile.as_ref()),
            loaded
                .catalog
                .get_all()
                .iter()
                .map(ProjectRecord::from)
                .collect(),
        )?;

        target.save(&document)?;
        info!(
            "exported {} projects to {}",
            document.projects.len(),
            target.path().display()
        );
        Ok(document.projects.len())
    }

    fn validate_document(document: CatalogDocument) -> DomainResult<LoadedCatalog> {
        let projects = document
            .projects
            .into_iter()
            .enumerate()
            .map(|(index, value)| ProjectRecord::from_value(value, index)?.into_project(index))
            .collect::<DomainResult<Vec<Project>>>()?;
        let catalog = Catalog::new(projects)?;

        let profile = document.profile.into_profile()?;
        validate_profile(&profile)?;

        Ok(LoadedCatalog {
            catalog: Arc::new(catalog),
            profile: Arc::new(profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;
    use crate::repositories::{BuiltinCatalogRepository, LinkRecord, MockCatalogRepository};
    use tempfile::TempDir;

    fn record(id: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: Some(id.to_string()),
            title: Some(format!("Title {}", id)),
            category: Some(category.to_string()),
            pitch: Some("Pitch".to_string()),
            summary: Some("Summary".to_string()),
            technical_highlights: Some(vec!["Highlight".to_string()]),
            links: Some(vec![LinkRecord {
                label: Some("Play".to_string()),
                href: Some("https://example.com/play".to_string()),
            }]),
            ..Default::default()
        }
    }

    fn profile_record() -> ProfileRecord {
        ProfileRecord {
            name: Some("Lance".to_string()),
            headline: Some("Engineer".to_string()),
            summary: Some("Summary".to_string()),
            ..Default::default()
        }
    }

    fn mock_with(projects: Vec<ProjectRecord>) -> MockCatalogRepository {
        let mut repo = MockCatalogRepository::new();
        repo.expect_describe().return_const("mock".to_string());
        repo.expect_load().times(1).returning(move || {
            Ok(CatalogDocument::from_records(profile_record(), projects.clone())?)
        });
        repo
    }

    #[test]
    fn test_load_keeps_document_order_and_emits() {
        let bus = Arc::new(EventBus::new());
        let repo = mock_with(vec![record("b", "Unity"), record("a", "Roblox")]);
        let service = CatalogService::new(Arc::new(repo), Arc::clone(&bus));

        let loaded = service.load().unwrap();

        let ids: Vec<&str> = loaded.catalog.get_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(bus.get_event_log()[0].event_type, "CatalogLoaded");
    }

    #[test]
    fn test_unknown_category_rejects_load_without_event() {
        let bus = Arc::new(EventBus::new());
        let repo = mock_with(vec![record("ok", "Roblox"), record("odd", "Godot")]);
        let service = CatalogService::new(Arc::new(repo), Arc::clone(&bus));

        let err = service.load().unwrap_err();

        match err {
            AppError::Domain(DomainError::SchemaViolation { record, .. }) => {
                assert_eq!(record, "odd")
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_wrongly_typed_field_names_the_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let mut document =
            CatalogDocument::from_records(profile_record(), vec![record("ok", "Roblox")]).unwrap();
        let mut odd = serde_json::to_value(record("odd", "Unity")).unwrap();
        odd["category"] = serde_json::Value::from(5);
        document.projects.push(odd);
        JsonCatalogRepository::new(&path).save(&document).unwrap();

        let service = CatalogService::new(
            Arc::new(JsonCatalogRepository::new(&path)),
            Arc::new(EventBus::new()),
        );

        match service.load().unwrap_err() {
            AppError::Domain(DomainError::SchemaViolation { record, .. }) => {
                assert_eq!(record, "odd")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_reject_load() {
        let repo = mock_with(vec![record("same", "Roblox"), record("same", "Unity")]);
        let service = CatalogService::new(Arc::new(repo), Arc::new(EventBus::new()));

        assert!(matches!(
            service.load(),
            Err(AppError::Domain(DomainError::DuplicateIdentifier(_)))
        ));
    }

    #[test]
    fn test_repository_errors_propagate() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_describe().return_const("mock".to_string());
        repo.expect_load()
            .returning(|| Err(AppError::NotFound("catalog".to_string())));
        let service = CatalogService::new(Arc::new(repo), Arc::new(EventBus::new()));

        assert!(matches!(service.load(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_export_writes_loadable_document() {
        let dir = TempDir::new().unwrap();
        let target = JsonCatalogRepository::new(dir.path().join("catalog.json"));
        let service = CatalogService::new(
            Arc::new(BuiltinCatalogRepository::new()),
            Arc::new(EventBus::new()),
        );

        let written = service.export(&target).unwrap();

        let reloaded = CatalogService::new(Arc::new(target), Arc::new(EventBus::new()))
            .load()
            .unwrap();
        assert_eq!(written, reloaded.catalog.len());
        assert_eq!(
            reloaded.catalog.get_all(),
            service.load().unwrap().catalog.get_all()
        );
    }
}
