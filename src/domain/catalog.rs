// src/domain/catalog.rs
//
// Project Catalog
//
// The fixed, ordered collection of projects.
// Declaration order is display order.

use std::collections::HashSet;

use crate::domain::project::{validate_project, Project, ProjectCategory};
use crate::domain::{DomainError, DomainResult};

/// Immutable, validated, ordered collection of projects
///
/// CRITICAL INVARIANTS:
/// - Only constructible through `Catalog::new`, which validates every record
/// - Ids are unique across the catalog
/// - No mutation after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting it as a whole if any record is invalid
    pub fn new(projects: Vec<Project>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            validate_project(project)?;
            if !seen.insert(project.id.as_str()) {
                return Err(DomainError::DuplicateIdentifier(project.id.clone()));
            }
        }

        Ok(Self { projects })
    }

    /// The full catalog in declared order
    pub fn get_all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of projects tagged with `category`
    pub fn count_in(&self, category: ProjectCategory) -> usize {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}
