// src/domain/filter.rs
//
// Category Filter Selection
//
// The value space of the view's only mutable state:
// "All" plus every member of the closed category set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::project::{Project, ProjectCategory};
use crate::domain::{DomainError, DomainResult};

const ALL_LABEL: &str = "All";

/// A filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Every selectable option, in the fixed order the filter controls show them
    pub const ALL_OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::Roblox),
        CategoryFilter::Only(ProjectCategory::Unity),
        CategoryFilter::Only(ProjectCategory::Tooling),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }

    /// File name of the static page showing this selection
    pub fn page_name(&self) -> String {
        match self {
            CategoryFilter::All => "index.html".to_string(),
            CategoryFilter::Only(category) => {
                format!("{}.html", category.as_str().to_ascii_lowercase())
            }
        }
    }

    /// Parse an untyped selection; only exact option labels are accepted
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw == ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        raw.parse::<ProjectCategory>().map(CategoryFilter::Only)
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(category: ProjectCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::parse(s)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryFilter::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
