use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Label of the link that doubles as the "more details" call-to-action
pub const GITHUB_LINK_LABEL: &str = "GitHub";

/// Represents one portfolio entry
/// Projects are only ever built through the catalog, which validates them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable, human-readable identifier (durable render key)
    pub id: String,

    /// Display title
    pub title: String,

    /// Exactly one category from the closed set
    pub category: ProjectCategory,

    /// One-line hook
    pub pitch: String,

    /// Longer paragraph
    pub summary: String,

    /// Ordered technical highlights (order is meaningful)
    pub technical_highlights: Vec<String>,

    /// Ordered metric badges, empty when the project has none
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,

    /// Ordered external video identifiers; only the first is surfaced on the card
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub youtube_ids: Vec<String>,

    /// Ordered outbound links
    pub links: Vec<ProjectLink>,

    /// Source code is not publicly browsable; demo/video is still shown
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_private: bool,
}

/// Closed classification of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Roblox,
    Unity,
    Tooling,
}

/// A labelled outbound link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

impl ProjectCategory {
    /// Every category, in the fixed order the filter offers them
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Roblox,
        ProjectCategory::Unity,
        ProjectCategory::Tooling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Roblox => "Roblox",
            ProjectCategory::Unity => "Unity",
            ProjectCategory::Tooling => "Tooling",
        }
    }
}

impl ProjectLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl Project {
    /// Find a link by its exact label
    pub fn link_labeled(&self, label: &str) -> Option<&ProjectLink> {
        self.links.iter().find(|l| l.label == label)
    }

    /// The link surfaced as the "more details" call-to-action, if any
    pub fn github_link(&self) -> Option<&ProjectLink> {
        self.link_labeled(GITHUB_LINK_LABEL)
    }

    /// The primary video. Additional ids are kept in the data but not surfaced.
    pub fn primary_video(&self) -> Option<&str> {
        self.youtube_ids.first().map(String::as_str)
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Roblox" => Ok(ProjectCategory::Roblox),
            "Unity" => Ok(ProjectCategory::Unity),
            "Tooling" => Ok(ProjectCategory::Tooling),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}
