// src/repositories/records.rs
//
// Raw catalog records as they appear in the source document.
//
// Project records arrive as untyped JSON values and every field is optional,
// so a malformed record still reaches the conversion and is named in the error.
// Conversion maps shape only; invariants stay in the domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    DomainError, DomainResult, Profile, ProfileLinks, Project, ProjectCategory, ProjectLink,
};

/// The whole static catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub profile: ProfileRecord,
    /// Unparsed project records, decoded one by one with `ProjectRecord::from_value`
    pub projects: Vec<Value>,
}

impl CatalogDocument {
    pub fn from_records(
        profile: ProfileRecord,
        projects: Vec<ProjectRecord>,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            profile,
            projects: projects
                .into_iter()
                .map(serde_json::to_value)
                .collect::<serde_json::Result<Vec<_>>>()?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

impl ProjectRecord {
    /// Name used in errors: the id when present, otherwise the position
    pub fn record_name(&self, index: usize) -> String {
        match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => format!("#{}", index),
        }
    }

    /// Decode one raw record. A field of the wrong JSON type is reported
    /// against the record's id, or its position when the id is unusable.
    pub fn from_value(value: Value, index: usize) -> DomainResult<Self> {
        let record = match value.get("id").and_then(Value::as_str) {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => format!("#{}", index),
        };

        serde_json::from_value(value).map_err(|e| DomainError::SchemaViolation {
            record,
            reason: format!("malformed record: {}", e),
        })
    }

    /// Map the record onto a Project
    ///
    /// Required: id, title, category, pitch, summary, technicalHighlights, links.
    /// Optional: metrics, youtubeIds (empty when absent), isPrivate (false when absent).
    pub fn into_project(self, index: usize) -> DomainResult<Project> {
        let record = self.record_name(index);

        if self.id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(DomainError::SchemaViolation {
                record,
                reason: "id cannot be empty".to_string(),
            });
        }

        let category_raw = required(self.category, &record, "category")?;
        let category = category_raw
            .parse::<ProjectCategory>()
            .map_err(|_| DomainError::SchemaViolation {
                record: record.clone(),
                reason: format!(
                    "category {:?} is not one of Roblox, Unity, Tooling",
                    category_raw
                ),
            })?;

        let links = required(self.links, &record, "links")?
            .into_iter()
            .enumerate()
            .map(|(idx, link)| link.into_link(&record, idx))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Project {
            id: required(self.id, &record, "id")?,
            title: required(self.title, &record, "title")?,
            category,
            pitch: required(self.pitch, &record, "pitch")?,
            summary: required(self.summary, &record, "summary")?,
            technical_highlights: required(
                self.technical_highlights,
                &record,
                "technicalHighlights",
            )?,
            metrics: self.metrics.unwrap_or_default(),
            youtube_ids: self.youtube_ids.unwrap_or_default(),
            links,
            is_private: self.is_private.unwrap_or(false),
        })
    }
}

impl LinkRecord {
    fn into_link(self, record: &str, idx: usize) -> DomainResult<ProjectLink> {
        Ok(ProjectLink {
            label: required(self.label, record, &format!("links[{}].label", idx))?,
            href: required(self.href, record, &format!("links[{}].href", idx))?,
        })
    }
}

impl ProfileRecord {
    pub fn into_profile(self) -> DomainResult<Profile> {
        let record = "profile";
        Ok(Profile {
            name: required(self.name, record, "name")?,
            headline: required(self.headline, record, "headline")?,
            summary: required(self.summary, record, "summary")?,
            strengths: self.strengths,
            metrics: self.metrics,
            stack: self.stack,
            availability: self.availability,
            links: self.links,
        })
    }
}

fn required<T>(value: Option<T>, record: &str, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::SchemaViolation {
        record: record.to_string(),
        reason: format!("missing required attribute '{}'", field),
    })
}

// ============================================================================
// DOMAIN -> RECORD (export)
// ============================================================================

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            title: Some(project.title.clone()),
            category: Some(project.category.to_string()),
            pitch: Some(project.pitch.clone()),
            summary: Some(project.summary.clone()),
            technical_highlights: Some(project.technical_highlights.clone()),
            metrics: (!project.metrics.is_empty()).then(|| project.metrics.clone()),
            youtube_ids: (!project.youtube_ids.is_empty()).then(|| project.youtube_ids.clone()),
            links: Some(
                project
                    .links
                    .iter()
                    .map(|l| LinkRecord {
                        label: Some(l.label.clone()),
                        href: Some(l.href.clone()),
                    })
                    .collect(),
            ),
            is_private: project.is_private.then_some(true),
        }
    }
}

impl From<&Profile> for ProfileRecord {
    fn from(profile: &Profile) -> Self {
        Self {
            name: Some(profile.name.clone()),
            headline: Some(profile.headline.clone()),
            summary: Some(profile.summary.clone()),
            strengths: profile.strengths.clone(),
            metrics: profile.metrics.clone(),
            stack: profile.stack.clone(),
            availability: profile.availability.clone(),
            links: profile.links.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(category: &str) -> String {
        format!(
            r#"{{
                "id": "demo",
                "title": "Demo",
                "category": "{}",
                "pitch": "Pitch",
                "summary": "Summary",
                "technicalHighlights": ["a", "b"],
                "links": [{{ "label": "GitHub", "href": "https://github.com/x/demo" }}]
            }}"#,
            category
        )
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let record: ProjectRecord = serde_json::from_str(&record_json("Unity")).unwrap();
        let project = record.into_project(0).unwrap();

        assert_eq!(project.category, ProjectCategory::Unity);
        assert!(project.metrics.is_empty());
        assert!(project.youtube_ids.is_empty());
        assert!(!project.is_private);
        assert_eq!(project.technical_highlights, vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_category_names_the_record() {
        let record: ProjectRecord = serde_json::from_str(&record_json("Godot")).unwrap();
        let err = record.into_project(3).unwrap_err();

        match err {
            DomainError::SchemaViolation { record, reason } => {
                assert_eq!(record, "demo");
                assert!(reason.contains("Godot"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_id_uses_position() {
        let record = ProjectRecord {
            title: Some("No id".to_string()),
            ..Default::default()
        };
        let err = record.into_project(4).unwrap_err();

        match err {
            DomainError::SchemaViolation { record, reason } => {
                assert_eq!(record, "#4");
                assert!(reason.contains("category"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_id_uses_position() {
        for blank in ["", "  "] {
            let mut record: ProjectRecord = serde_json::from_str(&record_json("Unity")).unwrap();
            record.id = Some(blank.to_string());

            match record.into_project(1).unwrap_err() {
                DomainError::SchemaViolation { record, reason } => {
                    assert_eq!(record, "#1");
                    assert!(reason.contains("id"));
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_wrongly_typed_field_names_the_record() {
        let mut value: Value = serde_json::from_str(&record_json("Unity")).unwrap();
        value["category"] = Value::from(5);

        match ProjectRecord::from_value(value, 2).unwrap_err() {
            DomainError::SchemaViolation { record, reason } => {
                assert_eq!(record, "demo");
                assert!(reason.contains("malformed record"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_wrongly_typed_id_uses_position() {
        let mut value: Value = serde_json::from_str(&record_json("Unity")).unwrap();
        value["id"] = Value::from(7);

        let err = ProjectRecord::from_value(value, 3).unwrap_err();
        assert!(matches!(err, DomainError::SchemaViolation { ref record, .. } if record == "#3"));
    }

    #[test]
    fn test_missing_highlights_rejected() {
        let mut record: ProjectRecord = serde_json::from_str(&record_json("Roblox")).unwrap();
        record.technical_highlights = None;

        let err = record.into_project(0).unwrap_err();
        assert!(err.to_string().contains("technicalHighlights"));
    }

    #[test]
    fn test_link_without_href_rejected() {
        let mut record: ProjectRecord = serde_json::from_str(&record_json("Roblox")).unwrap();
        record.links = Some(vec![LinkRecord {
            label: Some("Play".to_string()),
            href: None,
        }]);

        let err = record.into_project(0).unwrap_err();
        assert!(err.to_string().contains("links[0].href"));
    }

    #[test]
    fn test_export_omits_absent_optionals() {
        let record: ProjectRecord = serde_json::from_str(&record_json("Tooling")).unwrap();
        let project = record.into_project(0).unwrap();

        let json = serde_json::to_value(ProjectRecord::from(&project)).unwrap();
        assert!(json.get("metrics").is_none());
        assert!(json.get("youtubeIds").is_none());
        assert!(json.get("isPrivate").is_none());
        assert_eq!(json["category"], "Tooling");
    }

    #[test]
    fn test_profile_requires_name() {
        let record = ProfileRecord {
            headline: Some("Engineer".to_string()),
            summary: Some(String::new()),
            ..Default::default()
        };
        let err = record.into_profile().unwrap_err();
        assert!(err.to_string().contains("name"));
    }
}
