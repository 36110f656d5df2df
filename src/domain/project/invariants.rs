use url::Url;

use super::entity::{Project, GITHUB_LINK_LABEL};
use crate::domain::{DomainError, DomainResult};

/// Validates all Project invariants
/// The category is already enforced by the type; everything else is checked here
pub fn validate_project(project: &Project) -> DomainResult<()> {
    validate_id(&project.id)?;
    require_text(project, "title", &project.title)?;
    require_text(project, "pitch", &project.pitch)?;
    require_text(project, "summary", &project.summary)?;
    require_entries(project, "technicalHighlights", &project.technical_highlights)?;
    require_entries(project, "metrics", &project.metrics)?;
    require_entries(project, "youtubeIds", &project.youtube_ids)?;
    validate_links(project)?;
    Ok(())
}

/// Id cannot be empty and cannot carry surrounding whitespace
fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::SchemaViolation {
            record: "<unnamed>".to_string(),
            reason: "id cannot be empty".to_string(),
        });
    }
    if id.trim() != id {
        return Err(DomainError::SchemaViolation {
            record: id.to_string(),
            reason: "id cannot have leading or trailing whitespace".to_string(),
        });
    }
    Ok(())
}

fn require_text(project: &Project, field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(violation(project, format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Sequences may be empty, but their entries may not be blank
fn require_entries(project: &Project, field: &str, values: &[String]) -> DomainResult<()> {
    if let Some(idx) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(violation(
            project,
            format!("{}[{}] cannot be empty", field, idx),
        ));
    }
    Ok(())
}

/// Labels must be present, targets must be absolute URLs,
/// and the lookup label must appear at most once
fn validate_links(project: &Project) -> DomainResult<()> {
    for (idx, link) in project.links.iter().enumerate() {
        if link.label.trim().is_empty() {
            return Err(violation(project, format!("links[{}] has an empty label", idx)));
        }
        if let Err(e) = Url::parse(&link.href) {
            return Err(violation(
                project,
                format!(
                    "links[{}] ({}) is not an absolute URL: {}",
                    idx, link.label, e
                ),
            ));
        }
    }

    let github_links = project
        .links
        .iter()
        .filter(|l| l.label == GITHUB_LINK_LABEL)
        .count();
    if github_links > 1 {
        return Err(violation(
            project,
            format!(
                "label {:?} appears {} times but must be unique",
                GITHUB_LINK_LABEL, github_links
            ),
        ));
    }
    Ok(())
}

fn violation(project: &Project, reason: String) -> DomainError {
    DomainError::SchemaViolation {
        record: project.id.clone(),
        reason,
    }
}

/// Invariants that must hold true for Project domain:
///
/// 1. Id is non-empty and unique across the catalog (checked by the catalog)
/// 2. Category is one of the closed set (enforced by the type)
/// 3. Title, pitch and summary are non-empty
/// 4. Highlights may be empty; their entries may not be blank
/// 5. Metrics and video ids are optional; their entries may not be blank
/// 6. Every link target is an absolute URL
/// 7. At most one link is labelled "GitHub"
