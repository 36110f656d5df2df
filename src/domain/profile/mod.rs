//! Critical Profile Invariants:
//!
//! 1. Exactly one profile exists per portfolio
//! 2. Name and headline cannot be empty
//! 3. List entries cannot be blank
//! 4. Every present link is an absolute URL; absent links are not an error

pub mod entity;

pub use entity::{Profile, ProfileLinks};

use url::Url;

use crate::domain::{DomainError, DomainResult};

const PROFILE_RECORD: &str = "profile";

/// Validates Profile invariants
pub fn validate_profile(profile: &Profile) -> DomainResult<()> {
    if profile.name.trim().is_empty() {
        return Err(violation("name cannot be empty".to_string()));
    }
    if profile.headline.trim().is_empty() {
        return Err(violation("headline cannot be empty".to_string()));
    }

    for (field, values) in [
        ("strengths", &profile.strengths),
        ("metrics", &profile.metrics),
        ("stack", &profile.stack),
        ("availability", &profile.availability),
    ] {
        if let Some(idx) = values.iter().position(|v| v.trim().is_empty()) {
            return Err(violation(format!("{}[{}] cannot be empty", field, idx)));
        }
    }

    for (label, href) in profile.links.labeled() {
        if let Err(e) = Url::parse(href) {
            return Err(violation(format!(
                "{} link is not an absolute URL: {}",
                label, e
            )));
        }
    }

    Ok(())
}

fn violation(reason: String) -> DomainError {
    DomainError::SchemaViolation {
        record: PROFILE_RECORD.to_string(),
        reason,
    }
}
