pub mod entity;
pub mod invariants;

pub use entity::{Project, ProjectCategory, ProjectLink, GITHUB_LINK_LABEL};
pub use invariants::validate_project;
