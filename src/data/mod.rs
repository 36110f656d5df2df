// src/data/mod.rs
//
// Built-in catalog data.
// Plain records only; validation happens when the catalog service loads them.

pub mod profile;
pub mod projects;

pub use profile::profile;
pub use projects::projects;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_profile, Catalog, ProjectCategory};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::new(projects()).unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(validate_profile(&profile()).is_ok());
    }

    #[test]
    fn test_builtin_catalog_covers_every_category() {
        let catalog = Catalog::new(projects()).unwrap();
        for category in ProjectCategory::ALL {
            assert!(catalog.count_in(category) > 0, "{} has no projects", category);
        }
    }
}
