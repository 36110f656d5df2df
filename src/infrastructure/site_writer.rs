// src/infrastructure/site_writer.rs
//
// Static Site Output
//
// CRITICAL RULES:
// - One page per filter option, in the fixed option order
// - The view's selection is restored after writing, even on failure
// - Existing pages with the same names are overwritten; nothing else is touched

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info};

use crate::application::SiteConfig;
use crate::domain::{CategoryFilter, Profile};
use crate::error::AppResult;
use crate::events::{EventBus, SiteRendered};
use crate::infrastructure::html_renderer::HtmlRenderer;
use crate::services::ProjectFilterView;

/// Result of one site write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub output_dir: PathBuf,
    /// Written pages, in option order
    pub pages: Vec<PathBuf>,
}

pub struct SiteWriter {
    output_dir: PathBuf,
    renderer: HtmlRenderer,
    event_bus: Arc<EventBus>,
}

impl SiteWriter {
    pub fn new(output_dir: PathBuf, renderer: HtmlRenderer, event_bus: Arc<EventBus>) -> Self {
        Self {
            output_dir,
            renderer,
            event_bus,
        }
    }

    pub fn from_config(config: &SiteConfig, event_bus: Arc<EventBus>) -> Self {
        Self::new(
            config.output_dir.clone(),
            HtmlRenderer::new(config.page_title.clone()),
            event_bus,
        )
    }

    /// Render every filter option to its own page
    pub fn write(
        &self,
        view: &mut ProjectFilterView,
        profile: &Profile,
    ) -> AppResult<RenderedSite> {
        fs::create_dir_all(&self.output_dir)?;

        let original = view.selected();
        let written = self.write_pages(view, profile);
        if view.selected() != original {
            view.select(original);
        }
        let pages = written?;

        info!(
            "wrote {} pages to {}",
            pages.len(),
            self.output_dir.display()
        );
        self.event_bus
            .emit(SiteRendered::new(self.output_dir.clone(), pages.clone()));

        Ok(RenderedSite {
            output_dir: self.output_dir.clone(),
            pages,
        })
    }

    fn write_pages(
        &self,
        view: &mut ProjectFilterView,
        profile: &Profile,
    ) -> AppResult<Vec<PathBuf>> {
        let mut pages = Vec::with_capacity(CategoryFilter::ALL_OPTIONS.len());

        for option in CategoryFilter::ALL_OPTIONS {
            view.select(option);
            let frame = view.frame();
            let html = self.renderer.render_page(profile, &frame);

            let path = self.output_dir.join(option.page_name());
            fs::write(&path, html)?;
            debug!("{} -> {} ({} cards)", option, path.display(), frame.projects.len());

            pages.push(path);
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::domain::{Catalog, ProjectCategory};
    use tempfile::TempDir;

    fn setup(output_dir: PathBuf) -> (SiteWriter, ProjectFilterView, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let catalog = Arc::new(Catalog::new(data::projects()).unwrap());
        let view = ProjectFilterView::new(catalog, Arc::clone(&bus));
        let writer = SiteWriter::new(
            output_dir,
            HtmlRenderer::new("Portfolio").with_year(2026),
            Arc::clone(&bus),
        );
        (writer, view, bus)
    }

    #[test]
    fn test_writes_one_page_per_option() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site");
        let (writer, mut view, _bus) = setup(out.clone());

        let site = writer.write(&mut view, &data::profile()).unwrap();

        let names: Vec<_> = site
            .pages
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["index.html", "roblox.html", "unity.html", "tooling.html"]);
        assert!(site.pages.iter().all(|p| p.exists()));
        assert_eq!(site.output_dir, out);
    }

    #[test]
    fn test_pages_only_hold_matching_cards() {
        let temp = TempDir::new().unwrap();
        let (writer, mut view, _bus) = setup(temp.path().to_path_buf());

        writer.write(&mut view, &data::profile()).unwrap();

        let index = fs::read_to_string(temp.path().join("index.html")).unwrap();
        let unity = fs::read_to_string(temp.path().join("unity.html")).unwrap();
        assert_eq!(index.matches("<article class=\"card\"").count(), 6);
        assert_eq!(unity.matches("<article class=\"card\"").count(), 1);
        assert!(unity.contains("data-category=\"Unity\""));
        assert!(!unity.contains("data-category=\"Roblox\""));
    }

    #[test]
    fn test_restores_selection_and_emits() {
        let temp = TempDir::new().unwrap();
        let (writer, mut view, bus) = setup(temp.path().to_path_buf());
        view.select(CategoryFilter::Only(ProjectCategory::Tooling));
        bus.clear_event_log();

        writer.write(&mut view, &data::profile()).unwrap();

        assert_eq!(view.selected(), CategoryFilter::Only(ProjectCategory::Tooling));
        let log = bus.get_event_log();
        assert_eq!(log.last().unwrap().event_type, "SiteRendered");
    }

    #[test]
    fn test_unwritable_target_fails_and_restores() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("taken");
        fs::write(&blocker, "not a directory").unwrap();
        let (writer, mut view, bus) = setup(blocker.join("site"));
        bus.clear_event_log();

        assert!(writer.write(&mut view, &data::profile()).is_err());
        assert_eq!(view.selected(), CategoryFilter::All);
        assert!(bus
            .get_event_log()
            .iter()
            .all(|e| e.event_type != "SiteRendered"));
    }
}
