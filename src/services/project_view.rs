// src/services/project_view.rs
//
// Filter-and-render view over the project catalog.
//
// State machine: the only state is Idle(selected);
// every transition is Idle(x) --select(y)--> Idle(y).

use std::sync::Arc;

use log::{debug, warn};

use crate::application::dto::{FilterOptionDto, ProjectCardDto, ViewFrameDto};
use crate::domain::{Catalog, CategoryFilter, Project};
use crate::error::{AppError, AppResult};
use crate::events::{CategorySelected, EventBus};

/// Owns the current filter selection, the view's only mutable state
pub struct ProjectFilterView {
    catalog: Arc<Catalog>,
    selected: CategoryFilter,
    event_bus: Arc<EventBus>,
}

impl ProjectFilterView {
    /// A fresh view always starts on "All"
    pub fn new(catalog: Arc<Catalog>, event_bus: Arc<EventBus>) -> Self {
        Self {
            catalog,
            selected: CategoryFilter::All,
            event_bus,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> CategoryFilter {
        self.selected
    }

    /// The fixed list of selectable options
    pub fn categories(&self) -> &'static [CategoryFilter] {
        &CategoryFilter::ALL_OPTIONS
    }

    /// Switch selection and recompute. Re-selecting the active filter is allowed.
    pub fn select(&mut self, filter: CategoryFilter) {
        let previous = self.selected;
        self.selected = filter;

        let visible_count = self.filtered_projects().len();
        debug!(
            "selection {} -> {} ({} visible)",
            previous, filter, visible_count
        );
        self.event_bus
            .emit(CategorySelected::new(previous, filter, visible_count));
    }

    /// Select from untyped input.
    /// Unknown values are rejected and the current selection is kept.
    pub fn select_category(&mut self, raw: &str) -> AppResult<()> {
        let filter = CategoryFilter::parse(raw).map_err(|e| {
            warn!("rejected selection {:?}, keeping {}", raw, self.selected);
            AppError::InvalidArgument(e.to_string())
        })?;

        self.select(filter);
        Ok(())
    }

    /// Projects visible under the current selection.
    /// A stable filter over catalog order; the catalog itself is never touched.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.catalog
            .get_all()
            .iter()
            .filter(|p| self.selected.matches(p))
            .collect()
    }

    /// Render-ready cards for the current selection
    pub fn cards(&self) -> Vec<ProjectCardDto> {
        self.filtered_projects()
            .into_iter()
            .map(ProjectCardDto::from)
            .collect()
    }

    /// Everything the rendering layer needs for one frame
    pub fn frame(&self) -> ViewFrameDto {
        ViewFrameDto {
            selected: self.selected.label().to_string(),
            categories: self
                .categories()
                .iter()
                .map(|option| FilterOptionDto::new(*option, self.selected))
                .collect(),
            projects: self.cards(),
        }
    }
}
