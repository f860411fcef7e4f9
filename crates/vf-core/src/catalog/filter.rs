//! The gallery filter: a text query and a category selector.

use serde::Serialize;

use crate::project::{Category, ProjectRecord};

/// Category side of the filter: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

impl From<CategoryFilter> for Option<Category> {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }
}

/// The two independent, transient filter inputs of the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl ProjectFilter {
    /// True when any input narrows the view.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != CategoryFilter::All
    }

    /// The filter predicate: the query (when non-empty) must be a
    /// case-insensitive substring of the title, the description, or any
    /// technology tag, AND the category selector must accept the record.
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        if !self.category.accepts(project.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
            || project
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&needle))
    }
}

/// Produces the filtered view, preserving source order
/// (most-recent-first).
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    filter: &ProjectFilter,
) -> Vec<&'a ProjectRecord> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// What the gallery should say when the filtered view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    /// Projects exist but none match the active filter; suggest
    /// adjusting the search or selector.
    NoMatches,
    /// Nothing has been added yet; suggest creating the first project.
    NoProjects,
}

impl EmptyState {
    /// `None` when the filtered view has entries.
    pub fn for_view(filter: &ProjectFilter, visible: usize) -> Option<EmptyState> {
        if visible > 0 {
            return None;
        }
        Some(if filter.is_active() {
            EmptyState::NoMatches
        } else {
            EmptyState::NoProjects
        })
    }
}
