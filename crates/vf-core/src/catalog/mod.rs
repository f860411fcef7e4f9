//! Catalog behavior: filtering, statistics, and gallery projections.

pub mod filter;
pub mod stats;
pub mod view;

#[cfg(test)]
mod tests;

pub use filter::{filter_projects, CategoryFilter, EmptyState, ProjectFilter};
pub use stats::{CatalogStats, TOTAL_VIEWS_PLACEHOLDER};
pub use view::{ProjectCardView, ViewMode};
