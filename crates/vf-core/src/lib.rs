//! # vf-core
//!
//! Core domain models and catalog logic for Vizfolio.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: project records, the closed category enumeration, bounded
//! metric scores, catalog filtering and statistics, gallery card projections,
//! and the intake draft that validates user-submitted projects.

// Public module exports
pub mod catalog;
pub mod ids;
pub mod project;
pub mod seed;

// Re-export commonly used types at the crate root
pub use catalog::{
    filter_projects, CatalogStats, CategoryFilter, EmptyState, ProjectCardView, ProjectFilter,
    ViewMode,
};
pub use ids::ProjectId;
pub use project::{Category, DraftError, NewProject, ProjectDraft, ProjectMetrics, ProjectRecord};
