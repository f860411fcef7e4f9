//! Project domain: records, categories, metrics, and the intake draft.

pub mod category;
pub mod draft;
pub mod metrics;
pub mod record;

pub use category::{Category, CategoryStyle};
pub use draft::{DraftError, DraftField, ProjectDraft};
pub use metrics::{MetricKind, MetricScore, ProjectMetrics};
pub use record::{NewProject, ProjectRecord};
