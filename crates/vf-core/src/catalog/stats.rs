//! Aggregate figures for the gallery header.

use serde::Serialize;

use crate::project::ProjectRecord;

/// Display-only placeholder for the "Total Views" figure.
///
/// There is no view-tracking event source yet; the UI shows this value
/// as-is until one exists.
pub const TOTAL_VIEWS_PLACEHOLDER: &str = "12 views";

/// Aggregate statistics over the whole catalog (not the filtered view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_projects: usize,
    pub featured_projects: usize,
    /// Mean performance score rounded to the nearest integer; `None`
    /// for an empty catalog so no division by zero ever surfaces.
    pub avg_performance: Option<u8>,
}

impl CatalogStats {
    pub fn compute(projects: &[ProjectRecord]) -> Self {
        let total_projects = projects.len();
        let featured_projects = projects.iter().filter(|p| p.featured).count();
        let avg_performance = if total_projects == 0 {
            None
        } else {
            let sum: u32 = projects
                .iter()
                .map(|p| u32::from(p.metrics.performance.value()))
                .sum();
            Some((f64::from(sum) / total_projects as f64).round() as u8)
        };
        Self {
            total_projects,
            featured_projects,
            avg_performance,
        }
    }
}
