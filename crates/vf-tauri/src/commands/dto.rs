//! DTOs for the frontend API.
//!
//! These keep the wire shapes stable while the domain models evolve.

use serde::Serialize;

use vf_core::catalog::{CatalogStats, TOTAL_VIEWS_PLACEHOLDER};
use vf_core::project::{Category, ProjectRecord};

/// Header statistics block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_projects: usize,
    pub featured_projects: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_performance: Option<u8>,
    /// Placeholder until a view-tracking source exists.
    pub total_views: &'static str,
}

impl From<CatalogStats> for StatsDto {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_projects: stats.total_projects,
            featured_projects: stats.featured_projects,
            avg_performance: stats.avg_performance,
            total_views: TOTAL_VIEWS_PLACEHOLDER,
        }
    }
}

/// One entry of the category selector.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Category,
    pub label: &'static str,
    pub accent: &'static str,
}

/// All selectable categories, in display order.
pub fn category_options() -> Vec<CategoryDto> {
    Category::ALL
        .iter()
        .map(|&category| {
            let style = category.style();
            CategoryDto {
                id: category,
                label: style.label,
                accent: style.accent,
            }
        })
        .collect()
}

/// The full record plus presentation attributes, for the detail and
/// code-viewer modals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailDto {
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub category_label: &'static str,
    pub category_accent: &'static str,
    pub created_label: String,
}

impl From<ProjectRecord> for ProjectDetailDto {
    fn from(record: ProjectRecord) -> Self {
        let style = record.category.style();
        let created_label = record.created_at.format("%b %-d, %Y").to_string();
        Self {
            record,
            category_label: style.label,
            category_accent: style.accent,
            created_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::seed::sample_projects;

    #[test]
    fn stats_dto_carries_the_views_placeholder() {
        let dto = StatsDto::from(CatalogStats::compute(&sample_projects()));
        assert_eq!(dto.total_views, "12 views");
        assert_eq!(dto.total_projects, 1);
    }

    #[test]
    fn category_options_cover_every_variant() {
        let options = category_options();
        assert_eq!(options.len(), Category::ALL.len());
        assert_eq!(options[0].label, "Dashboard");
        assert_eq!(options[0].accent, "blue-cyan");
    }

    #[test]
    fn detail_dto_flattens_the_record() {
        let record = sample_projects().remove(0);
        let dto = ProjectDetailDto::from(record);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], "seed-gapminder");
        assert_eq!(json["categoryLabel"], "Visualization");
        assert_eq!(json["createdLabel"], "Aug 27, 2025");
    }
}
