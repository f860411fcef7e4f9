//! Project records as stored in the catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, ProjectMetrics};
use crate::ids::ProjectId;

/// A project in the catalog.
///
/// Records are immutable once created: the catalog is append-only and
/// offers no edit or delete operation. Field names serialize camelCase to
/// match the webview's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub technologies: Vec<String>,
    /// Remote URL or embedded `data:` URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub metrics: ProjectMetrics,
    pub featured: bool,
    /// Serialized as `YYYY-MM-DD`.
    pub created_at: NaiveDate,
}

/// A validated submission, lacking only the fields the catalog assigns
/// on insert (`id`, `created_at`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub metrics: ProjectMetrics,
    pub featured: bool,
}

impl NewProject {
    /// Completes the record with the catalog-assigned fields.
    pub fn into_record(self, id: ProjectId, created_at: NaiveDate) -> ProjectRecord {
        ProjectRecord {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            technologies: self.technologies,
            image: self.image,
            code_snippet: self.code_snippet,
            github_url: self.github_url,
            live_url: self.live_url,
            metrics: self.metrics,
            featured: self.featured,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::MetricScore;

    fn minimal_new_project() -> NewProject {
        NewProject {
            title: "Test".to_string(),
            description: "Desc".to_string(),
            category: Category::Dashboard,
            technologies: vec![],
            image: "data:image/png;base64,AAAA".to_string(),
            code_snippet: None,
            github_url: None,
            live_url: None,
            metrics: ProjectMetrics::default(),
            featured: false,
        }
    }

    #[test]
    fn into_record_carries_assigned_fields() {
        let id = ProjectId::from("p-1");
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let record = minimal_new_project().into_record(id.clone(), date);
        assert_eq!(record.id, id);
        assert_eq!(record.created_at, date);
        assert_eq!(record.title, "Test");
    }

    #[test]
    fn record_serializes_camel_case_and_omits_absent_options() {
        let record = minimal_new_project().into_record(
            ProjectId::from("p-1"),
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["createdAt"], "2026-08-23");
        assert_eq!(json["metrics"]["performance"], 85);
        assert!(json.get("codeSnippet").is_none());
        assert!(json.get("githubUrl").is_none());
        assert!(json.get("liveUrl").is_none());
    }

    #[test]
    fn record_with_snippet_serializes_it() {
        let mut new_project = minimal_new_project();
        new_project.code_snippet = Some("print(1)".to_string());
        new_project.metrics.performance = MetricScore::new(95);
        let record = new_project.into_record(
            ProjectId::from("p-2"),
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["codeSnippet"], "print(1)");
        assert_eq!(json["metrics"]["performance"], 95);
    }
}
