//! The intake form's field state and submission validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Category, MetricKind, MetricScore, NewProject, ProjectMetrics};

/// Why an intake submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("project title is required")]
    MissingTitle,
    #[error("project description is required")]
    MissingDescription,
    #[error("a project image must be uploaded")]
    MissingImage,
}

/// A single-field edit to the draft.
///
/// Tagged so the form can send every text/toggle change through one
/// channel: `{"field": "title", "value": "..."}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum DraftField {
    Title(String),
    Description(String),
    Category(Category),
    GithubUrl(String),
    LiveUrl(String),
    CodeSnippet(String),
    Featured(bool),
}

/// Field state of the intake form.
///
/// Edits are total and never rejected; validation happens once, in
/// [`ProjectDraft::finish`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub technologies: Vec<String>,
    /// Data URL of the staged image, once a decode has completed.
    pub staged_image: Option<String>,
    pub code_snippet: String,
    pub github_url: String,
    pub live_url: String,
    pub metrics: ProjectMetrics,
    pub featured: bool,
}

impl ProjectDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single-field edit.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Title(value) => self.title = value,
            DraftField::Description(value) => self.description = value,
            DraftField::Category(value) => self.category = value,
            DraftField::GithubUrl(value) => self.github_url = value,
            DraftField::LiveUrl(value) => self.live_url = value,
            DraftField::CodeSnippet(value) => self.code_snippet = value,
            DraftField::Featured(value) => self.featured = value,
        }
    }

    /// Appends the trimmed tag unless it is empty or already present
    /// (exact string match). Returns whether the list changed.
    pub fn add_technology(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.technologies.iter().any(|t| t == tag) {
            return false;
        }
        self.technologies.push(tag.to_string());
        true
    }

    /// Removes a tag by exact value. Returns whether it was present.
    pub fn remove_technology(&mut self, tag: &str) -> bool {
        match self.technologies.iter().position(|t| t == tag) {
            Some(index) => {
                self.technologies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sets one metric slider; out-of-range values are clamped.
    pub fn set_metric(&mut self, kind: MetricKind, value: i64) {
        self.metrics.set(kind, MetricScore::from_i64(value));
    }

    pub fn stage_image(&mut self, data_url: String) {
        self.staged_image = Some(data_url);
    }

    pub fn clear_image(&mut self) {
        self.staged_image = None;
    }

    /// Validates required fields and assembles the submission payload.
    ///
    /// Rejection leaves the draft untouched; nothing is partially
    /// committed. Empty optional fields become absent, not empty strings.
    pub fn finish(&self) -> Result<NewProject, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let image = self
            .staged_image
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(DraftError::MissingImage)?
            .to_string();

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            technologies: self.technologies.clone(),
            image,
            code_snippet: none_if_empty(&self.code_snippet),
            github_url: none_if_empty(&self.github_url),
            live_url: none_if_empty(&self.live_url),
            metrics: self.metrics,
            featured: self.featured,
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
