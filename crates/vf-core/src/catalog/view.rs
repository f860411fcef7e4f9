//! View projections: what a gallery card actually renders.

use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;
use crate::project::{Category, CategoryStyle, ProjectMetrics, ProjectRecord};

/// Gallery layout toggle. Exactly two states, switched by direct user
/// action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// How many technology tags a card shows before collapsing the rest
/// into an overflow count.
pub const CARD_TAG_LIMIT: usize = 3;

/// Card summaries are cut at this many characters.
pub const CARD_SUMMARY_LIMIT: usize = 160;

/// One gallery card, projected from a [`ProjectRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCardView {
    pub id: ProjectId,
    pub title: String,
    /// Truncated description.
    pub summary: String,
    pub category: Category,
    pub badge: CategoryStyle,
    /// At most [`CARD_TAG_LIMIT`] tags.
    pub technologies: Vec<String>,
    /// Count of tags hidden behind the "+N more" chip.
    pub more_technologies: usize,
    pub image: String,
    pub metrics: ProjectMetrics,
    pub featured: bool,
    pub created_at: String,
    /// Whether the "view code" modal has a snippet to show.
    pub has_snippet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl ProjectCardView {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let technologies: Vec<String> = record
            .technologies
            .iter()
            .take(CARD_TAG_LIMIT)
            .cloned()
            .collect();
        let more_technologies = record.technologies.len().saturating_sub(CARD_TAG_LIMIT);
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            summary: truncate_chars(&record.description, CARD_SUMMARY_LIMIT),
            category: record.category,
            badge: record.category.style(),
            technologies,
            more_technologies,
            image: record.image.clone(),
            metrics: record.metrics,
            featured: record.featured,
            created_at: record.created_at.format("%b %-d, %Y").to_string(),
            has_snippet: record.code_snippet.is_some(),
            github_url: record.github_url.clone(),
            live_url: record.live_url.clone(),
        }
    }
}

/// Truncates on a char boundary, appending an ellipsis when cut.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod truncate_tests {
    use super::truncate_chars;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let text = "a".repeat(200);
        let cut = truncate_chars(&text, 160);
        assert_eq!(cut.chars().count(), 161);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn cuts_on_char_boundaries() {
        let text = "é".repeat(200);
        let cut = truncate_chars(&text, 160);
        assert!(cut.ends_with('…'));
    }
}
