//! The closed set of project categories and their presentation attributes.

use serde::{Deserialize, Serialize};

/// Project category. This set is closed; the filter selector and the badge
/// styling are both derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Intake form default.
    #[default]
    Dashboard,
    Analytics,
    Visualization,
    Reporting,
}

/// Presentation attributes of a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStyle {
    pub label: &'static str,
    /// Gradient token the frontend maps to its color classes.
    pub accent: &'static str,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Dashboard,
        Category::Analytics,
        Category::Visualization,
        Category::Reporting,
    ];

    /// Badge attributes for this category.
    ///
    /// The match is exhaustive without a fallback arm: a new variant will
    /// not compile until it gets a style here.
    pub fn style(self) -> CategoryStyle {
        match self {
            Category::Dashboard => CategoryStyle {
                label: "Dashboard",
                accent: "blue-cyan",
            },
            Category::Analytics => CategoryStyle {
                label: "Analytics",
                accent: "purple-pink",
            },
            Category::Visualization => CategoryStyle {
                label: "Visualization",
                accent: "green-emerald",
            },
            Category::Reporting => CategoryStyle {
                label: "Reporting",
                accent: "orange-red",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dashboard => "dashboard",
            Category::Analytics => "analytics",
            Category::Visualization => "visualization",
            Category::Reporting => "reporting",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
