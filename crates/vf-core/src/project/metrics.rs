//! Bounded project metrics.

use serde::{Deserialize, Serialize};

/// A score in the closed range `[0, 100]`.
///
/// Construction clamps, so a score can never leave the range no matter
/// what the slider (or a hand-crafted IPC payload) sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MetricScore(u8);

impl MetricScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Clamps arbitrary integers; slider values arrive as i64 over IPC.
    pub fn from_i64(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for MetricScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::from_i64(raw))
    }
}

/// Which of the three project metrics a slider adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Performance,
    Complexity,
    Impact,
}

/// The three bounded metrics shown on every project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub performance: MetricScore,
    pub complexity: MetricScore,
    pub impact: MetricScore,
}

impl Default for ProjectMetrics {
    /// Intake form defaults.
    fn default() -> Self {
        Self {
            performance: MetricScore::new(85),
            complexity: MetricScore::new(70),
            impact: MetricScore::new(90),
        }
    }
}

impl ProjectMetrics {
    pub fn get(&self, kind: MetricKind) -> MetricScore {
        match kind {
            MetricKind::Performance => self.performance,
            MetricKind::Complexity => self.complexity,
            MetricKind::Impact => self.impact,
        }
    }

    pub fn set(&mut self, kind: MetricKind, score: MetricScore) {
        match kind {
            MetricKind::Performance => self.performance = score,
            MetricKind::Complexity => self.complexity = score,
            MetricKind::Impact => self.impact = score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_above_max() {
        assert_eq!(MetricScore::new(250).value(), 100);
        assert_eq!(MetricScore::new(100).value(), 100);
        assert_eq!(MetricScore::new(0).value(), 0);
    }

    #[test]
    fn from_i64_clamps_both_ends() {
        assert_eq!(MetricScore::from_i64(-5).value(), 0);
        assert_eq!(MetricScore::from_i64(101).value(), 100);
        assert_eq!(MetricScore::from_i64(42).value(), 42);
    }

    #[test]
    fn deserialization_clamps() {
        let score: MetricScore = serde_json::from_str("9000").unwrap();
        assert_eq!(score.value(), 100);
        let score: MetricScore = serde_json::from_str("-3").unwrap();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn defaults_match_intake_form() {
        let metrics = ProjectMetrics::default();
        assert_eq!(metrics.performance.value(), 85);
        assert_eq!(metrics.complexity.value(), 70);
        assert_eq!(metrics.impact.value(), 90);
    }

    #[test]
    fn set_by_kind_updates_only_that_metric() {
        let mut metrics = ProjectMetrics::default();
        metrics.set(MetricKind::Complexity, MetricScore::new(12));
        assert_eq!(metrics.complexity.value(), 12);
        assert_eq!(metrics.performance.value(), 85);
        assert_eq!(metrics.impact.value(), 90);
    }
}
