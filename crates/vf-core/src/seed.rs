//! Sample catalog contents for a fresh session.
//!
//! There is no persistence; every session starts from this seed.

use chrono::NaiveDate;

use crate::ids::ProjectId;
use crate::project::{Category, MetricScore, ProjectMetrics, ProjectRecord};

const GAPMINDER_SNIPPET: &str = r#"packages <- c("dplyr", "gapminder", "ggplot2")
installed <- rownames(installed.packages())
for (p in packages) {
  if (!(p %in% installed)) {
    install.packages(p)
  }
}

library(dplyr)
library(gapminder)
library(ggplot2)

ggplot(gapminder, aes(x = gdpPercap, y = lifeExp)) +
  geom_point(alpha = 0.5, color = "steelblue") +
  scale_x_log10() +
  facet_wrap(~ continent) +
  labs(title = "GDP vs Life Expectancy across Continents")

gapminder %>%
  group_by(year, continent) %>%
  summarise(mean_lifeExp = mean(lifeExp)) %>%
  ggplot(aes(x = year, y = mean_lifeExp, color = continent)) +
  geom_line(size = 1.2) +
  labs(title = "Life Expectancy Trends by Continent")

ggplot(gapminder, aes(x = continent, y = lifeExp, fill = continent)) +
  geom_boxplot() +
  labs(title = "Life Expectancy by Continent")
"#;

/// The projects every new session starts with.
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![ProjectRecord {
        id: ProjectId::from("seed-gapminder"),
        title: "Global Development Insights with R".to_string(),
        description: "A comprehensive data analysis project using the Gapminder dataset in R. \
                      The project showcases faceting, trend analysis, transformations, boxplots, \
                      and distribution comparisons to reveal global patterns in life expectancy \
                      and economic growth across continents."
            .to_string(),
        category: Category::Visualization,
        technologies: vec![
            "R (Data Analysis & Visualization)".to_string(),
            "ggplot2 (Charts & Faceting)".to_string(),
            "dplyr (Data Manipulation)".to_string(),
            "Gapminder Dataset (Real-world data)".to_string(),
        ],
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=800"
            .to_string(),
        code_snippet: Some(GAPMINDER_SNIPPET.to_string()),
        github_url: Some("https://github.com/Aboelyazed21/project2.data.git".to_string()),
        live_url: Some("https://sales-dashboard-demo.com".to_string()),
        metrics: ProjectMetrics {
            performance: MetricScore::new(95),
            complexity: MetricScore::new(85),
            impact: MetricScore::new(92),
        },
        featured: false,
        created_at: NaiveDate::from_ymd_opt(2025, 8, 27).expect("valid seed date"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let projects = sample_projects();
        for (i, a) in projects.iter().enumerate() {
            for b in &projects[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn seed_records_pass_the_intake_invariants() {
        for record in sample_projects() {
            assert!(!record.title.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.image.is_empty());
            // Tag lists are deduped on entry; the seed must respect that too.
            let mut tags = record.technologies.clone();
            tags.sort();
            tags.dedup();
            assert_eq!(tags.len(), record.technologies.len());
        }
    }
}
