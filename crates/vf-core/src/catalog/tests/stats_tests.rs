//! Tests for [`CatalogStats`].

use super::fixtures::scored_project;
use crate::catalog::stats::CatalogStats;

#[test]
fn empty_catalog_guards_the_average() {
    let stats = CatalogStats::compute(&[]);
    assert_eq!(stats.total_projects, 0);
    assert_eq!(stats.featured_projects, 0);
    assert_eq!(stats.avg_performance, None);
}

#[test]
fn single_record_average_is_its_score() {
    let stats = CatalogStats::compute(&[scored_project("a", 95, false)]);
    assert_eq!(stats.total_projects, 1);
    assert_eq!(stats.avg_performance, Some(95));
}

#[test]
fn average_rounds_to_nearest() {
    // (90 + 91) / 2 = 90.5 rounds up.
    let projects = vec![scored_project("a", 90, false), scored_project("b", 91, false)];
    assert_eq!(CatalogStats::compute(&projects).avg_performance, Some(91));
}

#[test]
fn featured_count_only_counts_featured() {
    let projects = vec![
        scored_project("a", 80, true),
        scored_project("b", 80, false),
        scored_project("c", 80, true),
    ];
    let stats = CatalogStats::compute(&projects);
    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.featured_projects, 2);
}
