mod common;

use common::fixture_path;
use salary_insights::filter::{self, FilterCriteria, InclusionSet};
use salary_insights::{loader, metrics};

#[test]
fn fixture_metrics_match_hand_computed_values() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let computed = metrics::compute(&outcome.dataset, &outcome.dataset);

    assert_eq!(computed.records, 7);
    assert!((computed.mean_usd - 117_142.857).abs() < 0.5);
    assert_eq!(computed.median_usd, 100_000.0);
    assert_eq!(computed.min_usd, 60_000.0);
    assert_eq!(computed.max_usd, 250_000.0);
    assert_eq!(computed.top_title, "Data Scientist");
    assert_eq!(computed.distinct_titles, 6);
    // 2023 mean 90,000 vs 2024 mean 128,000.
    assert!((computed.yoy_change_pct - 42.222).abs() < 0.01);
}

#[test]
fn filtered_subset_gets_fresh_metrics() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let mut criteria = FilterCriteria::all_of(&outcome.dataset);
    criteria.years = InclusionSet::new([2024]);
    criteria.seniorities = InclusionSet::new(["Senior".to_string()]);
    let filtered = filter::apply(&outcome.dataset, &criteria);

    let computed = metrics::compute(&filtered, &outcome.dataset);
    assert_eq!(computed.records, 3);
    assert!((computed.mean_usd - 110_000.0).abs() < 1e-9);
    assert_eq!(computed.yoy_change_pct, 0.0);
}

#[test]
fn empty_subset_is_a_first_class_case() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let criteria = FilterCriteria::default();
    let filtered = filter::apply(&outcome.dataset, &criteria);
    assert!(filtered.is_empty());

    let computed = metrics::compute(&filtered, &outcome.dataset);
    assert_eq!(computed, metrics::SalaryMetrics::default());
    assert_eq!(computed.top_title, "");
    assert_eq!(computed.distinct_titles, 0);
}

#[test]
fn all_values_criteria_are_the_identity_filter() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let criteria = FilterCriteria::all_of(&outcome.dataset);
    assert_eq!(filter::apply(&outcome.dataset, &criteria), outcome.dataset);
}
