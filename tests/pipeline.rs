mod common;

use common::fixture_path;
use salary_insights::loader;

#[test]
fn fixture_loads_with_dropped_row_accounting() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    assert_eq!(outcome.rows_read, 8);
    assert_eq!(outcome.rows_dropped, 1);
    assert_eq!(outcome.dataset.len(), 7);
}

#[test]
fn normalization_leaves_no_missing_analytical_fields() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    for record in &outcome.dataset {
        assert!(!record.seniority.is_empty());
        assert!(!record.contract.is_empty());
        assert!(!record.title.is_empty());
        assert!(!record.residence.is_empty());
        assert!(!record.remote.is_empty());
        assert!(!record.company_location.is_empty());
        assert!(!record.company_size.is_empty());
        assert!(record.salary_usd.is_finite());
    }
}

#[test]
fn categorical_codes_arrive_as_display_labels() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let first = &outcome.dataset[0];
    assert_eq!(first.year, 2023);
    assert_eq!(first.seniority, "Senior");
    assert_eq!(first.contract, "Full-time");
    assert_eq!(first.remote, "Remote");
    assert_eq!(first.company_size, "Medium");
}

#[test]
fn title_variants_are_folded_and_unknowns_pass_through() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let titles: Vec<&str> = outcome.dataset.iter().map(|r| r.title.as_str()).collect();
    assert!(titles.contains(&"Machine Learning Engineer"));
    assert!(!titles.contains(&"ML Engineer"));
    assert!(titles.contains(&"Quant Researcher"));
}

#[test]
fn unknown_remote_ratio_is_preserved_untranslated() {
    let outcome = loader::load_dataset(&fixture_path("salaries.csv")).expect("load fixture");
    let edge = outcome
        .dataset
        .iter()
        .find(|r| r.title == "Quant Researcher")
        .expect("edge row");
    assert_eq!(edge.remote, "75");
}

#[test]
fn cache_loads_each_source_once() {
    let mut cache = loader::DatasetCache::new();
    let path = fixture_path("salaries.csv");
    let first_len = cache.get_or_load(&path).expect("first load").dataset.len();
    let second_len = cache.get_or_load(&path).expect("cached load").dataset.len();
    assert_eq!(first_len, second_len);
    assert_eq!(cache.len(), 1);
}

#[test]
fn missing_source_file_is_an_error() {
    assert!(loader::load_dataset(&fixture_path("does-not-exist.csv")).is_err());
}
