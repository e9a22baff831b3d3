mod common;

use proptest::prelude::*;
use salary_insights::data::Record;
use salary_insights::filter::{self, FilterCriteria, InclusionSet, OptionalInclusionSet};
use salary_insights::metrics;

fn arb_record() -> impl Strategy<Value = Record> {
    (
        2020i64..=2025,
        prop::sample::select(vec!["Junior", "Mid-level", "Senior", "Executive"]),
        prop::sample::select(vec!["Full-time", "Part-time", "Contract", "Freelance"]),
        prop::sample::select(vec![
            "Data Scientist",
            "Data Engineer",
            "Data Analyst",
            "Machine Learning Engineer",
        ]),
        0.0f64..1_000_000.0,
        prop::sample::select(vec!["On-site", "Hybrid", "Remote"]),
        prop::sample::select(vec!["Small", "Medium", "Large"]),
    )
        .prop_map(|(year, seniority, contract, title, salary_usd, remote, size)| Record {
            year,
            seniority: seniority.to_string(),
            contract: contract.to_string(),
            title: title.to_string(),
            salary: salary_usd,
            salary_usd,
            residence: "US".to_string(),
            remote: remote.to_string(),
            company_location: "US".to_string(),
            company_size: size.to_string(),
        })
}

proptest! {
    #[test]
    fn all_values_criteria_keep_every_record(dataset in prop::collection::vec(arb_record(), 0..40)) {
        let criteria = FilterCriteria::all_of(&dataset);
        prop_assert_eq!(filter::apply(&dataset, &criteria), dataset);
    }

    #[test]
    fn empty_mandatory_set_yields_empty_result(dataset in prop::collection::vec(arb_record(), 0..40)) {
        let mut criteria = FilterCriteria::all_of(&dataset);
        criteria.contracts = InclusionSet::default();
        prop_assert!(filter::apply(&dataset, &criteria).is_empty());
    }

    #[test]
    fn title_set_restricts_exactly(dataset in prop::collection::vec(arb_record(), 0..40)) {
        let mut criteria = FilterCriteria::all_of(&dataset);
        criteria.titles = OptionalInclusionSet::new(["Data Engineer".to_string()]);
        let filtered = filter::apply(&dataset, &criteria);
        prop_assert!(filtered.iter().all(|r| r.title == "Data Engineer"));
        let expected = dataset.iter().filter(|r| r.title == "Data Engineer").count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn metrics_are_total_and_ordered(dataset in prop::collection::vec(arb_record(), 0..40)) {
        let computed = metrics::compute(&dataset, &dataset);
        prop_assert_eq!(computed.records, dataset.len());
        if !dataset.is_empty() {
            prop_assert!(computed.min_usd <= computed.p25_usd);
            prop_assert!(computed.p25_usd <= computed.median_usd);
            prop_assert!(computed.median_usd <= computed.p75_usd);
            prop_assert!(computed.p75_usd <= computed.max_usd);
            prop_assert!(computed.min_usd <= computed.mean_usd && computed.mean_usd <= computed.max_usd);
            prop_assert!(!computed.top_title.is_empty());
        }
    }

    #[test]
    fn percent_difference_never_faults(current in -1e9f64..1e9, baseline in -1e9f64..1e9) {
        let diff = metrics::percent_difference(current, baseline);
        prop_assert!(diff.is_finite());
        if baseline == 0.0 {
            prop_assert_eq!(diff, 0.0);
        }
    }

    #[test]
    fn filtering_preserves_relative_order(dataset in prop::collection::vec(arb_record(), 0..40)) {
        let mut criteria = FilterCriteria::all_of(&dataset);
        criteria.years = InclusionSet::new([2022, 2023]);
        let filtered = filter::apply(&dataset, &criteria);
        let expected: Vec<Record> = dataset
            .iter()
            .filter(|r| r.year == 2022 || r.year == 2023)
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }
}
