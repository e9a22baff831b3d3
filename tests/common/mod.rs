#![allow(dead_code)]

use std::path::PathBuf;

use salary_insights::data::Record;

/// Returns the absolute path to a fixture under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Builds a normalized record with sensible defaults for the fields a test
/// does not care about.
pub fn record(year: i64, seniority: &str, title: &str, remote: &str, salary_usd: f64) -> Record {
    Record {
        year,
        seniority: seniority.to_string(),
        contract: "Full-time".to_string(),
        title: title.to_string(),
        salary: salary_usd,
        salary_usd,
        residence: "US".to_string(),
        remote: remote.to_string(),
        company_location: "US".to_string(),
        company_size: "Medium".to_string(),
    }
}
