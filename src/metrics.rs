use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::data::Record;

/// Descriptive statistics over the USD salary column of one dataset.
///
/// Always a fresh value object: recomputed on every filter change and never
/// mutated in place. An empty input produces the zeroed default rather than
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalaryMetrics {
    pub mean_usd: f64,
    pub median_usd: f64,
    pub min_usd: f64,
    pub max_usd: f64,
    pub std_dev_usd: f64,
    pub p25_usd: f64,
    pub p75_usd: f64,
    pub records: usize,
    pub top_title: String,
    pub yoy_change_pct: f64,
    pub distinct_titles: usize,
}

/// Computes the metrics record for `filtered`. The canonical dataset is
/// passed alongside so callers can see the selection ratio in the logs and
/// comparison consumers share one call shape.
pub fn compute(filtered: &[Record], canonical: &[Record]) -> SalaryMetrics {
    debug!(
        "Computing salary metrics over {} of {} record(s)",
        filtered.len(),
        canonical.len()
    );
    if filtered.is_empty() {
        return SalaryMetrics::default();
    }

    let mut salaries: Vec<f64> = filtered.iter().map(|record| record.salary_usd).collect();
    salaries.sort_by(|a, b| a.total_cmp(b));
    let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;

    SalaryMetrics {
        mean_usd: mean,
        median_usd: percentile(&salaries, 0.5),
        min_usd: salaries[0],
        max_usd: salaries[salaries.len() - 1],
        std_dev_usd: sample_std_dev(&salaries, mean),
        p25_usd: percentile(&salaries, 0.25),
        p75_usd: percentile(&salaries, 0.75),
        records: filtered.len(),
        top_title: most_frequent_title(filtered),
        yoy_change_pct: year_over_year_change(filtered),
        distinct_titles: filtered.iter().map(|record| record.title.as_str()).unique().count(),
    }
}

/// Percentage change of `current` relative to `baseline`, defined as zero
/// when the baseline is zero so degenerate inputs never fault.
pub fn percent_difference(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

/// Mean USD salary per category, in first-seen category order. The stable
/// order is what makes downstream tie handling deterministic.
pub fn group_mean(records: &[Record], key: impl Fn(&Record) -> &str) -> Vec<(String, f64)> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (f64, usize)> = HashMap::new();
    for record in records {
        let category = key(record);
        if !totals.contains_key(category) {
            order.push(category.to_string());
        }
        let entry = totals.entry(category.to_string()).or_insert((0.0, 0));
        entry.0 += record.salary_usd;
        entry.1 += 1;
    }
    order
        .into_iter()
        .map(|category| {
            let (sum, count) = totals[&category];
            (category, sum / count as f64)
        })
        .collect()
}

/// Formats a value as whole USD with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Order statistic at `fraction` with linear interpolation between
/// neighbouring ranks (inclusive method). `sorted` must be ascending.
fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Mode of the title column with a stable tie-break: on equal counts the
/// title seen earliest in the dataset wins.
fn most_frequent_title(records: &[Record]) -> String {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let entry = counts.entry(record.title.as_str()).or_insert((0, index));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(title, _)| title.to_string())
        .unwrap_or_default()
}

/// Percentage change in mean salary between the two largest distinct years
/// present. Zero when fewer than two years or the baseline mean is zero.
fn year_over_year_change(records: &[Record]) -> f64 {
    let years: Vec<i64> = records.iter().map(|record| record.year).unique().sorted().collect();
    if years.len() < 2 {
        return 0.0;
    }
    let later = years[years.len() - 1];
    let earlier = years[years.len() - 2];
    percent_difference(mean_for_year(records, later), mean_for_year(records, earlier))
}

fn mean_for_year(records: &[Record], year: i64) -> f64 {
    let salaries: Vec<f64> = records
        .iter()
        .filter(|record| record.year == year)
        .map(|record| record.salary_usd)
        .collect();
    if salaries.is_empty() {
        return 0.0;
    }
    salaries.iter().sum::<f64>() / salaries.len() as f64
}
