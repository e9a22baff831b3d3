use crate::data::Record;
use crate::metrics::{self, SalaryMetrics};
use crate::schema::{REMOTE_ON_SITE, REMOTE_REMOTE};

/// Coefficient-of-variation percentage above which dispersion is called out.
const HIGH_VARIABILITY_CV: f64 = 50.0;
/// Mean-to-median gap, as a share of the mean, that signals skew.
const SKEW_GAP_SHARE: f64 = 0.1;
/// Minimum remote-vs-on-site gap (percent) worth reporting.
const REMOTE_GAP_PCT: f64 = 5.0;

/// Applies the fixed battery of heuristic rules to a filtered dataset and its
/// metrics, producing human-readable conclusions in a fixed order.
///
/// An empty dataset short-circuits to a single placeholder; a non-empty
/// dataset that trips no rule yields a single generic fallback.
pub fn generate(records: &[Record], metrics: &SalaryMetrics) -> Vec<String> {
    if records.is_empty() {
        return vec!["No records match the current selection; no insights available.".to_string()];
    }

    let mut insights = Vec::new();
    if let Some(insight) = yearly_trend(metrics) {
        insights.push(insight);
    }
    if let Some(insight) = high_variability(metrics) {
        insights.push(insight);
    }
    if let Some(insight) = skewed_distribution(metrics) {
        insights.push(insight);
    }
    if let Some(insight) = remote_gap(records) {
        insights.push(insight);
    }
    if let Some(insight) = seniority_gap(records) {
        insights.push(insight);
    }

    if insights.is_empty() {
        insights.push(
            "No notable statistical patterns detected in the current selection.".to_string(),
        );
    }
    insights
}

fn yearly_trend(metrics: &SalaryMetrics) -> Option<String> {
    if metrics.yoy_change_pct == 0.0 {
        return None;
    }
    if metrics.yoy_change_pct > 0.0 {
        Some(format!(
            "Salary growth: average salaries increased {:.1}% over the previous year.",
            metrics.yoy_change_pct
        ))
    } else {
        Some(format!(
            "Salary decline: average salaries decreased {:.1}% versus the previous year.",
            metrics.yoy_change_pct.abs()
        ))
    }
}

fn high_variability(metrics: &SalaryMetrics) -> Option<String> {
    let cv = if metrics.mean_usd > 0.0 {
        metrics.std_dev_usd / metrics.mean_usd * 100.0
    } else {
        0.0
    };
    (cv > HIGH_VARIABILITY_CV).then(|| {
        format!(
            "High variability: salaries are widely dispersed (CV {cv:.1}%), indicating large \
             differences across the selection."
        )
    })
}

/// Only the right-skew signature (mean above median) is reported; the inverse
/// case stays silent by design.
fn skewed_distribution(metrics: &SalaryMetrics) -> Option<String> {
    let gap = (metrics.mean_usd - metrics.median_usd).abs();
    (gap > metrics.mean_usd * SKEW_GAP_SHARE && metrics.mean_usd > metrics.median_usd).then(|| {
        "Skewed distribution: the mean is significantly above the median, indicating a small \
         number of very high salaries pulling the average up."
            .to_string()
    })
}

fn remote_gap(records: &[Record]) -> Option<String> {
    let mut remote_mean = 0.0;
    let mut on_site_mean = 0.0;
    for (category, mean) in metrics::group_mean(records, |record| record.remote.as_str()) {
        match category.as_str() {
            REMOTE_REMOTE => remote_mean = mean,
            REMOTE_ON_SITE => on_site_mean = mean,
            _ => {}
        }
    }
    if remote_mean <= 0.0 || on_site_mean <= 0.0 {
        return None;
    }
    let difference = metrics::percent_difference(remote_mean, on_site_mean);
    if difference.abs() <= REMOTE_GAP_PCT {
        return None;
    }
    if difference > 0.0 {
        Some(format!(
            "Remote premium: remote workers earn on average {difference:.1}% more than on-site \
             workers."
        ))
    } else {
        Some(format!(
            "On-site premium: on-site workers earn on average {:.1}% more than remote workers.",
            difference.abs()
        ))
    }
}

fn seniority_gap(records: &[Record]) -> Option<String> {
    let grouped = metrics::group_mean(records, |record| record.seniority.as_str());
    if grouped.len() < 2 {
        return None;
    }
    // First-seen order makes the winner deterministic on exact ties.
    let (highest, highest_mean) = grouped
        .iter()
        .fold(None::<(&str, f64)>, |best, (label, mean)| match best {
            Some((_, best_mean)) if *mean <= best_mean => best,
            _ => Some((label.as_str(), *mean)),
        })?;
    let (lowest, lowest_mean) = grouped
        .iter()
        .fold(None::<(&str, f64)>, |worst, (label, mean)| match worst {
            Some((_, worst_mean)) if *mean >= worst_mean => worst,
            _ => Some((label.as_str(), *mean)),
        })?;
    let difference = metrics::percent_difference(highest_mean, lowest_mean);
    Some(format!(
        "Seniority gap: {highest} professionals earn on average {difference:.1}% more than \
         {lowest} professionals."
    ))
}
