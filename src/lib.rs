pub mod cli;
pub mod data;
pub mod filter;
pub mod insights;
pub mod loader;
pub mod metrics;
pub mod schema;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info, warn};

use crate::cli::{Cli, Commands, Dimension, FilterArgs};
use crate::data::Record;
use crate::filter::{FilterCriteria, InclusionSet, OptionalInclusionSet};
use crate::metrics::format_currency;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("salary_insights", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Metrics(args) => handle_metrics(&args),
        Commands::Insights(args) => handle_insights(&args),
        Commands::Distinct(args) => handle_distinct(&args),
        Commands::Preview(args) => handle_preview(&args),
    }
}

fn handle_metrics(args: &cli::MetricsArgs) -> Result<()> {
    let outcome = loader::load_dataset(&args.input)?;
    let filtered = filter_records(&outcome.dataset, &args.filters);
    let computed = metrics::compute(&filtered, &outcome.dataset);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&computed)?);
    } else {
        let headers = vec!["metric".to_string(), "value".to_string()];
        let rows = metrics_rows(&computed);
        table::print_table(&headers, &rows);
    }
    info!(
        "Computed metrics over {} of {} record(s)",
        filtered.len(),
        outcome.dataset.len()
    );
    Ok(())
}

fn handle_insights(args: &cli::InsightsArgs) -> Result<()> {
    let outcome = loader::load_dataset(&args.input)?;
    let filtered = filter_records(&outcome.dataset, &args.filters);
    let computed = metrics::compute(&filtered, &outcome.dataset);
    for insight in insights::generate(&filtered, &computed) {
        println!("- {insight}");
    }
    info!(
        "Generated insights over {} of {} record(s)",
        filtered.len(),
        outcome.dataset.len()
    );
    Ok(())
}

fn handle_distinct(args: &cli::DistinctArgs) -> Result<()> {
    let outcome = loader::load_dataset(&args.input)?;
    let dataset = &outcome.dataset;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut push_dimension = |name: &str, values: Vec<String>| {
        for value in values {
            rows.push(vec![name.to_string(), value]);
        }
    };
    let wanted = |dimension: Dimension| args.dimension.is_none() || args.dimension == Some(dimension);
    if wanted(Dimension::Year) {
        push_dimension(
            "year",
            filter::distinct_years(dataset).iter().map(|y| y.to_string()).collect(),
        );
    }
    if wanted(Dimension::Seniority) {
        push_dimension("seniority", filter::distinct_seniorities(dataset));
    }
    if wanted(Dimension::Contract) {
        push_dimension("contract", filter::distinct_contracts(dataset));
    }
    if wanted(Dimension::CompanySize) {
        push_dimension("company_size", filter::distinct_company_sizes(dataset));
    }
    if wanted(Dimension::Title) {
        push_dimension("title", filter::distinct_titles(dataset));
    }
    let headers = vec!["dimension".to_string(), "value".to_string()];
    table::print_table(&headers, &rows);
    Ok(())
}

fn handle_preview(args: &cli::PreviewArgs) -> Result<()> {
    let outcome = loader::load_dataset(&args.input)?;
    let filtered = filter_records(&outcome.dataset, &args.filters);
    let rows: Vec<Vec<String>> = filtered.iter().take(args.rows).map(Record::to_row).collect();
    table::print_table(&Record::headers(), &rows);
    info!("Displayed {} of {} filtered record(s)", rows.len(), filtered.len());
    Ok(())
}

/// Builds criteria from CLI flags and applies them. Omitted mandatory
/// dimensions widen to every value in the canonical dataset so the command
/// line stays usable; the core's closed-set semantics are untouched.
fn filter_records(dataset: &[Record], args: &FilterArgs) -> Vec<Record> {
    let criteria = criteria_from_args(dataset, args);
    let filtered = filter::apply(dataset, &criteria);
    if filtered.is_empty() {
        warn!("No records match the selected filters");
    }
    filtered
}

fn criteria_from_args(dataset: &[Record], args: &FilterArgs) -> FilterCriteria {
    let defaults = FilterCriteria::all_of(dataset);
    FilterCriteria {
        years: if args.years.is_empty() {
            defaults.years
        } else {
            InclusionSet::new(args.years.iter().copied())
        },
        seniorities: if args.seniorities.is_empty() {
            defaults.seniorities
        } else {
            InclusionSet::new(args.seniorities.iter().cloned())
        },
        contracts: if args.contracts.is_empty() {
            defaults.contracts
        } else {
            InclusionSet::new(args.contracts.iter().cloned())
        },
        company_sizes: if args.company_sizes.is_empty() {
            defaults.company_sizes
        } else {
            InclusionSet::new(args.company_sizes.iter().cloned())
        },
        titles: OptionalInclusionSet::new(args.titles.iter().cloned()),
    }
}

fn metrics_rows(computed: &metrics::SalaryMetrics) -> Vec<Vec<String>> {
    let currency_row =
        |name: &str, value: f64| vec![name.to_string(), format_currency(value)];
    vec![
        currency_row("mean", computed.mean_usd),
        currency_row("median", computed.median_usd),
        currency_row("min", computed.min_usd),
        currency_row("max", computed.max_usd),
        currency_row("std_dev", computed.std_dev_usd),
        currency_row("p25", computed.p25_usd),
        currency_row("p75", computed.p75_usd),
        vec!["records".to_string(), computed.records.to_string()],
        vec!["top_title".to_string(), computed.top_title.clone()],
        vec![
            "yoy_change".to_string(),
            format!("{:+.1}%", computed.yoy_change_pct),
        ],
        vec![
            "distinct_titles".to_string(),
            computed.distinct_titles.to_string(),
        ],
    ]
}
