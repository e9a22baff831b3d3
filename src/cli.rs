use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about = "Analyze technology-sector salary datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute descriptive salary statistics over the filtered dataset
    Metrics(MetricsArgs),
    /// Generate heuristic textual insights over the filtered dataset
    Insights(InsightsArgs),
    /// List the distinct values available per filterable dimension
    Distinct(DistinctArgs),
    /// Preview the first rows of the filtered dataset in a formatted table
    Preview(PreviewArgs),
}

/// Inclusion sets per filterable dimension. An omitted mandatory dimension
/// defaults to every value present in the dataset; omitted titles mean no
/// title restriction.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Years to include (comma separated)
    #[arg(long = "years", value_delimiter = ',')]
    pub years: Vec<i64>,
    /// Seniority levels to include (comma separated)
    #[arg(long = "seniority", value_delimiter = ',')]
    pub seniorities: Vec<String>,
    /// Contract types to include (comma separated)
    #[arg(long = "contracts", value_delimiter = ',')]
    pub contracts: Vec<String>,
    /// Company sizes to include (comma separated)
    #[arg(long = "company-sizes", value_delimiter = ',')]
    pub company_sizes: Vec<String>,
    /// Job titles to include (comma separated; omit for all titles)
    #[arg(long = "titles", value_delimiter = ',')]
    pub titles: Vec<String>,
}

#[derive(Debug, Args)]
pub struct MetricsArgs {
    /// Input salary CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub filters: FilterArgs,
    /// Emit the metrics record as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InsightsArgs {
    /// Input salary CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dimension {
    Year,
    Seniority,
    Contract,
    CompanySize,
    Title,
}

#[derive(Debug, Args)]
pub struct DistinctArgs {
    /// Input salary CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Restrict the listing to one dimension
    #[arg(long, value_enum)]
    pub dimension: Option<Dimension>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input salary CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub filters: FilterArgs,
    /// Number of rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
}
