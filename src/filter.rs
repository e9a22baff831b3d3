use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;

use crate::data::Record;
use crate::schema;

/// Closed inclusion-set predicate: a value passes only when it is a member of
/// the set, so an empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionSet<T: Eq + Hash>(HashSet<T>);

impl<T: Eq + Hash> InclusionSet<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Open inclusion-set predicate: an empty set imposes no restriction at all.
///
/// Only the job-title dimension uses this; the asymmetry with
/// [`InclusionSet`] is deliberate and must not be "fixed" into a single
/// generic behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalInclusionSet<T: Eq + Hash>(HashSet<T>);

impl<T: Eq + Hash> OptionalInclusionSet<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn allows(&self, value: &T) -> bool {
        self.0.is_empty() || self.0.contains(value)
    }
}

/// Caller-selected inclusion sets, one per filterable dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub years: InclusionSet<i64>,
    pub seniorities: InclusionSet<String>,
    pub contracts: InclusionSet<String>,
    pub company_sizes: InclusionSet<String>,
    pub titles: OptionalInclusionSet<String>,
}

impl FilterCriteria {
    /// Criteria that admit every record of `dataset`: all distinct values per
    /// mandatory dimension and no title restriction.
    pub fn all_of(dataset: &[Record]) -> Self {
        Self {
            years: InclusionSet::new(distinct_years(dataset)),
            seniorities: InclusionSet::new(distinct_seniorities(dataset)),
            contracts: InclusionSet::new(distinct_contracts(dataset)),
            company_sizes: InclusionSet::new(distinct_company_sizes(dataset)),
            titles: OptionalInclusionSet::default(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(&record.year)
            && self.seniorities.contains(&record.seniority)
            && self.contracts.contains(&record.contract)
            && self.company_sizes.contains(&record.company_size)
            && self.titles.allows(&record.title)
    }
}

/// Returns the records admitted by `criteria`, preserving input order. The
/// canonical dataset is never mutated.
pub fn apply(dataset: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    dataset
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

pub fn distinct_years(dataset: &[Record]) -> Vec<i64> {
    dataset.iter().map(|record| record.year).unique().sorted().collect()
}

/// Distinct seniority labels in canonical rank order (junior first); labels
/// outside the known set sort after them alphabetically.
pub fn distinct_seniorities(dataset: &[Record]) -> Vec<String> {
    dataset
        .iter()
        .map(|record| record.seniority.clone())
        .unique()
        .sorted_by_key(|label| (schema::seniority_rank(label), label.clone()))
        .collect()
}

pub fn distinct_contracts(dataset: &[Record]) -> Vec<String> {
    distinct_strings(dataset, |record| &record.contract)
}

pub fn distinct_company_sizes(dataset: &[Record]) -> Vec<String> {
    distinct_strings(dataset, |record| &record.company_size)
}

pub fn distinct_titles(dataset: &[Record]) -> Vec<String> {
    distinct_strings(dataset, |record| &record.title)
}

fn distinct_strings(dataset: &[Record], field: impl Fn(&Record) -> &String) -> Vec<String> {
    dataset.iter().map(|record| field(record).clone()).unique().sorted().collect()
}
