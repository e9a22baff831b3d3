use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::info;

use crate::data::Record;
use crate::schema::{self, RawColumns};

/// Outcome of ingesting one source: the canonical dataset plus the row
/// accounting the normalization policy requires callers to see.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub dataset: Vec<Record>,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Loads and normalizes a salary CSV from disk.
pub fn load_dataset(path: &Path) -> Result<LoadOutcome> {
    let file = File::open(path).with_context(|| format!("Opening {path:?}"))?;
    read_dataset(file).with_context(|| format!("Reading salary data from {path:?}"))
}

/// Streams raw rows from `input` through translation and normalization.
///
/// The header is validated against the expected raw schema before any row
/// work; a missing column aborts the load. Incomplete rows are dropped
/// silently per row but counted in the outcome.
pub fn read_dataset<R: Read>(input: R) -> Result<LoadOutcome> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers = reader.headers().context("Reading CSV header")?.clone();
    let columns = RawColumns::resolve(&headers).context("Validating input header")?;

    let mut dataset = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        rows_read += 1;
        let translated = schema::translate_record(&columns, &record);
        match schema::normalize_row(translated) {
            Some(normalized) => dataset.push(normalized),
            None => rows_dropped += 1,
        }
    }

    info!(
        "Loaded {} record(s); dropped {} incomplete row(s)",
        dataset.len(),
        rows_dropped
    );
    Ok(LoadOutcome {
        dataset,
        rows_read,
        rows_dropped,
    })
}

/// Session-scoped cache of canonical datasets keyed by source path.
///
/// Sources are treated as immutable for the lifetime of the session, so
/// there is no invalidation: the first load wins.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, LoadOutcome>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for `path`, loading it on first use.
    pub fn get_or_load(&mut self, path: &Path) -> Result<&LoadOutcome> {
        if !self.entries.contains_key(path) {
            let outcome = load_dataset(path)?;
            self.entries.insert(path.to_path_buf(), outcome);
        }
        Ok(&self.entries[path])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
