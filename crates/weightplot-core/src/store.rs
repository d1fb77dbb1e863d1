// File: crates/weightplot-core/src/store.rs
// Summary: Ordered weight-log store: dated entries keyed and traversed in
// ascending date order, plus the seed average and the ingestion error flag.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An entry for this date is already present; the store keeps the
    /// first one.
    #[error("duplicate entry for date {0}")]
    DuplicateDate(String),
}

/// One dated weight measurement. Immutable after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    date: String,
    weight: f64,
}

impl Entry {
    pub fn new(date: impl Into<String>, weight: f64) -> Self {
        Self { date: date.into(), weight }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Sorted store of weight entries, at most one per distinct date.
///
/// Traversal order is ascending lexical order of the date key. Ingestion
/// normalizes ISO dates to zero-padded form (see [`normalize_date`]), so
/// for well-formed input lexical order is calendar order.
#[derive(Clone, Debug, Default)]
pub struct WeightLog {
    entries: BTreeMap<String, Entry>,
    seed_average: f64,
    error: bool,
}

impl WeightLog {
    /// Create an empty log with the given seed average and a clear error flag.
    pub fn new(seed_average: f64) -> Self {
        Self { entries: BTreeMap::new(), seed_average, error: false }
    }

    /// Insert an entry, rejecting duplicates. A failed insert leaves the
    /// store unchanged.
    pub fn insert(&mut self, entry: Entry) -> Result<(), StoreError> {
        if self.entries.contains_key(entry.date()) {
            return Err(StoreError::DuplicateDate(entry.date.clone()));
        }
        self.entries.insert(entry.date.clone(), entry);
        Ok(())
    }

    /// Visit entries in ascending date order. Each call starts a fresh
    /// traversal.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn seed_average(&self) -> f64 {
        self.seed_average
    }

    /// Set the seed average. Ingestion calls this when the input document
    /// carries one; it must happen before traversal begins.
    pub fn set_seed_average(&mut self, average: f64) {
        self.seed_average = average;
    }

    /// Record that ingestion saw a malformed or unrecognized record.
    /// Later valid records still insert; the driver fails the run at end.
    pub fn set_error(&mut self) {
        self.error = true;
    }

    pub fn has_error(&self) -> bool {
        self.error
    }
}

/// Normalize a date string to zero-padded ISO form when it parses as a
/// calendar date; other strings pass through verbatim and order lexically.
pub fn normalize_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
