//! The bounded, persisted conversion history

use crate::core::convert::Conversion;
use crate::core::currency::Currency;
use crate::store::{self, StateStore};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Store key holding the serialized record sequence.
pub const HISTORY_KEY: &str = "conversion_history";

/// Maximum number of records retained; the oldest entry is evicted past this.
pub const HISTORY_LIMIT: usize = 10;

/// One completed conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub id: i64,
    pub amount: f64,
    pub from: Currency,
    /// Converted amount, rounded to 2 decimal places.
    pub result: f64,
    pub to: Currency,
    /// Local creation time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

impl ConversionRecord {
    pub fn of(conversion: &Conversion) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            amount: conversion.amount,
            from: conversion.from,
            result: conversion.result,
            to: conversion.to,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// "100 USD → 85.00 EUR"
    pub fn conversion_line(&self) -> String {
        format!("{} {} → {:.2} {}", self.amount, self.from, self.result, self.to)
    }

    /// Time portion of the creation timestamp.
    pub fn time_label(&self) -> &str {
        self.timestamp
            .split_once(' ')
            .map_or(self.timestamp.as_str(), |(_, time)| time)
    }
}

/// Most-recent-first log of conversions, mirrored to the state store after
/// every mutation.
pub struct HistoryLog {
    records: Vec<ConversionRecord>,
    store: Arc<dyn StateStore>,
}

impl HistoryLog {
    /// Reads the persisted log, or starts empty when the key is absent or
    /// undecodable.
    pub fn load(store: Arc<dyn StateStore>) -> Self {
        let records: Vec<ConversionRecord> =
            store::get_json(store.as_ref(), HISTORY_KEY).unwrap_or_default();
        debug!("Loaded {} history record(s)", records.len());
        Self { records, store }
    }

    /// Prepends a record, evicts past the cap, and persists.
    pub fn append(&mut self, record: ConversionRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_LIMIT);
        self.persist();
    }

    /// Empties the log and removes the persisted key.
    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            warn!(error = %e, "Failed to remove persisted history");
        }
    }

    /// Display-ready entries, most-recent-first: (conversion line, time label).
    pub fn render(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.records
            .iter()
            .map(|r| (r.conversion_line(), r.time_label().to_string()))
    }

    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = store::put_json(self.store.as_ref(), HISTORY_KEY, &self.records) {
            warn!(error = %e, "Failed to persist conversion history");
        }
    }
}
