#![deny(missing_docs)]

//! # Record Filters
//!
//! Pure transformations applied to a JSON record before it is persisted:
//! null values are dropped, write-protected fields are stripped and updates
//! are stamped with an `edited` timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Fields never accepted in an update.
pub const UPDATE_PROTECTED: &[&str] = &["id", "created"];

/// Field stamped on every update.
pub const EDITED_FIELD: &str = "edited";

/// Strips null and write-excluded fields from records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    create_exclude: Vec<String>,
}

impl RecordFilter {
    /// Creates a filter removing `create_exclude` from created records.
    pub fn new<S: Into<String>>(create_exclude: impl IntoIterator<Item = S>) -> Self {
        Self {
            create_exclude: create_exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields removed by [`RecordFilter::filter_create`].
    pub fn create_exclude(&self) -> &[String] {
        &self.create_exclude
    }

    /// Drops null values, then the create denylist.
    pub fn filter_create(&self, record: &Map<String, Value>) -> Map<String, Value> {
        let mut out = without_nulls(record);
        out.retain(|key, _| !self.create_exclude.contains(key));
        out
    }

    /// Drops null values, stamps `edited` with the current time, then removes
    /// `id`, `created` and `extra`.
    pub fn filter_update(&self, record: &Map<String, Value>, extra: &[&str]) -> Map<String, Value> {
        self.filter_update_at(record, Utc::now(), extra)
    }

    /// [`RecordFilter::filter_update`] with an explicit timestamp.
    pub fn filter_update_at(
        &self,
        record: &Map<String, Value>,
        now: DateTime<Utc>,
        extra: &[&str],
    ) -> Map<String, Value> {
        let mut out = without_nulls(record);
        out.insert(
            EDITED_FIELD.to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        out.retain(|key, _| {
            !UPDATE_PROTECTED.contains(&key.as_str()) && !extra.contains(&key.as_str())
        });
        out
    }

    /// Applies [`RecordFilter::filter_create`] to each record.
    pub fn filter_array(&self, records: &[Map<String, Value>]) -> Vec<Map<String, Value>> {
        records.iter().map(|r| self.filter_create(r)).collect()
    }
}

fn without_nulls(record: &Map<String, Value>) -> Map<String, Value> {
    record
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
