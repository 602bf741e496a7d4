use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::value::RawValue;
use crate::error::ChartResult;

/// Read-only view of one host record.
///
/// `value` may fail for malformed records; the engine then skips the whole
/// record instead of aborting the refresh.
pub trait Record {
    /// Reads one field. Missing fields should read as [`RawValue::Null`].
    fn value(&self, field: &str) -> ChartResult<RawValue>;

    /// Stable identifier of the record (its file path).
    fn file_path(&self) -> &str;
}

/// Records accepted by a refresh.
///
/// With `parallel-projection` records are read from worker threads and must
/// be `Sync`; otherwise any [`Record`] qualifies.
#[cfg(feature = "parallel-projection")]
pub trait ProjectableRecord: Record + Sync {}

#[cfg(feature = "parallel-projection")]
impl<R: Record + Sync + ?Sized> ProjectableRecord for R {}

/// Records accepted by a refresh.
#[cfg(not(feature = "parallel-projection"))]
pub trait ProjectableRecord: Record {}

#[cfg(not(feature = "parallel-projection"))]
impl<R: Record + ?Sized> ProjectableRecord for R {}

/// Field-map backed record, mostly useful for hosts that already
/// materialized their query results and for tests.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapRecord {
    pub path: String,
    #[serde(default)]
    pub fields: IndexMap<String, RawValue>,
}

impl MapRecord {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl Record for MapRecord {
    fn value(&self, field: &str) -> ChartResult<RawValue> {
        Ok(self.fields.get(field).cloned().unwrap_or_default())
    }

    fn file_path(&self) -> &str {
        &self.path
    }
}

/// One bucket of records as grouped by the host query.
///
/// `key == None` marks the implicit ungrouped bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup<R> {
    pub key: Option<String>,
    pub entries: Vec<R>,
}

impl<R> RecordGroup<R> {
    #[must_use]
    pub fn keyed(key: impl Into<String>, entries: Vec<R>) -> Self {
        Self {
            key: Some(key.into()),
            entries,
        }
    }

    #[must_use]
    pub fn ungrouped(entries: Vec<R>) -> Self {
        Self { key: None, entries }
    }
}

/// Returns `false` only for the single key-less bucket hosts send when no
/// grouping is configured.
#[must_use]
pub fn is_grouped<R>(groups: &[RecordGroup<R>]) -> bool {
    !(groups.len() == 1 && groups[0].key.is_none())
}
