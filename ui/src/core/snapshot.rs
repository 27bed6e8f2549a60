//! Snapshot data model as published in `probabilities.json`.
//!
//! Decoding is lenient: any field may be missing or carry an unexpected type. Scalar
//! fields stay raw [`Value`]s so formatting can decide how to present them, and
//! sequences keep one entry per source element (malformed elements decode to their
//! defaults) so display order and length always match the document.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::SnapshotError;
use super::format::coerce_number;

/// Root document. Replaced wholesale on every refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "lenient")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "lenient")]
    pub derived: Derived,
    #[serde(deserialize_with = "lenient_seq")]
    pub buckets: Vec<Bucket>,
    #[serde(deserialize_with = "lenient_seq")]
    pub daily_tracker: Vec<DayRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "lenient")]
    pub last_updated_iso: Option<String>,
}

/// Summary statistics shown as KPIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Derived {
    pub median_days: Value,
    pub mean_days: Value,
    pub chance_end_within_week_percent: Value,
}

/// One labeled probability-mass category; one bar in the chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Bucket {
    pub range: Value,
    pub prob: Value,
}

impl Bucket {
    pub fn new(range: impl Into<String>, prob: f64) -> Self {
        Self {
            range: Value::String(range.into()),
            prob: serde_json::json!(prob),
        }
    }

    /// Probability used for chart scaling: non-numeric or outside `[0, 100]` counts as 0.
    pub fn layout_prob(&self) -> f64 {
        coerce_number(&self.prob)
            .filter(|p| (0.0..=100.0).contains(p))
            .unwrap_or(0.0)
    }

    /// Probability used for the table fill bar: clamped into `[0, 100]`.
    pub fn fill_percent(&self) -> f64 {
        coerce_number(&self.prob).unwrap_or(0.0).clamp(0.0, 100.0)
    }
}

/// One row of the daily tracker. A null `end_today_prob` means "not yet determined".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DayRecord {
    pub day: Value,
    pub date: Value,
    pub end_today_prob: Value,
    pub shutdown_continues_prob: Value,
    pub watch: Value,
}

impl Snapshot {
    /// Decode a response body. The body must be a JSON object; its fields are optional.
    pub fn from_json(body: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        if !value.is_object() {
            return Err(SnapshotError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}
