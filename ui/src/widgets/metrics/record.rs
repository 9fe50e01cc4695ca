//! The baseline metrics record and its display form.
//!
//! The JSON is produced by the training script and every field is optional.
//! Numbers are read leniently: numeric strings count, anything else falls back
//! to the field's default so a slot is never left empty.

use serde::Deserialize;
use serde_json::Value;

use crate::core::format::{
    format_count, format_percent, format_threshold, format_timestamp, PLACEHOLDER,
};

use super::grade::{grade_precision, grade_recall, Grade};

pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMetrics")]
pub struct MetricsRecord {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub threshold: f64,
    pub n_samples: u64,
    pub timestamp: Option<String>,
}

impl Default for MetricsRecord {
    fn default() -> Self {
        RawMetrics::default().into()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetrics {
    precision: Option<Value>,
    recall: Option<Value>,
    f1: Option<Value>,
    threshold: Option<Value>,
    n_samples: Option<Value>,
    timestamp: Option<Value>,
}

impl From<RawMetrics> for MetricsRecord {
    fn from(raw: RawMetrics) -> Self {
        let number = |value: &Option<Value>| value.as_ref().and_then(coerce_number);
        let n_samples = number(&raw.n_samples)
            .map(|count| count.max(0.0).round() as u64)
            .unwrap_or(0);
        let timestamp = raw.timestamp.and_then(|value| match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        });

        Self {
            precision: number(&raw.precision).unwrap_or(0.0),
            recall: number(&raw.recall).unwrap_or(0.0),
            f1: number(&raw.f1).unwrap_or(0.0),
            threshold: number(&raw.threshold).unwrap_or(DEFAULT_THRESHOLD),
            n_samples,
            timestamp,
        }
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Display strings for every slot of the metrics panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsDisplay {
    pub precision: String,
    pub precision_grade: Grade,
    pub recall: String,
    pub recall_grade: Grade,
    pub f1: String,
    pub threshold: String,
    pub n_samples: String,
    pub timestamp: String,
}

impl MetricsDisplay {
    pub fn from_record(record: &MetricsRecord) -> Self {
        Self {
            precision: format_percent(record.precision),
            precision_grade: grade_precision(record.precision),
            recall: format_percent(record.recall),
            recall_grade: grade_recall(record.recall),
            f1: format_percent(record.f1),
            threshold: format_threshold(record.threshold),
            n_samples: format_count(record.n_samples),
            timestamp: format_timestamp(record.timestamp.as_deref()),
        }
    }

    /// Every slot shows the placeholder; grades are meaningless until loaded.
    pub fn pending() -> Self {
        Self {
            precision: PLACEHOLDER.to_string(),
            precision_grade: Grade::Bad,
            recall: PLACEHOLDER.to_string(),
            recall_grade: Grade::Bad,
            f1: PLACEHOLDER.to_string(),
            threshold: PLACEHOLDER.to_string(),
            n_samples: PLACEHOLDER.to_string(),
            timestamp: PLACEHOLDER.to_string(),
        }
    }
}
