use super::shift::Shift;
use crate::utils::time::{deserialize_optional_time, serialize_optional_time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A production entry as submitted by the caller (HTTP body or CLI flags).
///
/// `count`/`defects` stay signed here; negative values are rejected during
/// normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionInput {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub shift: Option<String>,
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    pub count: i64,
    #[serde(default)]
    pub defects: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Canonical production record, ready for persistence.
///
/// Serializes with the time rendered as `HH:MM`, the listing format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionRecord {
    pub date: NaiveDate, // ⇔ production_records.date (TEXT "YYYY-MM-DD")
    #[serde(serialize_with = "serialize_optional_time")]
    pub time: Option<NaiveTime>, // ⇔ production_records.time (TEXT "HH:MM:SS")
    pub shift: Shift, // ⇔ production_records.shift ('A' | 'B')
    pub line: Option<String>,
    pub product: Option<String>,
    pub operator: Option<String>,
    pub count: u32,
    pub defects: u32,
    pub notes: Option<String>,
}

impl ProductionRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time as shown in listings and reports (`HH:MM`), empty when absent.
    pub fn time_str(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// Back-convert into an input carrying every field explicitly.
    #[cfg(test)]
    pub fn to_input(&self) -> ProductionInput {
        ProductionInput {
            date: Some(self.date),
            time: self.time,
            shift: Some(self.shift.code().to_string()),
            line: self.line.clone(),
            product: self.product.clone(),
            operator: self.operator.clone(),
            count: i64::from(self.count),
            defects: Some(i64::from(self.defects)),
            notes: self.notes.clone(),
        }
    }
}

/// A record as read back from the store, with its id and metadata.
#[derive(Debug, Clone, Serialize)]
pub struct StoredRecord {
    pub id: i64,
    #[serde(flatten)]
    pub record: ProductionRecord,
    pub created_at: String, // RFC 3339, local time
    pub updated_at: String,
}
