//! Exact-match filter over stored production records.

use crate::errors::{AppError, AppResult};
use crate::models::Shift;
use crate::utils::date::parse_date_param;
use chrono::NaiveDate;

/// `None` on a field means "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub date: Option<NaiveDate>,
    pub shift: Option<Shift>,
}

impl RecordFilter {
    /// Build a filter from raw query parameters. Empty strings count as absent.
    pub fn from_params(date: Option<&str>, shift: Option<&str>) -> AppResult<Self> {
        let date = match date.filter(|s| !s.is_empty()) {
            Some(d) => Some(parse_date_param(d)?),
            None => None,
        };
        let shift = match shift.filter(|s| !s.is_empty()) {
            Some(s) => Some(parse_shift(s)?),
            None => None,
        };
        Ok(Self { date, shift })
    }

    /// Filter selecting a single date+shift pair.
    pub fn exact(date: NaiveDate, shift: Shift) -> Self {
        Self {
            date: Some(date),
            shift: Some(shift),
        }
    }

    #[cfg(test)]
    pub fn matches(&self, record: &crate::models::ProductionRecord) -> bool {
        self.date.is_none_or(|d| d == record.date) && self.shift.is_none_or(|s| s == record.shift)
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.shift.is_none()
    }
}

/// Parse the required date+shift pair of a report. The shift is checked first.
pub fn parse_report_key(date: &str, shift: &str) -> AppResult<(NaiveDate, Shift)> {
    let shift = parse_shift(shift)?;
    let date = parse_date_param(date)?;
    Ok((date, shift))
}

pub fn parse_shift(code: &str) -> AppResult<Shift> {
    Shift::from_code(code).ok_or_else(|| AppError::InvalidShift(code.to_string()))
}
