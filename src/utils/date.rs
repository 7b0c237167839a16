use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Current local wall-clock time without timezone.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current local time as RFC 3339, used for store metadata.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

/// Exact `YYYY-MM-DD`; surrounding whitespace is not accepted.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Strict `YYYY-MM-DD` parsing for caller-supplied dates.
pub fn parse_date_param(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDateFormat(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_date_param(s)).transpose()
}
