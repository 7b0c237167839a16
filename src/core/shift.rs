//! Shift classification from a time of day.

use crate::errors::{AppError, AppResult};
use crate::models::Shift;
use chrono::NaiveTime;

const fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, m, s) {
        Some(t) => t,
        None => panic!("invalid shift boundary"),
    }
}

/// Start of shift A (inclusive).
pub const FIRST_SHIFT_START: NaiveTime = hms(7, 0, 0);
/// End of shift A (exclusive) and start of shift B (inclusive).
pub const SECOND_SHIFT_START: NaiveTime = hms(15, 30, 0);
/// End of shift B (inclusive).
pub const SECOND_SHIFT_END: NaiveTime = hms(23, 59, 59);

/// Window lookup without error: `None` before 07:00.
pub fn shift_for(t: NaiveTime) -> Option<Shift> {
    if t >= FIRST_SHIFT_START && t < SECOND_SHIFT_START {
        return Some(Shift::A);
    }
    if t >= SECOND_SHIFT_START && t <= SECOND_SHIFT_END {
        return Some(Shift::B);
    }
    None
}

/// Classify a time of day into its shift.
pub fn classify(t: NaiveTime) -> AppResult<Shift> {
    shift_for(t).ok_or_else(|| AppError::InvalidTimeWindow(t.format("%H:%M:%S").to_string()))
}
