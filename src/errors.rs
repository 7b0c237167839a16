//! Unified application error type.
//! All modules (db, core, cli, export, server) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation (caller errors)
    // ---------------------------
    #[error("Time {0} is outside defined shifts (A: 07:00-15:30, B: 15:30-24:00)")]
    InvalidTimeWindow(String),

    #[error("Invalid shift '{0}': shift must be 'A' or 'B'")]
    InvalidShift(String),

    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid time format '{0}', expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("Invalid count {0}: good count must be a non-negative integer")]
    InvalidCount(i64),

    #[error("Invalid defects {0}: defects must be a non-negative integer")]
    InvalidDefects(i64),

    #[error("Value {value} for '{field}' is too large (maximum {max})", max = u32::MAX)]
    ValueTooLarge { field: &'static str, value: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Excel engine not available. Contact administrator.")]
    ExportEngineUnavailable,

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by the caller's input, as opposed to
    /// store, filesystem or configuration faults.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTimeWindow(_)
                | AppError::InvalidShift(_)
                | AppError::InvalidDateFormat(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidCount(_)
                | AppError::InvalidDefects(_)
                | AppError::ValueTooLarge { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
