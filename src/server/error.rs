use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::errors::AppError;

/// Machine-readable code for caller input errors.
fn input_code(err: &AppError) -> &'static str {
    match err {
        AppError::InvalidTimeWindow(_) => "INVALID_TIME_WINDOW",
        AppError::InvalidShift(_) => "INVALID_SHIFT",
        AppError::InvalidDateFormat(_) => "INVALID_DATE_FORMAT",
        AppError::InvalidTime(_) => "INVALID_TIME",
        AppError::InvalidCount(_) => "INVALID_COUNT",
        AppError::InvalidDefects(_) => "INVALID_DEFECTS",
        AppError::ValueTooLarge { .. } => "VALUE_TOO_LARGE",
        _ => "BAD_REQUEST",
    }
}

/// Map application errors to consistent JSON error responses:
/// `{ "error": <message>, "code": <CODE> }`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = if self.is_input_error() {
            tracing::debug!(error = %self, "Rejected request input");
            (StatusCode::BAD_REQUEST, input_code(&self), self.to_string())
        } else if matches!(self, AppError::ExportEngineUnavailable) {
            tracing::error!("XLSX export requested but the spreadsheet engine is not compiled in");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXPORT_ENGINE_UNAVAILABLE",
                self.to_string(),
            )
        } else {
            // Store and filesystem details stay in the logs.
            tracing::error!(error = %self, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
