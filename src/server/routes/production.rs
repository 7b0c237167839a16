//! Production record endpoints.
//!
//! ```text
//! POST /api/production            create (normalize + store)
//! GET  /api/production            list, optional ?date=&shift=
//! GET  /api/production/export     XLSX for ?date=&shift= (both required)
//! ```

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::core::add::AddLogic;
use crate::core::filter::{RecordFilter, parse_report_key};
use crate::db::queries::query_records;
use crate::errors::AppResult;
use crate::export::model::ShiftReport;
use crate::export::{XLSX_CONTENT_TYPE, render_xlsx};
use crate::models::{ProductionInput, Shift, StoredRecord};
use crate::server::state::AppState;
use crate::utils::date::now_local;

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub status: &'static str,
    pub id: i64,
    pub date: String,
    pub shift: Shift,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default, alias = "date_str")]
    pub date: Option<String>,
    #[serde(default)]
    pub shift: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(alias = "date_str")]
    pub date: String,
    pub shift: String,
}

/// POST /api/production
async fn create_production(
    State(state): State<AppState>,
    Json(input): Json<ProductionInput>,
) -> AppResult<Json<CreateResponse>> {
    let now = now_local();
    let (id, record) = state
        .with_store(move |pool| AddLogic::apply(pool, input, now))
        .await?;

    Ok(Json(CreateResponse {
        status: "ok",
        id,
        date: record.date_str(),
        shift: record.shift,
        message: "Production record saved",
    }))
}

/// GET /api/production
async fn list_production(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<StoredRecord>>> {
    let filter = RecordFilter::from_params(params.date.as_deref(), params.shift.as_deref())?;

    let records = state
        .with_store(move |pool| query_records(&pool.conn, &filter))
        .await?;

    Ok(Json(records))
}

/// GET /api/production/export
async fn export_production(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let (date, shift) = parse_report_key(&params.date, &params.shift)?;

    let records = state
        .with_store(move |pool| query_records(&pool.conn, &RecordFilter::exact(date, shift)))
        .await?;

    let report = ShiftReport::build(date, shift, &records);
    let bytes = render_xlsx(&report)?;

    tracing::info!(
        date = %date,
        shift = %shift,
        rows = report.rows.len(),
        "shift report exported"
    );

    let headers = [
        (CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.file_name("xlsx")),
        ),
    ];

    Ok((headers, bytes))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/production", get(list_production).post(create_production))
        .route("/production/export", get(export_production))
}
