// src/web/report_handlers.rs
use crate::{
    error::AppResult,
    models::{report::REPORTS, JsonObject},
    state::AppState,
    web::record_handlers::{create_record, list_records},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

// GET /reports
pub async fn list_reports(State(state): State<AppState>) -> AppResult<Json<Vec<JsonObject>>> {
    list_records(&state, &REPORTS).await
}

// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    create_record(&state, &REPORTS, &payload).await
}
