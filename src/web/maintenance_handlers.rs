// src/web/maintenance_handlers.rs
use crate::{
    error::AppResult,
    models::{
        intervention::INTERVENTIONS,
        maintenance::{MAINTENANCE_SCHEDULES, MAINTENANCE_TASKS},
        JsonObject,
    },
    state::AppState,
    web::record_handlers::{create_record, list_records},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

// GET /maintenance-tasks
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<JsonObject>>> {
    list_records(&state, &MAINTENANCE_TASKS).await
}

// POST /maintenance-tasks
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    create_record(&state, &MAINTENANCE_TASKS, &payload).await
}

// GET /maintenance-schedules
pub async fn list_schedules(State(state): State<AppState>) -> AppResult<Json<Vec<JsonObject>>> {
    list_records(&state, &MAINTENANCE_SCHEDULES).await
}

// POST /maintenance-schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    create_record(&state, &MAINTENANCE_SCHEDULES, &payload).await
}

// POST /interventions (sem listagem)
pub async fn create_intervention(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    create_record(&state, &INTERVENTIONS, &payload).await
}
