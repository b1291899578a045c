// src/web/machine_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{machine::MACHINES, JsonObject},
    services::record_service,
    state::AppState,
    web::record_handlers::{create_record, list_records},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

// GET /machines
pub async fn list_machines(State(state): State<AppState>) -> AppResult<Json<Vec<JsonObject>>> {
    list_records(&state, &MACHINES).await
}

// POST /machines
pub async fn create_machine(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    create_record(&state, &MACHINES, &payload).await
}

// PUT /machines/{id}: substitui a linha completa
pub async fn update_machine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(payload) = payload?;
    let rows_affected = record_service::update_by_id(&state.db_pool, &MACHINES, id, &payload).await?;

    if rows_affected == 0 {
        return Err(AppError::NotFound(MACHINES.label));
    }
    tracing::info!("Machine {} atualizada.", id);
    Ok(Json(json!({ "message": "Machine updated successfully" })))
}

// DELETE /machines/{id}
pub async fn delete_machine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let rows_affected = record_service::delete_by_id(&state.db_pool, &MACHINES, id).await?;

    if rows_affected == 0 {
        return Err(AppError::NotFound(MACHINES.label));
    }
    tracing::info!("Machine {} apagada.", id);
    Ok(Json(json!({ "message": "Machine deleted successfully" })))
}
