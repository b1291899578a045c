// src/web/record_handlers.rs
//! Adaptadores partilhados: listar e criar registos de uma tabela fixa.
use crate::{
    error::AppResult,
    models::{JsonObject, Table},
    services::record_service,
    state::AppState,
};
use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET genérico: 200 com o array de linhas (vazio não é erro).
pub async fn list_records(state: &AppState, table: &Table) -> AppResult<Json<Vec<JsonObject>>> {
    let rows = record_service::list_all(&state.db_pool, table).await?;
    Ok(Json(rows))
}

/// POST genérico: 201 com mensagem de confirmação (e id, se a tabela o devolve).
pub async fn create_record(
    state: &AppState,
    table: &Table,
    payload: &JsonObject,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = record_service::insert(&state.db_pool, table, payload).await?;
    tracing::info!("{} criado com id {}.", table.label, id);

    let message = format!("{} added successfully", table.label);
    let body = if table.returns_id {
        json!({ "message": message, "id": id })
    } else {
        json!({ "message": message })
    };
    Ok((StatusCode::CREATED, Json(body)))
}
