// src/web/user_handlers.rs
use crate::{
    error::AppResult,
    models::{user::required_text, JsonObject},
    services::user_service,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

// POST /users
// O campo chama-se `password_hash` por compatibilidade, mas traz a senha em claro;
// é aqui que passa a hash.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let username = required_text(&payload, "username")?;
    let password = required_text(&payload, "password_hash")?;
    let role = required_text(&payload, "role")?;

    let id = user_service::create_user(
        &state.db_pool,
        &username,
        None,
        &password,
        &role,
        state.password_hash_cost,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User added successfully", "id": id })),
    ))
}
