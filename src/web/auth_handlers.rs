// src/web/auth_handlers.rs
use crate::{
    error::AppResult,
    models::{
        user::{required_text, AccountSummary, UsernameSummary},
        JsonObject,
    },
    services::{
        auth_service::{self, LoginIdentifier},
        user_service,
    },
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

// POST /users/login: procura por username; a senha vem no campo `password_hash`
pub async fn handle_username_login(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(payload) = payload?;
    let username = required_text(&payload, "username")?;
    let password = required_text(&payload, "password_hash")?;

    tracing::info!("Tentativa de login para username: {}", username);
    let user = auth_service::authenticate(
        &state.db_pool,
        LoginIdentifier::Username(&username),
        &password,
        state.password_hash_cost,
    )
    .await?;

    Ok(Json(json!({
        "message": "Login successful",
        "user": UsernameSummary::from(user),
    })))
}

// POST /login: procura por email
pub async fn handle_email_login(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(payload) = payload?;
    let email = required_text(&payload, "email")?;
    let password = required_text(&payload, "password")?;

    tracing::info!("Tentativa de login para email: {}", email);
    let user = auth_service::authenticate(
        &state.db_pool,
        LoginIdentifier::Email(&email),
        &password,
        state.password_hash_cost,
    )
    .await?;

    Ok(Json(json!({
        "message": "Login successful",
        "user": AccountSummary::from(user),
    })))
}

// POST /signup
pub async fn handle_signup(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let name = required_text(&payload, "name")?;
    let email = required_text(&payload, "email")?;
    let password = required_text(&payload, "password")?;

    let id = user_service::register_account(
        &state.db_pool,
        &name,
        &email,
        &password,
        state.password_hash_cost,
    )
    .await?;
    tracing::info!("Nova conta registada: {} (id {})", email, id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered and saved in database" })),
    ))
}
