// src/models/user.rs
use super::table::JsonObject;
use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

// Role atribuída a contas criadas por /signup
pub const DEFAULT_ROLE: &str = "viewer";

// Representa um utilizador lido da tabela 'users'
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: String,
}

/// Resumo devolvido por `POST /users/login`.
#[derive(Debug, Serialize)]
pub struct UsernameSummary {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Resumo devolvido por `POST /login` (o frontend lê `name` e `email`).
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
}

impl From<User> for UsernameSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

impl From<User> for AccountSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Lê um campo de credenciais do corpo JSON.
/// Ausente, `null` ou vazio conta como em falta; números e booleanos viram texto.
pub fn required_text(payload: &JsonObject, key: &str) -> AppResult<String> {
    let text = match payload.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    text.filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::MissingField(key.to_string()))
}
