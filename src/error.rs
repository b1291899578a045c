// src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),

    // Campo obrigatório ausente no corpo JSON
    #[error("Missing required field: {0}")]
    MissingField(String),

    // Corpo que não é um objeto JSON (ou Content-Type errado)
    #[error("Corpo do pedido inválido: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Email already in use")]
    EmailInUse,

    #[error("Erro ao processar password")]
    PasswordHashingError,

    // Mensagem única para utilizador inexistente e password errada
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailInUse => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Texto devolvido ao cliente no campo `error`.
    fn public_message(&self) -> String {
        match self {
            // O texto do driver segue para o cliente, sem retry nem recuperação
            AppError::SqlxError(e) => e.to_string(),
            AppError::InvalidBody(rejection) => rejection.body_text(),
            AppError::SqlxMigrateError(_) | AppError::ConfigError(_) => {
                "Erro de configuração do servidor.".to_string()
            }
            AppError::PasswordHashingError => "Erro ao processar credenciais.".to_string(),
            AppError::InternalServerError => "Ocorreu um erro inesperado.".to_string(),
            other => other.to_string(),
        }
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::warn!("Pedido rejeitado ({}): {}", status.as_u16(), self);
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
