// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{User, DEFAULT_ROLE},
    services::auth_service,
};
use sqlx::SqlitePool;

/// Busca um utilizador pelo username (o mais antigo, se houver repetidos).
pub async fn find_user_by_username(db_pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por username: {}", username);
    let mut conn = db_pool.acquire().await?;
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, role
        FROM users
        WHERE username = ?1
        ORDER BY id ASC
        LIMIT 1
        "#,
    )
    .bind(username)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(user)
}

/// Busca um utilizador pelo email.
pub async fn find_user_by_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por email: {}", email);
    let mut conn = db_pool.acquire().await?;
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, role
        FROM users
        WHERE email = ?1
        LIMIT 1
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(user)
}

/// Cria um utilizador com a senha já transformada em hash. Devolve o id gerado.
/// Um email repetido (índice único) dá `EmailInUse`.
pub async fn create_user(
    db_pool: &SqlitePool,
    username: &str,
    email: Option<&str>,
    raw_password: &str,
    role: &str,
    hash_cost: u32,
) -> AppResult<i64> {
    tracing::info!("Tentando criar utilizador: {}", username);
    // 1. Gera o hash da senha fora da conexão
    let password_hash = auth_service::hash_password(raw_password, hash_cost).await?;

    // 2. Uma única instrução INSERT
    let mut conn = db_pool.acquire().await?;
    let insert_result = sqlx::query(
        r#"
        INSERT INTO users (username, email, password_hash, role)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .execute(&mut *conn)
    .await;

    // Verifica erro de constraint (email duplicado)
    if let Err(sqlx::Error::Database(db_err)) = &insert_result {
        if db_err.is_unique_violation() {
            tracing::warn!("Falha ao criar user '{}': email já existe.", username);
            return Err(AppError::EmailInUse);
        }
    }

    let id = insert_result?.last_insert_rowid();
    tracing::info!("✅ Utilizador '{}' criado com id {}.", username, id);
    Ok(id)
}

/// Registo público: verifica o email e cria a conta com a role por omissão.
///
/// A verificação e o insert são duas instruções separadas; o índice único
/// em `users.email` fecha a corrida entre registos simultâneos e o perdedor
/// também recebe `EmailInUse`.
pub async fn register_account(
    db_pool: &SqlitePool,
    name: &str,
    email: &str,
    raw_password: &str,
    hash_cost: u32,
) -> AppResult<i64> {
    if find_user_by_email(db_pool, email).await?.is_some() {
        tracing::warn!("Registo recusado: email '{}' já em uso.", email);
        return Err(AppError::EmailInUse);
    }

    create_user(db_pool, name, Some(email), raw_password, DEFAULT_ROLE, hash_cost).await
}
