// src/db.rs
use crate::{config::AppConfig, error::AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration; // Usar std::time::Duration aqui

pub async fn create_db_pool(config: &AppConfig) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // Pool de conexões: cada operação pede uma e devolve-a no fim
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    if config.run_migrations {
        run_migrations(&pool).await?;
    } else {
        tracing::info!("Migrações desativadas; esquema assumido como existente.");
    }

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("Executando migrações da base de dados...");
    // Executa os ficheiros SQL em ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrações concluídas.");
    Ok(())
}

/// Pool em memória com o esquema aplicado.
/// Uma única conexão sem expiração: a base em memória vive enquanto ela viver.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
