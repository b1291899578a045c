// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr, str::FromStr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://maintenance.db";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuração lida do ambiente no arranque (o `.env` é carregado em `main`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub addr: SocketAddr,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub password_hash_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Constrói a configuração a partir de uma função de lookup (útil nos testes).
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let addr = parse_or(
            &lookup,
            "APP_ADDR",
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        )?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", true)?;
        let password_hash_cost = parse_or(&lookup, "PASSWORD_HASH_COST", bcrypt::DEFAULT_COST)?;

        if max_connections == 0 {
            return Err(AppError::ConfigError(
                "DB_MAX_CONNECTIONS tem de ser maior que zero".to_string(),
            ));
        }
        // Limites aceites pelo bcrypt
        if !(4..=31).contains(&password_hash_cost) {
            return Err(AppError::ConfigError(format!(
                "PASSWORD_HASH_COST fora do intervalo 4..=31: {}",
                password_hash_cost
            )));
        }

        Ok(Self {
            database_url,
            addr,
            max_connections,
            run_migrations,
            password_hash_cost,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("valor inválido para {}: '{}'", key, raw))
        }),
    }
}
