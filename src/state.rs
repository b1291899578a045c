// src/state.rs
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    // Fator de trabalho do bcrypt (vem da configuração)
    pub password_hash_cost: u32,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, password_hash_cost: u32) -> Self {
        Self {
            db_pool,
            password_hash_cost,
        }
    }
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
