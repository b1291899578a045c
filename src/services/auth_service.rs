// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::User,
    services::user_service,
};
use sqlx::SqlitePool;

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Gera um hash bcrypt (com salt) para uma senha.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt...");
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Identificador usado para procurar a conta no login.
#[derive(Debug, Clone, Copy)]
pub enum LoginIdentifier<'a> {
    Username(&'a str),
    Email(&'a str),
}

/// Autentica um utilizador. Utilizador inexistente e senha errada dão o
/// mesmo `InvalidCredentials`, com o mesmo custo bcrypt.
pub async fn authenticate(
    db_pool: &SqlitePool,
    identifier: LoginIdentifier<'_>,
    password: &str,
    hash_cost: u32,
) -> AppResult<User> {
    let user = match identifier {
        LoginIdentifier::Username(username) => {
            user_service::find_user_by_username(db_pool, username).await?
        }
        LoginIdentifier::Email(email) => user_service::find_user_by_email(db_pool, email).await?,
    };

    let Some(user) = user else {
        // Sem linha: gasta o mesmo trabalho de um verify ao custo configurado
        decoy_verify(password, hash_cost).await?;
        tracing::warn!("Login recusado: {:?}", identifier);
        return Err(AppError::InvalidCredentials);
    };

    // Hash ilegível na base conta como credenciais inválidas
    let matches = match verify_password(password, &user.password_hash).await {
        Ok(matches) => matches,
        Err(AppError::PasswordHashingError) => false,
        Err(e) => return Err(e),
    };
    if !matches {
        tracing::warn!("Login recusado: {:?}", identifier);
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!("✅ Login bem-sucedido para user id {}", user.id);
    Ok(user)
}

// Salt fixo: o resultado é descartado, só interessa o custo
const DECOY_SALT: [u8; 16] = *b"maintenance-api!";

/// Executa um bcrypt completo ao custo `hash_cost` e devolve sempre `false`.
pub async fn decoy_verify(password: &str, hash_cost: u32) -> AppResult<bool> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash_with_salt(&password, hash_cost, DECOY_SALT))
        .await
        .map_err(|e| {
            tracing::error!("Erro na task spawn_blocking (decoy_verify): {:?}", e);
            AppError::InternalServerError
        })?
        .map_err(|e| {
            tracing::error!("Erro bcrypt no verify de despiste: {:?}", e);
            AppError::PasswordHashingError
        })?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use std::time::Instant;

    const COST: u32 = 4; // custo mínimo do bcrypt

    #[tokio::test]
    async fn hash_is_salted_and_verifiable() {
        let first = hash_password("segredo", COST).await.unwrap();
        let second = hash_password("segredo", COST).await.unwrap();

        assert_ne!(first, "segredo");
        assert_ne!(first, second);
        assert!(verify_password("segredo", &first).await.unwrap());
        assert!(!verify_password("outro", &first).await.unwrap());
    }

    #[tokio::test]
    async fn invalid_cost_is_a_hashing_error() {
        assert!(matches!(
            hash_password("x", 99).await,
            Err(AppError::PasswordHashingError)
        ));
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_fail_the_same_way() {
        let pool = test_pool().await;
        user_service::create_user(&pool, "ana", None, "certa", "admin", COST)
            .await
            .unwrap();

        let unknown = authenticate(&pool, LoginIdentifier::Username("rui"), "certa", COST).await;
        let wrong = authenticate(&pool, LoginIdentifier::Username("ana"), "errada", COST).await;

        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn correct_credentials_return_the_stored_row() {
        let pool = test_pool().await;
        let id = user_service::create_user(&pool, "ana", Some("ana@fab.pt"), "certa", "admin", COST)
            .await
            .unwrap();

        let by_email = authenticate(&pool, LoginIdentifier::Email("ana@fab.pt"), "certa", COST)
            .await
            .unwrap();
        let by_name = authenticate(&pool, LoginIdentifier::Username("ana"), "certa", COST)
            .await
            .unwrap();

        assert_eq!(by_email.id, id);
        assert_eq!(by_name.id, id);
    }

    #[tokio::test]
    async fn unreadable_stored_hash_is_rejected() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO users (username, password_hash, role) VALUES ('legado', 'texto', 'viewer')")
            .execute(&pool)
            .await
            .unwrap();

        let result = authenticate(&pool, LoginIdentifier::Username("legado"), "texto", COST).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn decoy_verify_runs_bcrypt_at_the_given_cost() {
        assert!(!decoy_verify("qualquer", COST).await.unwrap());
        // Um custo inválido só falha se o bcrypt for mesmo executado
        assert!(matches!(
            decoy_verify("qualquer", 99).await,
            Err(AppError::PasswordHashingError)
        ));
    }

    #[tokio::test]
    async fn unknown_user_pays_the_bcrypt_cost() {
        let pool = test_pool().await;
        // O caminho sem utilizador executa o bcrypt: com custo inválido o erro aparece
        let result = authenticate(&pool, LoginIdentifier::Email("ninguem@fab.pt"), "x", 99).await;
        assert!(matches!(result, Err(AppError::PasswordHashingError)));
    }

    #[tokio::test]
    async fn unknown_user_is_not_much_faster_than_wrong_password() {
        const TIMING_COST: u32 = 8;
        let pool = test_pool().await;
        user_service::create_user(&pool, "ana", None, "certa", "admin", TIMING_COST)
            .await
            .unwrap();

        let started = Instant::now();
        let wrong =
            authenticate(&pool, LoginIdentifier::Username("ana"), "errada", TIMING_COST).await;
        let wrong_elapsed = started.elapsed();

        let started = Instant::now();
        let unknown =
            authenticate(&pool, LoginIdentifier::Username("rui"), "errada", TIMING_COST).await;
        let unknown_elapsed = started.elapsed();

        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
        // Margem larga: só apanha a diferença de ordens de grandeza
        assert!(
            unknown_elapsed * 4 >= wrong_elapsed,
            "unknown={:?} wrong={:?}",
            unknown_elapsed,
            wrong_elapsed
        );
    }
}
