//! Registration and login over the account store.

use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::password::PasswordHasher;
use crate::errors::AppError;
use crate::models::account::AuthenticatedSession;
use crate::store::accounts::{find_account_by_email, insert_account, NewAccount};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Creates an account. The password is stored only as a salted hash.
///
/// No password policy is applied here; an empty password is accepted.
pub async fn register(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    request: &RegisterRequest,
) -> Result<i64, AppError> {
    let password_hash = hash_password(*hasher, request.password.clone()).await?;

    let id = insert_account(
        pool,
        NewAccount {
            name: &request.name,
            email: &request.email,
            password_hash: &password_hash,
        },
    )
    .await?;

    info!("Registered account {id} for {}", request.email);
    Ok(id)
}

/// Verifies credentials and returns the caller's session identity.
/// Unknown email and wrong password both yield `InvalidCredentials`.
pub async fn authenticate(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    request: &LoginRequest,
) -> Result<AuthenticatedSession, AppError> {
    let account = find_account_by_email(pool, &request.email).await?;
    let stored = account.as_ref().map(|a| a.password_hash.clone());

    let verified = verify_password(*hasher, request.password.clone(), stored).await?;
    match account {
        Some(account) if verified => Ok(AuthenticatedSession::from(account)),
        _ => {
            warn!("Failed login for {}", request.email);
            Err(AppError::InvalidCredentials)
        }
    }
}

/// PBKDF2 is CPU-bound, so derivation runs on the blocking pool.
async fn hash_password(hasher: PasswordHasher, password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing task failed: {e}")))
}

/// Verifies on the blocking pool. With no stored hash a dummy derivation runs
/// and the result is `false`.
async fn verify_password(
    hasher: PasswordHasher,
    password: String,
    stored: Option<String>,
) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || match stored {
        Some(stored) => hasher.verify(&password, &stored),
        None => {
            hasher.verify_dummy(&password);
            false
        }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verification task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::task::Poll;

    use super::*;
    use crate::db::test_support::temp_pool;
    use crate::store::accounts::count_accounts;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(1_000)
    }

    fn registration(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let (pool, _dir) = temp_pool().await;
        register(&pool, &hasher(), &registration("Meera", "meera@example.com", "s3cret"))
            .await
            .unwrap();

        let session = authenticate(&pool, &hasher(), &login("meera@example.com", "s3cret"))
            .await
            .unwrap();
        assert_eq!(
            session,
            AuthenticatedSession {
                name: "Meera".to_string(),
                email: "meera@example.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_duplicate_registration_leaves_store_unchanged() {
        let (pool, _dir) = temp_pool().await;
        register(&pool, &hasher(), &registration("Meera", "meera@example.com", "one"))
            .await
            .unwrap();

        let err = register(&pool, &hasher(), &registration("Other", "meera@example.com", "two"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateAccount));
        assert_eq!(count_accounts(&pool).await.unwrap(), 1);

        // The original credentials still work; the rejected ones do not.
        assert!(authenticate(&pool, &hasher(), &login("meera@example.com", "one"))
            .await
            .is_ok());
        assert!(authenticate(&pool, &hasher(), &login("meera@example.com", "two"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_fail_identically() {
        let (pool, _dir) = temp_pool().await;
        register(&pool, &hasher(), &registration("Meera", "meera@example.com", "s3cret"))
            .await
            .unwrap();

        let wrong_password = authenticate(&pool, &hasher(), &login("meera@example.com", "nope"))
            .await
            .unwrap_err();
        let unknown_email = authenticate(&pool, &hasher(), &login("nobody@example.com", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_email_match_is_exact() {
        let (pool, _dir) = temp_pool().await;
        register(&pool, &hasher(), &registration("Meera", "meera@example.com", "s3cret"))
            .await
            .unwrap();

        let err = authenticate(&pool, &hasher(), &login("MEERA@example.com", "s3cret"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_empty_password_is_accepted() {
        let (pool, _dir) = temp_pool().await;
        register(&pool, &hasher(), &registration("Meera", "meera@example.com", ""))
            .await
            .unwrap();

        assert!(authenticate(&pool, &hasher(), &login("meera@example.com", ""))
            .await
            .is_ok());
        assert!(authenticate(&pool, &hasher(), &login("meera@example.com", " "))
            .await
            .is_err());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_hashing_yields_to_the_runtime() {
        let hashing = hash_password(PasswordHasher::new(200_000), "s3cret".to_string());
        tokio::pin!(hashing);

        // The derivation runs off the async worker, so the first poll is pending.
        let first = std::future::poll_fn(|cx| Poll::Ready(hashing.as_mut().poll(cx))).await;
        assert!(first.is_pending());

        let stored = hashing.await.unwrap();
        assert!(PasswordHasher::new(200_000).verify("s3cret", &stored));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_verification_yields_to_the_runtime() {
        let hasher = PasswordHasher::new(200_000);
        let verifying = verify_password(hasher, "s3cret".to_string(), None);
        tokio::pin!(verifying);

        let first = std::future::poll_fn(|cx| Poll::Ready(verifying.as_mut().poll(cx))).await;
        assert!(first.is_pending());
        assert!(!verifying.await.unwrap());
    }

    #[tokio::test]
    async fn test_stored_hash_is_not_plaintext() {
        let (pool, _dir) = temp_pool().await;
        register(&pool, &hasher(), &registration("Meera", "meera@example.com", "s3cret"))
            .await
            .unwrap();

        let account = find_account_by_email(&pool, "meera@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(account.password_hash, "s3cret");
        assert!(!account.password_hash.contains("s3cret"));
    }
}
