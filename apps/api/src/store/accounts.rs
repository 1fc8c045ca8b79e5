//! Account table access. Email is the identity key everywhere else in the service.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::account::AccountRow;

/// Fields required to create an account. The hash is computed by the caller.
pub struct NewAccount<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Inserts a new account and returns its surrogate id.
/// A taken email yields `DuplicateAccount` and writes nothing.
pub async fn insert_account(pool: &SqlitePool, account: NewAccount<'_>) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO accounts (name, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(account.name)
    .bind(account.email)
    .bind(account.password_hash)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(AppError::from_account_insert)?;

    Ok(result.last_insert_rowid())
}

/// Exact, case-sensitive lookup by email.
pub async fn find_account_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<AccountRow>, AppError> {
    let row = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn count_accounts(pool: &SqlitePool) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
