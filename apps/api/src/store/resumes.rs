//! Résumé table access: at most one row per account email.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::store::accounts::find_account_by_email;

/// Stores `text` as the account's résumé, replacing any previous one.
///
/// The replace is a single statement, so a reader sees either the old text or the
/// new text and never both rows.
pub async fn upsert_resume(pool: &SqlitePool, email: &str, text: &str) -> Result<(), AppError> {
    if find_account_by_email(pool, email).await?.is_none() {
        return Err(AppError::NotFound(format!("Account {email} not found")));
    }

    sqlx::query(
        r#"
        INSERT INTO resumes (account_email, text, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(account_email) DO UPDATE
            SET text = excluded.text,
                updated_at = excluded.updated_at
        "#,
    )
    .bind(email)
    .bind(text)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    info!("Saved resume for {email} ({} chars)", text.chars().count());
    Ok(())
}

/// Returns the stored résumé for `email`, if any.
pub async fn find_resume_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<ResumeRow>, AppError> {
    let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE account_email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
