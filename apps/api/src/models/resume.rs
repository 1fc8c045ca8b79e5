use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single stored résumé text for an account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub account_email: String,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}
