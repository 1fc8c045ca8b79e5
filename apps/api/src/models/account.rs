use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account. `password_hash` never leaves the service layer.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Identity returned by a successful login and held by the caller afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedSession {
    pub name: String,
    pub email: String,
}

impl From<AccountRow> for AuthenticatedSession {
    fn from(row: AccountRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
        }
    }
}
