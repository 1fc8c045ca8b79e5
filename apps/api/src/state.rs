use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::password::PasswordHasher;
use crate::screening::catalog::JobCatalog;
use crate::screening::extraction::{DocumentExtractor, SkillExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data; session identity travels with each request.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub hasher: PasswordHasher,
    pub catalog: Arc<JobCatalog>,
    /// Pluggable skill extractor. Default: LlmSkillExtractor when an API key is set.
    pub skill_extractor: Arc<dyn SkillExtractor>,
    pub document_extractor: Arc<dyn DocumentExtractor>,
}
