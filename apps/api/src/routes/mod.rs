pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as accounts;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts API
        .route("/api/v1/accounts/register", post(accounts::handle_register))
        .route("/api/v1/accounts/login", post(accounts::handle_login))
        // Resume API
        .route(
            "/api/v1/resumes",
            get(screening::handle_get_resume).post(screening::handle_save_resume),
        )
        .route("/api/v1/resumes/upload", post(screening::handle_upload_resume))
        .route(
            "/api/v1/resumes/statistics",
            post(screening::handle_statistics),
        )
        // Skills API
        .route(
            "/api/v1/skills/normalize",
            post(screening::handle_normalize_skills),
        )
        .route("/api/v1/skills/extract", post(screening::handle_extract_skills))
        // Jobs API
        .route("/api/v1/jobs", get(screening::handle_list_jobs))
        .route("/api/v1/jobs/match", post(screening::handle_match_jobs))
        .route("/api/v1/jobs/missing", post(screening::handle_missing_skills))
        .route("/api/v1/analysis", post(screening::handle_analysis))
        .with_state(state)
}
