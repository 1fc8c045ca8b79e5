mod auth;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod screening;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::password::PasswordHasher;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::catalog::JobCatalog;
use crate::screening::extraction::{
    DisabledSkillExtractor, LlmSkillExtractor, PdfTextExtractor, SkillExtractor,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite store
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Job catalog: file override or built-in defaults
    let catalog = match &config.job_catalog_path {
        Some(path) => JobCatalog::load(path)?,
        None => {
            info!("Using built-in job catalog");
            JobCatalog::default()
        }
    };

    // Skill extractor: LLM-backed when a key is configured
    let skill_extractor: Arc<dyn SkillExtractor> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM skill extractor initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmSkillExtractor(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; skill extraction disabled");
            Arc::new(DisabledSkillExtractor)
        }
    };

    let hasher = PasswordHasher::new(config.password_hash_iterations);
    info!("Password hashing: PBKDF2-SHA256, {} iterations", hasher.iterations());

    let state = AppState {
        db,
        hasher,
        catalog: Arc::new(catalog),
        skill_extractor,
        document_extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
