mod catalog;
mod config;
mod db;
mod errors;
mod llm_client;
mod matching;
mod models;
mod onboarding;
mod outreach;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::session::SessionRegistry;
use crate::outreach::drafting::LlmEmailDrafter;
use crate::outreach::mailer::HttpMailer;
use crate::resume::analyzer::LlmResumeAnalyzer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobSwipe API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Job catalog: JOB_CATALOG_PATH or the built-in seed set
    let catalog = Arc::new(JobCatalog::load(config.job_catalog_path.as_deref())?);

    // Initialize LLM client; analyzer and drafter share its connection pool
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let mailer = HttpMailer::new(config.email_api_url.clone(), config.email_api_key.clone())?;
    info!("Mailer initialized ({})", config.email_api_url);

    let state = AppState {
        db,
        config: config.clone(),
        catalog,
        sessions: SessionRegistry::new(),
        resume_analyzer: Arc::new(LlmResumeAnalyzer(llm.clone())),
        email_drafter: Arc::new(LlmEmailDrafter(llm)),
        mailer: Arc::new(mailer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
