use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::matching::session::SessionRegistry;
use crate::outreach::drafting::EmailDrafter;
use crate::outreach::mailer::Mailer;
use crate::resume::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<JobCatalog>,
    /// Live swipe decks. In memory only; a restart drops them.
    pub sessions: SessionRegistry,
    /// Pluggable resume analysis. Default: LlmResumeAnalyzer.
    pub resume_analyzer: Arc<dyn ResumeAnalyzer>,
    /// Pluggable outreach drafting. Default: LlmEmailDrafter.
    pub email_drafter: Arc<dyn EmailDrafter>,
    pub mailer: Arc<dyn Mailer>,
}
