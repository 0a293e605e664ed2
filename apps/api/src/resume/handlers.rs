use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::refresh_live_deck;
use crate::matching::session::{RefreshOutcome, RefreshTicket};
use crate::models::preferences::{ResumeAnalysis, ResumeData};
use crate::onboarding::store::store_resume_data;
use crate::resume::extract::extract_resume_text;
use crate::state::AppState;

/// Largest accepted upload.
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ResumeUploadResponse {
    pub file_name: String,
    pub analysis: ResumeAnalysis,
    /// `None` when the user had no live swipe session.
    pub deck_refresh: Option<RefreshOutcome>,
}

/// POST /api/v1/resume
/// Multipart upload, field `resume`. Analysis is best effort; the upload
/// succeeds even when no skills could be extracted.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, content_type, bytes));
        break;
    }
    let (file_name, content_type, bytes) = upload
        .ok_or_else(|| AppError::Validation("Missing multipart field 'resume'".to_string()))?;

    let text = extract_resume_text(&file_name, content_type.as_deref(), bytes).await?;

    let (ticket, analysis) = analyze_for_deck(&state, params.user_id, &text).await;
    let preferences = store_resume_data(
        &state.db,
        params.user_id,
        ResumeData {
            file_name: file_name.clone(),
            uploaded_at: Utc::now(),
            ai_analysis: Some(analysis.clone()),
        },
    )
    .await?;
    let deck_refresh =
        refresh_live_deck(&state.sessions, state.catalog.jobs(), ticket, &preferences).await;

    info!(
        user_id = %params.user_id,
        file_name = %file_name,
        skills = analysis.matched_skills.len(),
        deck_refresh = ?deck_refresh,
        "Resume processed"
    );
    Ok(Json(ResumeUploadResponse {
        file_name,
        analysis,
        deck_refresh,
    }))
}

/// Runs the analysis under a refresh ticket taken up front, so a profile
/// change that lands while the analyzer is busy supersedes this result.
pub(crate) async fn analyze_for_deck(
    state: &AppState,
    user_id: Uuid,
    text: &str,
) -> (Option<RefreshTicket>, ResumeAnalysis) {
    let ticket = state.sessions.begin_refresh(user_id).await;
    let analysis = state.resume_analyzer.analyze(text).await;
    if analysis.is_empty() {
        warn!(%user_id, "Resume analysis found no skills or projects");
    }
    (ticket, analysis)
}
