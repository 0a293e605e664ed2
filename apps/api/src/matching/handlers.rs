use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::rank_for_preferences;
use crate::matching::session::{SessionSnapshot, SwipeDirection, SwipeError};
use crate::models::draft::SavedDraftRow;
use crate::models::job::ScoredJob;
use crate::onboarding::store::get_preferences;
use crate::outreach::drafts::save_draft;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartSessionRequest {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct SwipeRequest {
    pub job_id: String,
    pub direction: SwipeDirection,
}

#[derive(Serialize)]
pub struct SwipeResponse {
    pub job: ScoredJob,
    pub direction: SwipeDirection,
    /// Present for right swipes.
    pub draft: Option<SavedDraftRow>,
    pub remaining: usize,
}

impl From<SwipeError> for AppError {
    fn from(e: SwipeError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

/// POST /api/v1/swipe/sessions
pub async fn handle_start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let preferences = get_preferences(&state.db, req.user_id)
        .await?
        .map(|row| row.preferences.0);
    let deck = rank_for_preferences(state.catalog.jobs(), preferences.as_ref());

    let snapshot = state.sessions.start(req.user_id, deck).await;
    info!(
        user_id = %req.user_id,
        cards = snapshot.remaining,
        has_preferences = preferences.is_some(),
        "Swipe session started"
    );
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/swipe/sessions/:user_id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    state
        .sessions
        .snapshot(user_id)
        .await
        .map(Json)
        .ok_or_else(|| SwipeError::NoSession.into())
}

/// DELETE /api/v1/swipe/sessions/:user_id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.end(user_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(SwipeError::NoSession.into())
    }
}

/// POST /api/v1/swipe/sessions/:user_id/swipe
pub async fn handle_swipe(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<SwipeRequest>,
) -> Result<Json<SwipeResponse>, AppError> {
    // The swipe is committed only once the right-swipe draft is stored, so a
    // failed save leaves the card in the deck for a retry.
    let card = state.sessions.card(user_id, &req.job_id).await?;

    let draft = match req.direction {
        SwipeDirection::Left => None,
        SwipeDirection::Right => {
            let preferences = get_preferences(&state.db, user_id)
                .await?
                .map(|row| row.preferences.0);
            let email = state
                .email_drafter
                .draft(&card, preferences.as_ref())
                .await;
            Some(save_draft(&state.db, user_id, &card.job, &email).await?)
        }
    };

    let card = state
        .sessions
        .swipe(user_id, &req.job_id, req.direction)
        .await?;

    let remaining = state
        .sessions
        .snapshot(user_id)
        .await
        .map_or(0, |s| s.remaining);

    Ok(Json(SwipeResponse {
        job: card,
        direction: req.direction,
        draft,
        remaining,
    }))
}
