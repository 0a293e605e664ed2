use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::refresh_live_deck;
use crate::matching::session::RefreshOutcome;
use crate::models::preferences::{PreferencesRow, UserPreferences};
use crate::onboarding::store::{get_preferences, save_wizard_preferences};
use crate::onboarding::validation::{validate_preferences, OnboardingReport};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct SavePreferencesRequest {
    pub user_id: Uuid,
    pub preferences: UserPreferences,
    /// Final wizard step. Rejected unless the report is ready.
    #[serde(default)]
    pub complete: bool,
}

#[derive(Serialize)]
pub struct PreferencesResponse {
    #[serde(flatten)]
    pub row: PreferencesRow,
    pub report: OnboardingReport,
    /// Set when a live swipe deck was re-ranked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_refresh: Option<RefreshOutcome>,
}

/// PUT /api/v1/preferences
pub async fn handle_save_preferences(
    State(state): State<AppState>,
    Json(req): Json<SavePreferencesRequest>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let report = validate_preferences(&req.preferences, state.catalog.skills());
    if req.complete && !report.ready {
        return Err(AppError::Validation(report.issues.join("; ")));
    }

    let ticket = state.sessions.begin_refresh(req.user_id).await;
    let row =
        save_wizard_preferences(&state.db, req.user_id, req.preferences, req.complete).await?;
    let wizard_completed = row.wizard_completed;
    let deck_refresh = refresh_live_deck(
        &state.sessions,
        state.catalog.jobs(),
        ticket,
        &row.preferences.0,
    )
    .await;

    info!(
        user_id = %req.user_id,
        ready = report.ready,
        wizard_completed,
        "Preferences saved"
    );
    Ok(Json(PreferencesResponse {
        row,
        report,
        deck_refresh,
    }))
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let row = get_preferences(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No preferences saved for user {}", params.user_id))
        })?;
    let report = validate_preferences(&row.preferences.0, state.catalog.skills());
    Ok(Json(PreferencesResponse {
        row,
        report,
        deck_refresh: None,
    }))
}
