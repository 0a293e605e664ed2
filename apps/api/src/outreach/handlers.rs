use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::draft::{DraftStatus, EmailDraft, SavedDraftRow};
use crate::outreach::drafts::{
    claim_for_send, delete_draft, get_draft, list_drafts, mark_sent, release_claim, update_draft,
};
use crate::outreach::mailer::{is_valid_email, OutgoingEmail};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateDraftRequest {
    pub user_id: Uuid,
    pub subject: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct SendDraftRequest {
    pub user_id: Uuid,
    pub to: String,
}

/// GET /api/v1/drafts
pub async fn handle_list_drafts(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SavedDraftRow>>, AppError> {
    Ok(Json(list_drafts(&state.db, params.user_id).await?))
}

/// PUT /api/v1/drafts/:id
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDraftRequest>,
) -> Result<Json<SavedDraftRow>, AppError> {
    if req.subject.trim().is_empty() || req.body.trim().is_empty() {
        return Err(AppError::Validation(
            "Subject and body must not be empty".to_string(),
        ));
    }

    let email = EmailDraft {
        subject: req.subject,
        body: req.body,
    };
    match update_draft(&state.db, req.user_id, id, &email).await? {
        Some(row) => Ok(Json(row)),
        None => Err(not_pending(&state, req.user_id, id).await?),
    }
}

/// POST /api/v1/drafts/:id/send
pub async fn handle_send_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendDraftRequest>,
) -> Result<Json<SavedDraftRow>, AppError> {
    let to = req.to.trim().to_string();
    if !is_valid_email(&to) {
        return Err(AppError::Validation(format!(
            "'{to}' is not a valid email address"
        )));
    }

    // Claimed before delivery so concurrent sends cannot both reach the mailer.
    let draft = match claim_for_send(&state.db, req.user_id, id).await? {
        Some(row) => row,
        None => return Err(not_pending(&state, req.user_id, id).await?),
    };

    let EmailDraft { subject, body } = draft.email();
    let email = OutgoingEmail {
        from: state.config.email_from.clone(),
        to: vec![to],
        subject,
        text: body,
    };
    if let Err(e) = state.mailer.send(&email).await {
        if let Err(release_err) = release_claim(&state.db, req.user_id, id).await {
            tracing::error!(draft_id = %id, "Failed to release send claim: {release_err}");
        }
        return Err(AppError::Email(e.to_string()));
    }

    let sent = mark_sent(&state.db, req.user_id, id).await?.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "draft {id} left the sending state during delivery"
        ))
    })?;
    tracing::info!(draft_id = %id, job_id = %sent.job_id, "Outreach email sent");
    Ok(Json(sent))
}

/// DELETE /api/v1/drafts/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if delete_draft(&state.db, params.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Draft {id} not found")))
    }
}

/// Explains why a draft is not pending: missing, being sent, or already sent.
async fn not_pending(state: &AppState, user_id: Uuid, id: Uuid) -> Result<AppError, AppError> {
    Ok(match get_draft(&state.db, user_id, id).await? {
        Some(row) if row.status() == Some(DraftStatus::Sending) => {
            AppError::Conflict(format!("Draft {id} is being sent"))
        }
        Some(_) => AppError::Conflict(format!("Draft {id} was already sent")),
        None => AppError::NotFound(format!("Draft {id} not found")),
    })
}
