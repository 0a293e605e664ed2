use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::draft::{DraftStatus, EmailDraft, SavedDraftRow};
use crate::models::job::JobPosting;

const DRAFT_COLUMNS: &str =
    "id, user_id, job_id, job, subject, body, status, created_at, sent_at";

/// Saves the draft for (user, job). A pending draft is replaced; a draft that
/// was already sent is left alone and returned as-is.
pub async fn save_draft(
    pool: &PgPool,
    user_id: Uuid,
    job: &JobPosting,
    draft: &EmailDraft,
) -> Result<SavedDraftRow, sqlx::Error> {
    let saved = sqlx::query_as::<_, SavedDraftRow>(&format!(
        r#"
        INSERT INTO saved_drafts (id, user_id, job_id, job, subject, body, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
        ON CONFLICT (user_id, job_id) DO UPDATE
            SET job = EXCLUDED.job,
                subject = EXCLUDED.subject,
                body = EXCLUDED.body,
                created_at = NOW()
            WHERE saved_drafts.status = 'draft'
        RETURNING {DRAFT_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&job.id)
    .bind(Json(job))
    .bind(&draft.subject)
    .bind(&draft.body)
    .bind(DraftStatus::Draft.as_str())
    .fetch_optional(pool)
    .await?;

    match saved {
        Some(row) => Ok(row),
        None => {
            sqlx::query_as::<_, SavedDraftRow>(&format!(
                "SELECT {DRAFT_COLUMNS} FROM saved_drafts WHERE user_id = $1 AND job_id = $2"
            ))
            .bind(user_id)
            .bind(&job.id)
            .fetch_one(pool)
            .await
        }
    }
}

/// Newest first.
pub async fn list_drafts(pool: &PgPool, user_id: Uuid) -> Result<Vec<SavedDraftRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedDraftRow>(&format!(
        "SELECT {DRAFT_COLUMNS} FROM saved_drafts WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_draft(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
) -> Result<Option<SavedDraftRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedDraftRow>(&format!(
        "SELECT {DRAFT_COLUMNS} FROM saved_drafts WHERE id = $1 AND user_id = $2"
    ))
    .bind(draft_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Edits a pending draft. `None` if the draft is missing or already sent.
pub async fn update_draft(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
    draft: &EmailDraft,
) -> Result<Option<SavedDraftRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedDraftRow>(&format!(
        r#"
        UPDATE saved_drafts
        SET subject = $3, body = $4
        WHERE id = $1 AND user_id = $2 AND status = 'draft'
        RETURNING {DRAFT_COLUMNS}
        "#
    ))
    .bind(draft_id)
    .bind(user_id)
    .bind(&draft.subject)
    .bind(&draft.body)
    .fetch_optional(pool)
    .await
}

/// Atomically moves a pending draft to `sending`, so exactly one caller
/// gets to deliver it. `None` if the draft is missing or not pending.
pub async fn claim_for_send(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
) -> Result<Option<SavedDraftRow>, sqlx::Error> {
    set_status(pool, user_id, draft_id, DraftStatus::Draft, DraftStatus::Sending).await
}

/// Hands a claimed draft back after a failed delivery.
pub async fn release_claim(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
) -> Result<Option<SavedDraftRow>, sqlx::Error> {
    set_status(pool, user_id, draft_id, DraftStatus::Sending, DraftStatus::Draft).await
}

/// Finishes a claimed draft and stamps `sent_at`.
pub async fn mark_sent(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
) -> Result<Option<SavedDraftRow>, sqlx::Error> {
    set_status(pool, user_id, draft_id, DraftStatus::Sending, DraftStatus::Sent).await
}

async fn set_status(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
    from: DraftStatus,
    to: DraftStatus,
) -> Result<Option<SavedDraftRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedDraftRow>(&format!(
        r#"
        UPDATE saved_drafts
        SET status = $4,
            sent_at = CASE WHEN $4 = 'sent' THEN NOW() ELSE sent_at END
        WHERE id = $1 AND user_id = $2 AND status = $3
        RETURNING {DRAFT_COLUMNS}
        "#
    ))
    .bind(draft_id)
    .bind(user_id)
    .bind(from.as_str())
    .bind(to.as_str())
    .fetch_optional(pool)
    .await
}

/// Returns false when nothing was deleted.
pub async fn delete_draft(
    pool: &PgPool,
    user_id: Uuid,
    draft_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM saved_drafts WHERE id = $1 AND user_id = $2")
        .bind(draft_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
