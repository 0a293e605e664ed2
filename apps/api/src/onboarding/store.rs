use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::preferences::{PreferencesRow, ResumeData, UserPreferences};

pub async fn get_preferences(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<PreferencesRow>, sqlx::Error> {
    sqlx::query_as::<_, PreferencesRow>(
        "SELECT user_id, preferences, wizard_completed, updated_at FROM user_preferences WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Saves a wizard step. Runs under the same row lock as `store_resume_data`,
/// so a resume upload committed mid-save is merged rather than overwritten.
pub async fn save_wizard_preferences(
    pool: &PgPool,
    user_id: Uuid,
    preferences: UserPreferences,
    complete: bool,
) -> Result<PreferencesRow, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, PreferencesRow>(
        "SELECT user_id, preferences, wizard_completed, updated_at FROM user_preferences WHERE user_id = $1 FOR UPDATE",
    )
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?;

    let (preferences, wizard_completed) = merge_wizard_save(preferences, existing, complete);

    let row = sqlx::query_as::<_, PreferencesRow>(
        r#"
        INSERT INTO user_preferences (user_id, preferences, wizard_completed, updated_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (user_id) DO UPDATE
            SET preferences = EXCLUDED.preferences,
                wizard_completed = EXCLUDED.wizard_completed,
                updated_at = NOW()
        RETURNING user_id, preferences, wizard_completed, updated_at
        "#,
    )
    .bind(user_id)
    .bind(Json(&preferences))
    .bind(wizard_completed)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(row)
}

/// Resume data is owned by the upload flow: a wizard save without it keeps
/// the stored copy. Completion is sticky.
fn merge_wizard_save(
    mut incoming: UserPreferences,
    existing: Option<PreferencesRow>,
    complete: bool,
) -> (UserPreferences, bool) {
    let Some(existing) = existing else {
        return (incoming, complete);
    };
    if incoming.resume_data.is_none() {
        incoming.resume_data = existing.preferences.0.resume_data;
    }
    (incoming, complete || existing.wizard_completed)
}

/// Attaches resume data to the user's preferences, creating a default
/// document if the user has none yet. Row-locked so concurrent wizard saves
/// are not lost.
pub async fn store_resume_data(
    pool: &PgPool,
    user_id: Uuid,
    resume: ResumeData,
) -> Result<UserPreferences, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, PreferencesRow>(
        "SELECT user_id, preferences, wizard_completed, updated_at FROM user_preferences WHERE user_id = $1 FOR UPDATE",
    )
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?;

    let (mut preferences, wizard_completed) = match existing {
        Some(row) => (row.preferences.0, row.wizard_completed),
        None => (UserPreferences::default(), false),
    };
    preferences.resume_data = Some(resume);

    sqlx::query(
        r#"
        INSERT INTO user_preferences (user_id, preferences, wizard_completed, updated_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (user_id) DO UPDATE
            SET preferences = EXCLUDED.preferences,
                updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(Json(&preferences))
    .bind(wizard_completed)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::ResumeAnalysis;
    use chrono::Utc;

    fn stored(resume: Option<ResumeData>, wizard_completed: bool) -> PreferencesRow {
        PreferencesRow {
            user_id: Uuid::new_v4(),
            preferences: Json(UserPreferences {
                resume_data: resume,
                ..Default::default()
            }),
            wizard_completed,
            updated_at: Utc::now(),
        }
    }

    fn resume(skill: &str) -> ResumeData {
        ResumeData {
            file_name: "cv.pdf".into(),
            uploaded_at: Utc::now(),
            ai_analysis: Some(ResumeAnalysis {
                matched_skills: vec![skill.to_string()],
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_wizard_save_keeps_stored_resume() {
        let incoming = UserPreferences {
            top_skills: vec!["go".into()],
            ..Default::default()
        };
        let (merged, completed) =
            merge_wizard_save(incoming, Some(stored(Some(resume("django")), false)), false);
        assert_eq!(merged.top_skills, vec!["go"]);
        assert_eq!(merged.resume_skills(), ["django".to_string()]);
        assert!(!completed);
    }

    #[test]
    fn test_wizard_save_with_resume_replaces_stored_one() {
        let incoming = UserPreferences {
            resume_data: Some(resume("rust")),
            ..Default::default()
        };
        let (merged, _) =
            merge_wizard_save(incoming, Some(stored(Some(resume("django")), false)), false);
        assert_eq!(merged.resume_skills(), ["rust".to_string()]);
    }

    #[test]
    fn test_completion_is_sticky() {
        let (_, completed) =
            merge_wizard_save(UserPreferences::default(), Some(stored(None, true)), false);
        assert!(completed);

        let (merged, completed) = merge_wizard_save(UserPreferences::default(), None, true);
        assert!(completed);
        assert!(merged.resume_data.is_none());
    }
}
