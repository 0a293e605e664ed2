use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::JobPosting;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Draft,
    /// Claimed by a send in progress.
    Sending,
    Sent,
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Sending => "sending",
            DraftStatus::Sent => "sent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(DraftStatus::Draft),
            "sending" => Some(DraftStatus::Sending),
            "sent" => Some(DraftStatus::Sent),
            _ => None,
        }
    }
}

/// A saved outreach email for one job, one per (user, job).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedDraftRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: String,
    pub job: Json<JobPosting>,
    pub subject: String,
    pub body: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl SavedDraftRow {
    pub fn status(&self) -> Option<DraftStatus> {
        DraftStatus::parse(&self.status)
    }

    pub fn email(&self) -> EmailDraft {
        EmailDraft {
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}
