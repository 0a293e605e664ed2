use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::{SalaryRange, WorkType};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CultureValue {
    Innovation,
    Collaboration,
    Growth,
    WorkLife,
    Autonomy,
    Diversity,
    Impact,
}

/// Output of the resume analysis service. Only `matched_skills` feeds ranking;
/// `projects` is used when drafting outreach email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub match_score: u8,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl ResumeAnalysis {
    pub fn is_empty(&self) -> bool {
        self.matched_skills.is_empty() && self.projects.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeData {
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub ai_analysis: Option<ResumeAnalysis>,
}

/// Everything the onboarding wizard collects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    #[serde(default)]
    pub selected_roles: Vec<String>,
    pub salary_range: SalaryRange,
    #[serde(default)]
    pub top_skills: Vec<String>,
    #[serde(default)]
    pub culture_preferences: Vec<CultureValue>,
    pub work_type: WorkType,
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            selected_roles: Vec::new(),
            salary_range: SalaryRange {
                min: 60_000,
                max: 120_000,
            },
            top_skills: Vec::new(),
            culture_preferences: Vec::new(),
            work_type: WorkType::Hybrid,
            experience: ExperienceLevel::Mid,
            resume_data: None,
        }
    }
}

impl UserPreferences {
    /// Skills extracted from the uploaded resume, if analysis has completed.
    pub fn resume_skills(&self) -> &[String] {
        self.resume_data
            .as_ref()
            .and_then(|r| r.ai_analysis.as_ref())
            .map(|a| a.matched_skills.as_slice())
            .unwrap_or(&[])
    }

    pub fn resume_projects(&self) -> &[String] {
        self.resume_data
            .as_ref()
            .and_then(|r| r.ai_analysis.as_ref())
            .map(|a| a.projects.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PreferencesRow {
    pub user_id: Uuid,
    pub preferences: Json<UserPreferences>,
    pub wizard_completed: bool,
    pub updated_at: DateTime<Utc>,
}
