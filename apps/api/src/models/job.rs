use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Remote,
    Hybrid,
    Onsite,
}

/// Yearly salary band in whole currency units. `min <= max` is expected but
/// never enforced here; the catalog producer owns that.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

/// A single job posting as held in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub work_type: WorkType,
    pub salary_range: SalaryRange,
    /// Skill ids weighed by the match engine, in display order.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Display only; never scored.
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    pub posted_date: NaiveDate,
}

/// A posting annotated with its match against one candidate.
/// Only valid for the scoring call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_percentage: u8,
    pub matching_skills: Vec<String>,
}

impl ScoredJob {
    /// Wraps a posting without scoring it.
    pub fn unscored(job: JobPosting) -> Self {
        Self {
            job,
            match_percentage: 0,
            matching_skills: Vec::new(),
        }
    }
}
