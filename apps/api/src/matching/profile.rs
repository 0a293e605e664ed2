//! Candidate skill profile — the engine's view of a user.
//!
//! Reconciles manually declared skills with skills extracted from a resume.
//! Built fresh from `UserPreferences` on every scoring call; never persisted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::preferences::UserPreferences;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSkillProfile {
    pub declared_skills: Vec<String>,
    pub resume_extracted_skills: Vec<String>,
}

impl CandidateSkillProfile {
    pub fn new(declared_skills: Vec<String>, resume_extracted_skills: Vec<String>) -> Self {
        Self {
            declared_skills,
            resume_extracted_skills,
        }
    }

    pub fn from_preferences(prefs: &UserPreferences) -> Self {
        Self::new(prefs.top_skills.clone(), prefs.resume_skills().to_vec())
    }

    /// Union of both sources, lower-cased and de-duplicated.
    /// Blank entries are dropped so a stray `""` cannot open up scoring.
    pub fn effective_skills(&self) -> HashSet<String> {
        self.declared_skills
            .iter()
            .chain(self.resume_extracted_skills.iter())
            .map(|s| normalize_skill(s))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}
