//! Wizard completion rules for `UserPreferences`.
//!
//! Issues block completion; warnings are advice surfaced alongside a saved
//! profile.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::SkillTaxonomy;
use crate::models::preferences::UserPreferences;

pub const SALARY_FLOOR: i64 = 30_000;
pub const SALARY_CEILING: i64 = 150_000;
/// Minimum gap between the two salary handles.
pub const SALARY_STEP: i64 = 1_000;
pub const MIN_TOP_SKILLS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingReport {
    pub ready: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn validate_preferences(
    prefs: &UserPreferences,
    taxonomy: &SkillTaxonomy,
) -> OnboardingReport {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if prefs.selected_roles.iter().all(|r| r.trim().is_empty()) {
        issues.push("Select at least one role".to_string());
    }

    let salary = prefs.salary_range;
    if salary.min < SALARY_FLOOR || salary.max > SALARY_CEILING {
        issues.push(format!(
            "Salary range must stay within {SALARY_FLOOR}–{SALARY_CEILING}"
        ));
    }
    if salary.max.saturating_sub(salary.min) < SALARY_STEP {
        issues.push(format!(
            "Salary maximum must be at least {SALARY_STEP} above the minimum"
        ));
    }

    let distinct_skills: HashSet<String> = prefs
        .top_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if distinct_skills.len() < MIN_TOP_SKILLS {
        issues.push(format!(
            "Select at least {MIN_TOP_SKILLS} skills ({} more needed)",
            MIN_TOP_SKILLS - distinct_skills.len()
        ));
    }

    let mut reported = HashSet::new();
    let unknown: Vec<&str> = prefs
        .top_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && taxonomy.lookup(s).is_none())
        .filter(|s| reported.insert(s.to_lowercase()))
        .collect();
    if !unknown.is_empty() {
        warnings.push(format!(
            "Skills not in the catalog taxonomy may never match a posting: {}",
            unknown.join(", ")
        ));
    }

    let mut seen = HashSet::new();
    if !prefs.culture_preferences.iter().all(|c| seen.insert(*c)) {
        issues.push("Culture preferences contain duplicates".to_string());
    }
    if prefs.culture_preferences.is_empty() {
        warnings.push("No culture preferences selected".to_string());
    }

    if prefs.resume_data.is_none() {
        warnings.push("Upload a resume to add skills you may have missed".to_string());
    }

    OnboardingReport {
        ready: issues.is_empty(),
        issues,
        warnings,
    }
}
