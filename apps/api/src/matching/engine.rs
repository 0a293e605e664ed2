//! Match Engine — scores every posting in a catalog against a candidate's
//! effective skill set and returns a best-first deck.
//!
//! Pure and deterministic: no I/O, no shared state, total over all inputs.
//!
//! Algorithm per posting:
//! 1. matching_skills = required_skills present in the effective set (job order kept)
//! 2. raw = round(matches / max(required, 1) × 100), or 0 with no matches
//! 3. 0 < raw < 50 → raw + 20
//! 4. clamp to 98
//!
//! Zero scores are dropped and the rest stable-sorted descending. A candidate
//! with no skills at all gets the unscored catalog back instead.

use std::collections::HashSet;

use crate::matching::profile::{normalize_skill, CandidateSkillProfile};
use crate::models::job::{JobPosting, ScoredJob};

/// Flat bonus for postings with some, but sparse, coverage.
pub const LOW_SCORE_BOOST: u8 = 20;
/// Boost applies only to raw scores strictly below this.
pub const LOW_SCORE_BOOST_CEILING: u8 = 50;
/// No posting is ever presented as a perfect match.
pub const MAX_MATCH_PERCENTAGE: u8 = 98;

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Scores and ranks `catalog` for `profile`.
///
/// `None` means the candidate has not completed onboarding. Both `None` and an
/// empty effective skill set skip scoring and return the catalog as-is, in order,
/// with zero scores and no matching skills.
pub fn score_and_rank(
    catalog: &[JobPosting],
    profile: Option<&CandidateSkillProfile>,
) -> Vec<ScoredJob> {
    let skills = profile.map(|p| p.effective_skills()).unwrap_or_default();

    if skills.is_empty() {
        return unscored(catalog);
    }

    let mut ranked: Vec<ScoredJob> = catalog
        .iter()
        .map(|job| score_job(job, &skills))
        .filter(|scored| scored.match_percentage > 0)
        .collect();

    // sort_by is stable: equal scores keep catalog order.
    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked
}

fn unscored(catalog: &[JobPosting]) -> Vec<ScoredJob> {
    catalog.iter().cloned().map(ScoredJob::unscored).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Per-posting scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a single posting. `skills` must already be normalized.
pub fn score_job(job: &JobPosting, skills: &HashSet<String>) -> ScoredJob {
    let matching_skills: Vec<String> = job
        .required_skills
        .iter()
        .filter(|s| skills.contains(&normalize_skill(s)))
        .cloned()
        .collect();

    let match_percentage = match_percentage(matching_skills.len(), job.required_skills.len());

    ScoredJob {
        job: job.clone(),
        match_percentage,
        matching_skills,
    }
}

/// Coverage score for `matched` of `required` skills, boosted and clamped.
pub fn match_percentage(matched: usize, required: usize) -> u8 {
    if matched == 0 {
        return 0;
    }

    let total = required.max(1);
    let raw = ((matched as f64 / total as f64) * 100.0).round() as u32;

    let boosted = if raw > 0 && raw < LOW_SCORE_BOOST_CEILING as u32 {
        raw + LOW_SCORE_BOOST as u32
    } else {
        raw
    };

    boosted.min(MAX_MATCH_PERCENTAGE as u32) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
