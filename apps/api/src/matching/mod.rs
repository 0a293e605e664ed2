// Match Engine: scores the job catalog against one candidate's skills and
// keeps a per-user swipe deck that is re-ranked when resume analysis lands.

pub mod engine;
pub mod handlers;
pub mod profile;
pub mod session;

use crate::models::job::{JobPosting, ScoredJob};
use crate::models::preferences::UserPreferences;

use self::profile::CandidateSkillProfile;
use self::session::{RefreshOutcome, RefreshTicket, SessionRegistry};

/// Ranks `catalog` for a stored preferences document, or returns it unscored
/// when the user has none.
pub fn rank_for_preferences(
    catalog: &[JobPosting],
    preferences: Option<&UserPreferences>,
) -> Vec<ScoredJob> {
    let profile = preferences.map(CandidateSkillProfile::from_preferences);
    engine::score_and_rank(catalog, profile.as_ref())
}

/// Re-ranks the user's live deck for `preferences` if `ticket` is still the
/// latest one. `None` when there was no session to refresh.
pub async fn refresh_live_deck(
    sessions: &SessionRegistry,
    catalog: &[JobPosting],
    ticket: Option<RefreshTicket>,
    preferences: &UserPreferences,
) -> Option<RefreshOutcome> {
    let ticket = ticket?;
    let ranking = rank_for_preferences(catalog, Some(preferences));
    Some(sessions.apply_refresh(ticket, ranking).await)
}
