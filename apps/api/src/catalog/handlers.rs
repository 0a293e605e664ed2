use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::catalog::search::JobSearchFilter;
use crate::catalog::SkillInfo;
use crate::errors::AppError;
use crate::matching::rank_for_preferences;
use crate::models::job::{JobPosting, ScoredJob};
use crate::models::preferences::UserPreferences;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SkillGroup<'a> {
    pub category: &'static str,
    pub skills: Vec<&'a SkillInfo>,
}

/// GET /api/v1/jobs
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobSearchFilter>,
) -> Json<Vec<JobPosting>> {
    let hits = filter.apply(state.catalog.jobs());
    Json(hits.into_iter().cloned().collect())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<serde_json::Value> {
    let groups: Vec<SkillGroup> = state
        .catalog
        .skills()
        .by_category()
        .into_iter()
        .map(|(category, skills)| SkillGroup {
            category: category.label(),
            skills,
        })
        .collect();
    Json(serde_json::json!({ "groups": groups }))
}

/// POST /api/v1/jobs/matched
/// Ranks the catalog for an ad-hoc preferences document without storing it.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(preferences): Json<UserPreferences>,
) -> Json<Vec<ScoredJob>> {
    Json(rank_for_preferences(
        state.catalog.jobs(),
        Some(&preferences),
    ))
}
