//! Resume Analysis — pluggable, trait-based extraction of skills and projects
//! from resume text.
//!
//! Default: `LlmResumeAnalyzer`. Analysis is best effort: a failed or
//! malformed AI response degrades to an empty analysis ("no resume signal")
//! and never surfaces as an error to the ranking path.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::llm_client::LlmClient;
use crate::models::preferences::ResumeAnalysis;
use crate::resume::extract::truncate_chars;
use crate::resume::prompts::{resume_analysis_system, RESUME_ANALYSIS_PROMPT_TEMPLATE};

/// Characters of resume text sent to the model.
pub const MAX_RESUME_CHARS: usize = 20_000;

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str) -> ResumeAnalysis;
}

pub struct LlmResumeAnalyzer(pub LlmClient);

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(&self, resume_text: &str) -> ResumeAnalysis {
        let prompt = build_prompt(resume_text);
        match self
            .0
            .call_json::<RawAnalysis>(&prompt, &resume_analysis_system())
            .await
        {
            Ok(raw) => {
                let analysis = raw.into_analysis();
                info!(
                    skills = analysis.matched_skills.len(),
                    projects = analysis.projects.len(),
                    "Resume analyzed"
                );
                analysis
            }
            Err(e) => {
                warn!("Resume analysis failed, continuing without resume skills: {e}");
                ResumeAnalysis::default()
            }
        }
    }
}

fn build_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(resume_text, MAX_RESUME_CHARS))
}

/// Model output as received. Scores may come back fractional or out of range.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAnalysis {
    matched_skills: Vec<String>,
    projects: Vec<String>,
    match_score: f64,
}

impl RawAnalysis {
    fn into_analysis(self) -> ResumeAnalysis {
        ResumeAnalysis {
            matched_skills: dedupe_case_insensitive(self.matched_skills),
            projects: self
                .projects
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            match_score: self.match_score.clamp(0.0, 100.0).round() as u8,
        }
    }
}

/// Trims, drops blanks and removes case-insensitive duplicates, keeping the
/// first spelling seen.
fn dedupe_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}
