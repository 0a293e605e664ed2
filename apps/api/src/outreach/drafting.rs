//! Outreach drafting — turns a right-swiped job into a cold email.
//!
//! Default: `LlmEmailDrafter`, which falls back to a fixed template whenever
//! the model fails or returns something unusable. A swipe never fails because
//! drafting did.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::matching::profile::CandidateSkillProfile;
use crate::models::draft::EmailDraft;
use crate::models::job::{JobPosting, ScoredJob};
use crate::models::preferences::UserPreferences;
use crate::outreach::prompts::{outreach_system, OUTREACH_PROMPT_TEMPLATE};

#[async_trait]
pub trait EmailDrafter: Send + Sync {
    async fn draft(&self, job: &ScoredJob, preferences: Option<&UserPreferences>) -> EmailDraft;
}

pub struct LlmEmailDrafter(pub LlmClient);

#[async_trait]
impl EmailDrafter for LlmEmailDrafter {
    async fn draft(&self, job: &ScoredJob, preferences: Option<&UserPreferences>) -> EmailDraft {
        let prompt = build_prompt(job, preferences);
        match self
            .0
            .call_json::<EmailDraft>(&prompt, &outreach_system())
            .await
        {
            Ok(draft) => usable(draft).unwrap_or_else(|| {
                warn!(job_id = %job.job.id, "LLM returned an empty draft, using template");
                template_draft(&job.job)
            }),
            Err(e) => {
                warn!(job_id = %job.job.id, "Outreach drafting failed, using template: {e}");
                template_draft(&job.job)
            }
        }
    }
}

fn usable(draft: EmailDraft) -> Option<EmailDraft> {
    let subject = draft.subject.trim();
    let body = draft.body.trim();
    if subject.is_empty() || body.is_empty() {
        return None;
    }
    Some(EmailDraft {
        subject: subject.to_string(),
        body: body.to_string(),
    })
}

fn build_prompt(job: &ScoredJob, preferences: Option<&UserPreferences>) -> String {
    let (skills, projects) = match preferences {
        Some(prefs) => {
            let profile = CandidateSkillProfile::from_preferences(prefs);
            let mut skills = profile.declared_skills;
            for skill in profile.resume_extracted_skills {
                if !skills.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
                    skills.push(skill);
                }
            }
            (skills, prefs.resume_projects().to_vec())
        }
        None => (Vec::new(), Vec::new()),
    };

    OUTREACH_PROMPT_TEMPLATE
        .replace("{skills}", &join_or(&skills, ", ", "General software development"))
        .replace(
            "{projects}",
            &join_or(&projects, "; ", "Various software development projects"),
        )
        .replace("{title}", &job.job.title)
        .replace("{company}", &job.job.company)
        .replace("{description}", &job.job.description)
        .replace("{required_skills}", &job.job.required_skills.join(", "))
        .replace("{matching_skills}", &join_or(&job.matching_skills, ", ", "none listed"))
}

fn join_or(items: &[String], sep: &str, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(sep)
    }
}

/// Deterministic draft used when the model is unavailable.
pub fn template_draft(job: &JobPosting) -> EmailDraft {
    let focus = job
        .required_skills
        .first()
        .map(String::as_str)
        .unwrap_or("the skills you are hiring for");

    EmailDraft {
        subject: format!("Application for {}", job.title),
        body: format!(
            "Dear Hiring Team at {company},\n\n\
             I am writing to express my strong interest in the {title} position. \
             My background matches your requirements for {focus}, and I am eager to \
             contribute to your team.\n\n\
             Best regards,\n[Your Name]",
            company = job.company,
            title = job.title,
        ),
    }
}
