// Prompt constants for outreach email drafting.

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};

pub const OUTREACH_PERSONA: &str =
    "You are an expert career coach who writes short, specific cold emails for job applications.";

/// Drafting prompt template. Placeholders: `{skills}`, `{projects}`, `{title}`,
/// `{company}`, `{description}`, `{required_skills}`, `{matching_skills}`.
pub const OUTREACH_PROMPT_TEMPLATE: &str = r#"Write a cold email for a job application.

CANDIDATE PROFILE:
- Technical skills: {skills}
- Key projects / experience: {projects}

JOB TARGET:
- Role: {title}
- Company: {company}
- Job description: {description}
- Required skills: {required_skills}
- Skills the candidate already matches: {matching_skills}

TASK:
1. Open by naming the specific role and company.
2. Pick ONE project from the list above that best proves the candidate can do this job and mention it explicitly.
3. Explain how the matching skills line up with what the job description asks for.
4. Professional, enthusiastic, under 150 words.

Return a JSON object with this EXACT schema:
{
  "subject": "Email subject line",
  "body": "Email body text"
}"#;

pub fn outreach_system() -> String {
    format!("{OUTREACH_PERSONA} {NO_FABRICATION_INSTRUCTION} {JSON_ONLY_SYSTEM}")
}
