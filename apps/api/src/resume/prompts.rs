// Prompt constants for resume analysis.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const RESUME_ANALYSIS_PERSONA: &str =
    "You are an expert technical recruiter who reads resumes and extracts structured data.";

/// Analysis prompt template. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text.

RESUME TEXT:
{resume_text}

INSTRUCTIONS:
1. Extract a list of distinct technical skills, one short identifier per skill (e.g. "react", "postgresql").
2. Extract the key projects or work experiences. Summarize each in 5-10 words (e.g. "E-commerce dashboard with React").
3. Estimate an overall technical profile strength from 0 to 100.

Return a JSON object with this EXACT schema:
{
  "matched_skills": ["skill1", "skill2"],
  "projects": ["Project A summary", "Project B summary"],
  "match_score": 85
}"#;

pub fn resume_analysis_system() -> String {
    format!("{RESUME_ANALYSIS_PERSONA} {JSON_ONLY_SYSTEM}")
}
