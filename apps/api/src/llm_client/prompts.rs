// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs next to it; only cross-cutting pieces live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated claims tied to what the candidate actually supplied.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Only mention skills, projects and experience that appear in the candidate profile. \
    Do NOT invent employers, dates, metrics or credentials.";
