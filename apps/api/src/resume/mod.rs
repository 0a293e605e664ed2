// Resume intake: text extraction and best-effort skill analysis.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod prompts;
