//! AI summary enrichment for shortlisted candidates.

use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::models::EmploymentEntry;
use crate::screening::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};

/// Cap on resume characters sent to the LLM, to keep token usage bounded.
const MAX_RESUME_CHARS: usize = 3000;

/// Structured reply from the summary prompt.
#[derive(Debug, Deserialize)]
pub struct ResumeSummary {
    pub summary: String,
    #[serde(default)]
    pub employment_history: Vec<EmploymentEntry>,
    #[serde(default)]
    pub total_experience_years: Option<f64>,
}

/// Asks the LLM for a recruiter-style summary of one resume, given the
/// keyword analysis already computed for it.
pub async fn summarize_resume(
    llm: &LlmClient,
    text: &str,
    found: &[String],
    missing: &[String],
    score: u32,
) -> Result<ResumeSummary, AppError> {
    let excerpt: String = text.chars().take(MAX_RESUME_CHARS).collect();
    let prompt = SUMMARY_PROMPT_TEMPLATE
        .replace("{resume_text}", &excerpt)
        .replace("{score}", &score.to_string())
        .replace("{keywords_found}", &join_or_none(found))
        .replace("{keywords_missing}", &join_or_none(missing));

    llm.call_json::<ResumeSummary>(&prompt, SUMMARY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume summary failed: {e}")))
}

fn join_or_none(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "None".to_string()
    } else {
        keywords.join(", ")
    }
}
