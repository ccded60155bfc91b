//! Prompt constants for the AI summary pass.

/// System prompt: recruiter persona plus the JSON-only contract the
/// `call_json` helper depends on.
pub const SUMMARY_SYSTEM: &str = "You are an expert technical recruiter who provides \
    concise, objective candidate assessments. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// User prompt template. Placeholders: {resume_text}, {score},
/// {keywords_found}, {keywords_missing}.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"You are analyzing a candidate's resume.

Resume Content:
{resume_text}

Keyword Analysis:
- Match Score: {score}%
- Keywords Found: {keywords_found}
- Keywords Missing: {keywords_missing}

Return a JSON object with exactly these fields:
- "summary": a concise professional summary (3-4 sentences) covering the
  candidate's primary skills and experience, their actual years of
  experience, and any notable strengths or gaps. Professional and objective.
- "employment_history": an array of positions found in the resume, each with
  "company", "location", "role", "start_date", "end_date" and
  "duration_years" (number). Use "Present" as end_date for current roles and
  an empty array if no employment history is identifiable.
- "total_experience_years": total professional experience as a number, or
  null if it cannot be determined."#;
