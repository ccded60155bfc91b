//! Data model for the screening pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One employment stint the AI pass pulled out of the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentEntry {
    pub company: String,
    pub location: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub duration_years: f64,
}

/// Full analysis of a single uploaded resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub filename: String,
    pub text_content: String,
    pub keywords_found: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_history: Option<Vec<EmploymentEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_experience_years: Option<f64>,
    #[serde(default)]
    pub is_image_based: bool,
    pub parsed_at: DateTime<Utc>,
}

/// Aggregate response for a batch filter run. Candidates are sorted by
/// score, highest first.
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub total_resumes: usize,
    pub valid_candidates: usize,
    pub rejected_candidates: usize,
    pub csv_file_name: String,
    pub candidates: Vec<ResumeAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_analysis_round_trips_without_optional_fields() {
        let json = r#"{
            "filename": "jane.pdf",
            "text_content": "python developer",
            "keywords_found": ["Python"],
            "keywords_missing": ["AWS"],
            "score": 50,
            "parsed_at": "2025-06-01T12:00:00Z"
        }"#;
        let analysis: ResumeAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.filename, "jane.pdf");
        assert_eq!(analysis.score, 50);
        assert!(analysis.ai_summary.is_none());
        assert!(!analysis.is_image_based);
    }
}
