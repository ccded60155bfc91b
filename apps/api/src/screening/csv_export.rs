//! CSV export of shortlisted candidates.

use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::screening::models::ResumeAnalysis;

const HEADERS: [&str; 8] = [
    "Filename",
    "Score",
    "Total Experience (Years)",
    "Keywords Found",
    "Keywords Missing",
    "AI Summary",
    "Employment History",
    "Parsed At",
];

/// Renders candidates to CSV bytes, highest score first.
pub fn export_to_csv(candidates: &[ResumeAnalysis]) -> Result<Vec<u8>, AppError> {
    let mut rows: Vec<&ResumeAnalysis> = candidates.iter().collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS).map_err(csv_error)?;
    for candidate in rows {
        writer
            .write_record(candidate_record(candidate))
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Csv(e.to_string()))
}

/// Timestamped attachment name for a generated CSV.
pub fn timestamped_filename(now: DateTime<Utc>) -> String {
    format!("filtered_resumes_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Csv(e.to_string())
}

fn candidate_record(c: &ResumeAnalysis) -> [String; 8] {
    let (score, summary) = if c.is_image_based {
        (
            "N/A (Image-based)".to_string(),
            "Could not process - resume appears to be image-based".to_string(),
        )
    } else {
        (
            c.score.to_string(),
            c.ai_summary.clone().unwrap_or_else(|| "N/A".to_string()),
        )
    };

    [
        c.filename.clone(),
        score,
        c.total_experience_years
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        c.keywords_found.join(", "),
        c.keywords_missing.join(", "),
        summary,
        employment_history_cell(c),
        c.parsed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

fn employment_history_cell(c: &ResumeAnalysis) -> String {
    let Some(history) = c.employment_history.as_ref().filter(|h| !h.is_empty()) else {
        return "N/A".to_string();
    };

    let mut lines: Vec<String> = history
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{}- {} - {} - {} ({} - {}) [{} yrs]",
                i + 1,
                e.company,
                e.location,
                e.role,
                e.start_date,
                e.end_date,
                e.duration_years
            )
        })
        .collect();
    if let Some(total) = c.total_experience_years {
        lines.push(format!("Total: {total} years"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::screening::models::EmploymentEntry;

    fn analysis(filename: &str, score: u32) -> ResumeAnalysis {
        ResumeAnalysis {
            filename: filename.to_string(),
            text_content: String::new(),
            keywords_found: vec!["Python".to_string()],
            keywords_missing: vec!["AWS".to_string(), "Docker".to_string()],
            score,
            ai_summary: Some("Strong candidate.".to_string()),
            employment_history: None,
            total_experience_years: None,
            is_image_based: false,
            parsed_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    fn parse_csv(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::Reader::from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_header_row() {
        let bytes = export_to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Filename,Score,Total Experience (Years)"));
    }

    #[test]
    fn test_rows_sorted_by_score_descending() {
        let bytes =
            export_to_csv(&[analysis("low.pdf", 40), analysis("high.pdf", 90)]).unwrap();
        let rows = parse_csv(&bytes);
        assert_eq!(rows[0][0], "high.pdf");
        assert_eq!(rows[1][0], "low.pdf");
    }

    #[test]
    fn test_keywords_are_comma_joined() {
        let bytes = export_to_csv(&[analysis("a.pdf", 50)]).unwrap();
        let rows = parse_csv(&bytes);
        assert_eq!(rows[0][3], "Python");
        assert_eq!(rows[0][4], "AWS, Docker");
        assert_eq!(rows[0][7], "2025-06-01 12:00:00");
    }

    #[test]
    fn test_image_based_resume_masks_score_and_summary() {
        let mut a = analysis("scan.pdf", 0);
        a.is_image_based = true;
        let bytes = export_to_csv(&[a]).unwrap();
        let rows = parse_csv(&bytes);
        assert_eq!(rows[0][1], "N/A (Image-based)");
        assert!(rows[0][5].contains("image-based"));
    }

    #[test]
    fn test_employment_history_is_numbered_with_total() {
        let mut a = analysis("b.pdf", 70);
        a.employment_history = Some(vec![EmploymentEntry {
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            role: "Engineer".to_string(),
            start_date: "2019-01".to_string(),
            end_date: "Present".to_string(),
            duration_years: 6.5,
        }]);
        a.total_experience_years = Some(6.5);
        let bytes = export_to_csv(&[a]).unwrap();
        let rows = parse_csv(&bytes);
        assert!(rows[0][6].starts_with("1- Acme - Berlin - Engineer"));
        assert!(rows[0][6].contains("Total: 6.5 years"));
        assert_eq!(rows[0][2], "6.5");
    }

    #[test]
    fn test_timestamped_filename_format() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 5).unwrap();
        assert_eq!(
            timestamped_filename(now),
            "filtered_resumes_20250601_123005.csv"
        );
    }
}
