//! Axum route handlers for the screening API.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::parse_flag;
use crate::errors::AppError;
use crate::extract::parse_resume;
use crate::matching::analyze;
use crate::screening::csv_export::{export_to_csv, timestamped_filename};
use crate::screening::models::{FilterResponse, ResumeAnalysis};
use crate::screening::summary::summarize_resume;
use crate::state::AppState;

/// Sentinel returned instead of a CSV name when no candidate passed.
const NO_CSV: &str = "No valid candidates found - CSV not generated";

/// One uploaded file pulled out of the multipart body.
struct UploadedFile {
    filename: String,
    bytes: Bytes,
}

/// Everything the screening endpoints accept besides the files themselves.
struct ScreeningParams {
    keywords: Vec<String>,
    double_weight_keywords: Vec<String>,
    min_score: Option<u32>,
    generate_ai_summary: bool,
}

impl Default for ScreeningParams {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            double_weight_keywords: Vec::new(),
            min_score: None,
            generate_ai_summary: true,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/filter-resumes
///
/// Batch pipeline: extract each upload, score it against the keyword
/// profile, shortlist by threshold, enrich the shortlist with AI summaries.
/// A file that fails extraction is logged and skipped; the batch continues.
pub async fn handle_filter_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FilterResponse>, AppError> {
    let (files, params) = read_multipart(&mut multipart).await?;
    if files.is_empty() {
        return Err(AppError::Validation(
            "At least one resume file is required".to_string(),
        ));
    }
    require_keywords(&params)?;

    let threshold = params.min_score.unwrap_or(state.config.min_keyword_score);

    let mut analyses = Vec::new();
    for file in files {
        state.uploads.retain(&file.filename, file.bytes.clone()).await;
        match screen_resume(&file.filename, &file.bytes, &params) {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => warn!("Error processing {}: {e}", file.filename),
        }
    }

    let total_resumes = analyses.len();
    let (mut valid, _rejected): (Vec<_>, Vec<_>) =
        analyses.into_iter().partition(|a| a.score >= threshold);
    valid.sort_by(|a, b| b.score.cmp(&a.score));

    if params.generate_ai_summary {
        enrich_candidates(&state, &mut valid).await;
    }

    let csv_file_name = if valid.is_empty() {
        NO_CSV.to_string()
    } else {
        timestamped_filename(Utc::now())
    };

    info!(
        "Filtered {total_resumes} resumes: {} at or above threshold {threshold}",
        valid.len()
    );

    Ok(Json(FilterResponse {
        total_resumes,
        valid_candidates: valid.len(),
        rejected_candidates: total_resumes - valid.len(),
        csv_file_name,
        candidates: valid,
    }))
}

/// POST /api/v1/analyze-single
///
/// Analyzes one resume without threshold filtering or CSV bookkeeping.
/// Extraction failures are returned to the caller here instead of skipped.
pub async fn handle_analyze_single(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let (files, params) = read_multipart(&mut multipart).await?;
    let Some(file) = files.into_iter().next() else {
        return Err(AppError::Validation("A resume file is required".to_string()));
    };
    require_keywords(&params)?;

    state.uploads.retain(&file.filename, file.bytes.clone()).await;
    let mut analysis = screen_resume(&file.filename, &file.bytes, &params)?;

    if params.generate_ai_summary {
        enrich_candidates(&state, std::slice::from_mut(&mut analysis)).await;
    }

    Ok(Json(analysis))
}

/// POST /api/v1/download-csv
///
/// Regenerates a CSV from candidate data the client already holds, so the
/// export needs no server-side session.
pub async fn handle_download_csv(
    Json(candidates): Json<Vec<ResumeAnalysis>>,
) -> Result<impl IntoResponse, AppError> {
    if candidates.is_empty() {
        return Err(AppError::Validation(
            "No candidates provided for CSV generation".to_string(),
        ));
    }

    let bytes = export_to_csv(&candidates)?;
    let filename = timestamped_filename(Utc::now());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

/// GET /api/v1/resumes/:filename
///
/// Serves the retained upload bytes for viewing in the browser.
pub async fn handle_view_resume(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state.uploads.get(&filename).await.ok_or_else(|| {
        AppError::NotFound(format!(
            "Resume '{filename}' not found. It may have been cleared from memory."
        ))
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, media_type(&filename).to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline steps
// ────────────────────────────────────────────────────────────────────────────

fn screen_resume(
    filename: &str,
    bytes: &[u8],
    params: &ScreeningParams,
) -> Result<ResumeAnalysis, AppError> {
    let extracted = parse_resume(filename, bytes)?;
    let outcome = analyze(
        &extracted.text,
        &params.keywords,
        &params.double_weight_keywords,
    );

    Ok(ResumeAnalysis {
        filename: filename.to_string(),
        text_content: extracted.text,
        keywords_found: outcome.found,
        keywords_missing: outcome.missing,
        score: outcome.score,
        ai_summary: None,
        employment_history: None,
        total_experience_years: None,
        is_image_based: extracted.is_image_based,
        parsed_at: Utc::now(),
    })
}

/// Adds AI summaries in place. Image-based resumes are skipped (no text
/// worth summarizing) and individual failures only cost that candidate its
/// summary, never the response.
async fn enrich_candidates(state: &AppState, candidates: &mut [ResumeAnalysis]) {
    let Some(llm) = state.llm.as_ref() else {
        info!("AI summaries are disabled. Skipping summary generation.");
        return;
    };

    for candidate in candidates.iter_mut() {
        if candidate.is_image_based {
            continue;
        }
        match summarize_resume(
            llm,
            &candidate.text_content,
            &candidate.keywords_found,
            &candidate.keywords_missing,
            candidate.score,
        )
        .await
        {
            Ok(reply) => {
                candidate.ai_summary = Some(reply.summary);
                if !reply.employment_history.is_empty() {
                    candidate.employment_history = Some(reply.employment_history);
                }
                candidate.total_experience_years = reply.total_experience_years;
            }
            Err(e) => warn!(
                "Error generating AI summary for {}: {e}",
                candidate.filename
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart parsing
// ────────────────────────────────────────────────────────────────────────────

async fn read_multipart(
    multipart: &mut Multipart,
) -> Result<(Vec<UploadedFile>, ScreeningParams), AppError> {
    let mut files = Vec::new();
    let mut params = ScreeningParams::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "files" | "file" => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                files.push(UploadedFile { filename, bytes });
            }
            "keywords" => {
                let raw = field.text().await.map_err(bad_multipart)?;
                params.keywords = parse_keyword_array(&raw, "keywords")?;
            }
            "double_weight_keywords" => {
                let raw = field.text().await.map_err(bad_multipart)?;
                params.double_weight_keywords =
                    parse_keyword_array(&raw, "double_weight_keywords")?;
            }
            "min_score" => {
                let raw = field.text().await.map_err(bad_multipart)?;
                params.min_score = Some(raw.trim().parse::<u32>().map_err(|_| {
                    AppError::Validation(
                        "min_score must be an integer between 0 and 100".to_string(),
                    )
                })?);
            }
            "generate_ai_summary" => {
                let raw = field.text().await.map_err(bad_multipart)?;
                params.generate_ai_summary = parse_flag(&raw);
            }
            other => warn!("Ignoring unknown multipart field '{other}'"),
        }
    }

    Ok((files, params))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {e}"))
}

fn parse_keyword_array(raw: &str, field: &str) -> Result<Vec<String>, AppError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
        AppError::Validation(format!("Invalid {field} format. Expected JSON array: {e}"))
    })
}

fn require_keywords(params: &ScreeningParams) -> Result<(), AppError> {
    if params.keywords.is_empty() {
        return Err(AppError::Validation(
            "Keywords must be a non-empty array".to_string(),
        ));
    }
    Ok(())
}

fn media_type(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else {
        "application/octet-stream"
    }
}
