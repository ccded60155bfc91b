//! Resume text extraction for PDF and DOCX uploads.
//!
//! The matching engine only ever sees plain text; this module is the
//! document-format boundary in front of it.

mod docx;
mod pdf;

use crate::errors::AppError;

/// Minimum extracted characters for a resume to count as text-based.
/// Anything shorter is almost certainly a scanned document.
pub const MIN_TEXT_LENGTH: usize = 100;

/// Extracted resume text plus the image-based signal.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub text: String,
    /// True when extraction produced too little text to score meaningfully.
    pub is_image_based: bool,
}

/// Extracts text from an uploaded resume, dispatching on the lowercased
/// file extension. Unsupported extensions are a validation error; corrupt
/// documents surface as extraction errors.
pub fn parse_resume(filename: &str, bytes: &[u8]) -> Result<Extracted, AppError> {
    let lower = filename.to_lowercase();

    let text = if lower.ends_with(".pdf") {
        pdf::extract_text(bytes)?
    } else if lower.ends_with(".docx") {
        docx::extract_text(bytes)?
    } else {
        return Err(AppError::Validation(format!(
            "Unsupported file format for '{filename}'. Supported formats: PDF, DOCX"
        )));
    };

    let text = text.trim().to_string();
    let is_image_based = text.chars().count() < MIN_TEXT_LENGTH;

    Ok(Extracted {
        text,
        is_image_based,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = parse_resume("resume.txt", b"plain text").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("PDF, DOCX"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        // Garbage bytes with a valid extension must reach the DOCX parser
        // and fail there, not at the extension gate.
        let err = parse_resume("Resume.DOCX", b"not a zip").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_short_docx_is_flagged_image_based() {
        let bytes = docx::tests::docx_bytes(&["Jane Doe"]);
        let extracted = parse_resume("short.docx", &bytes).unwrap();
        assert!(extracted.is_image_based);
        assert_eq!(extracted.text, "Jane Doe");
    }

    #[test]
    fn test_long_docx_is_text_based() {
        let paragraph = "Senior software engineer with a decade of experience \
            building distributed systems, data pipelines, and web services.";
        let bytes = docx::tests::docx_bytes(&[paragraph, paragraph]);
        let extracted = parse_resume("long.docx", &bytes).unwrap();
        assert!(!extracted.is_image_based);
        assert!(extracted.text.contains("distributed systems"));
    }
}
