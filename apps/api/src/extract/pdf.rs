//! PDF text extraction, delegated to the `pdf-extract` crate.

use crate::errors::AppError;

pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Error parsing PDF: {e}")))
}
