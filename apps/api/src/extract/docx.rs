//! DOCX text extraction.
//!
//! A .docx file is a zip container with the document body in
//! `word/document.xml`. Text lives in `w:t` runs, one `w:p` element per
//! paragraph.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    document_text(&xml)
}

fn docx_error(e: impl std::fmt::Display) -> AppError {
    AppError::Extraction(format!("Error parsing DOCX: {e}"))
}

fn document_text(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => text.push(' '),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(docx_error)?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(docx_error(e)),
        }
    }

    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use super::*;

    /// Builds a minimal in-memory .docx with one `w:p` per paragraph.
    pub(crate) fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::FileOptions::default();
            writer
                .start_file("word/document.xml", options)
                .expect("start zip entry");

            let body: String = paragraphs
                .iter()
                .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
                .collect();
            write!(
                writer,
                "<w:document><w:body>{body}</w:body></w:document>"
            )
            .expect("write document.xml");
            writer.finish().expect("finish zip");
        }
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let bytes = docx_bytes(&["First paragraph", "Second paragraph"]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "First paragraph\nSecond paragraph\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let bytes = docx_bytes(&["C&amp;I engineer"]);
        let text = extract_text(&bytes).unwrap();
        assert!(text.contains("C&I engineer"));
    }

    #[test]
    fn test_not_a_zip_is_an_extraction_error() {
        let err = extract_text(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_zip_without_document_xml_is_rejected() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::FileOptions::default();
            writer.start_file("unrelated.txt", options).unwrap();
            write!(writer, "hello").unwrap();
            writer.finish().unwrap();
        }
        let err = extract_text(&cursor.into_inner()).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
