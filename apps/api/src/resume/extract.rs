//! Resume text extraction. PDFs go through pdf-extract on the blocking pool;
//! plain-text uploads are taken as UTF-8.

use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Content type wins over the file extension when both are present.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        match content_type.map(|c| c.to_ascii_lowercase()) {
            Some(ct) if ct == "application/pdf" => return Some(ResumeFormat::Pdf),
            Some(ct) if ct.starts_with("text/plain") => return Some(ResumeFormat::PlainText),
            _ => {}
        }

        let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "txt" | "md" => Some(ResumeFormat::PlainText),
            _ => None,
        }
    }
}

pub async fn extract_resume_text(
    file_name: &str,
    content_type: Option<&str>,
    bytes: Bytes,
) -> Result<String, AppError> {
    let format = ResumeFormat::detect(file_name, content_type).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "Unsupported resume format for '{file_name}'; upload a PDF or plain-text file"
        ))
    })?;

    let raw = match format {
        // The extractor can panic on malformed input; a panic is just another unreadable PDF.
        ResumeFormat::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
        })
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?,
        ResumeFormat::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Resume text is not valid UTF-8".to_string())
        })?,
    };

    let text = collapse_whitespace(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the resume".to_string(),
        ));
    }
    Ok(text)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
