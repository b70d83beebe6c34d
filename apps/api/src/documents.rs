//! Document text extraction for uploaded resumes (PDF or plain text).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}. Only PDF and plain text are supported.")]
    UnsupportedType(String),

    #[error("File is empty")]
    Empty,

    #[error("Plain text file is not valid UTF-8")]
    InvalidEncoding,

    #[error("Error extracting text from PDF: {0}")]
    Extraction(String),
}

impl DocumentError {
    /// True when the upload itself is unacceptable, as opposed to a parse failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DocumentError::Extraction(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Detects the kind from the file extension, falling back to the declared content type.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Result<Self, DocumentError> {
        let name = file_name.unwrap_or_default().to_lowercase();
        if name.ends_with(".pdf") {
            return Ok(DocumentKind::Pdf);
        }
        if name.ends_with(".txt") {
            return Ok(DocumentKind::PlainText);
        }

        match content_type.map(|c| c.to_lowercase()) {
            Some(c) if c == "application/pdf" => Ok(DocumentKind::Pdf),
            Some(c) if c.starts_with("text/plain") => Ok(DocumentKind::PlainText),
            other => Err(DocumentError::UnsupportedType(
                other
                    .or_else(|| file_name.map(str::to_string))
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }
}

/// Extracts raw text from `bytes`. PDF extraction is CPU-bound; call it off the async runtime.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, DocumentError> {
    if bytes.is_empty() {
        return Err(DocumentError::Empty);
    }

    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Extraction(e.to_string()))?,
        DocumentKind::PlainText => {
            String::from_utf8(bytes.to_vec()).map_err(|_| DocumentError::InvalidEncoding)?
        }
    };

    Ok(text.trim().to_string())
}

/// Collapses every whitespace run to a single space.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
