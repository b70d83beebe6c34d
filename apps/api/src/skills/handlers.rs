//! Axum route handlers for skill extraction and document upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::documents::{self, DocumentError, DocumentKind};
use crate::errors::AppError;
use crate::skills::CategorizedSkills;
use crate::state::AppState;

const MIN_EXTRACT_CHARS: usize = 10;
const MIN_DOCUMENT_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: CategorizedSkills,
    pub total_skills: usize,
}

#[derive(Debug, Serialize)]
pub struct ParseDocumentResponse {
    pub file_name: Option<String>,
    pub text: String,
    pub skills: CategorizedSkills,
    pub total_skills: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Extracts categorized skills from free text.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.text.trim().chars().count() < MIN_EXTRACT_CHARS {
        return Err(AppError::Validation("Text is too short".to_string()));
    }

    let skills = state.extractor.extract(&request.text)?;
    let total_skills = skills.total();
    info!(total_skills, "Extracted skills from text");

    Ok(Json(ExtractSkillsResponse {
        skills,
        total_skills,
    }))
}

/// POST /api/v1/documents/parse
///
/// Multipart upload (`file` field, PDF or plain text). Returns the cleaned
/// text and the skills found in it.
pub async fn handle_parse_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseDocumentResponse>, AppError> {
    let mut upload: Option<(Option<String>, Option<String>, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
        upload = Some((file_name, content_type, data));
        break;
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    info!(file_name = ?file_name, bytes = data.len(), "Parsing document");

    let kind = DocumentKind::detect(file_name.as_deref(), content_type.as_deref())
        .map_err(reject_document)?;

    // PDF text extraction is CPU-bound
    let raw = tokio::task::spawn_blocking(move || documents::extract_text(&data, kind))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(reject_document)?;

    if raw.trim().chars().count() < MIN_DOCUMENT_CHARS {
        return Err(AppError::Validation(
            "Could not extract sufficient text from document".to_string(),
        ));
    }

    let text = documents::clean_text(&raw);
    let skills = state.extractor.extract(&text)?;
    if skills.is_empty() {
        warn!(file_name = ?file_name, "No known skills found in document");
    }
    let total_skills = skills.total();
    info!(file_name = ?file_name, total_skills, "Extracted skills from document");

    Ok(Json(ParseDocumentResponse {
        file_name,
        text,
        skills,
        total_skills,
    }))
}

/// Bad uploads are the caller's fault (400); unreadable documents are 422.
fn reject_document(e: DocumentError) -> AppError {
    if e.is_client_error() {
        AppError::Validation(e.to_string())
    } else {
        AppError::Document(e)
    }
}
