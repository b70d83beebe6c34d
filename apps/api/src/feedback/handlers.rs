use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::feedback::{analyze_quality, QualityReport};

const MIN_RESUME_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ResumeFeedbackRequest {
    pub resume_text: String,
}

/// POST /api/v1/analysis/resume-feedback
pub async fn handle_resume_feedback(
    Json(request): Json<ResumeFeedbackRequest>,
) -> Result<Json<QualityReport>, AppError> {
    if request.resume_text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "Resume text is too short for meaningful analysis.".to_string(),
        ));
    }

    let report = analyze_quality(&request.resume_text);
    info!(
        overall_score = report.overall_score,
        quality_level = ?report.quality_level,
        "Resume quality analyzed"
    );

    Ok(Json(report))
}
