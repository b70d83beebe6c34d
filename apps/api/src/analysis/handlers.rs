//! Axum route handlers for the Analysis API: gap, job fit, roles, catalogs.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::gap::{analyze_gap, GapReport};
use crate::analysis::job_fit::{analyze_job_fit, JobFitReport};
use crate::analysis::roles::{recommend_roles, RoleDefinition, RoleRecommendation};
use crate::errors::AppError;
use crate::skills::CategorizedSkills;
use crate::state::AppState;

const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GapRequest {
    pub user_skills: CategorizedSkills,
    /// Raw postings to analyze against; the built-in market corpus is used when empty.
    #[serde(default)]
    pub job_descriptions: Vec<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobFitRequest {
    pub user_skills: CategorizedSkills,
    pub job_description: String,
    pub resume_text: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRolesRequest {
    pub user_skills: CategorizedSkills,
    pub readiness_score: u32,
    pub max_roles: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendRolesResponse {
    pub recommendations: Vec<RoleRecommendation>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleDefinition>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ResourceSkillsResponse {
    pub skills: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct MarketDomainsResponse {
    pub domains: Vec<String>,
    pub default_domain: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/gap
///
/// Readiness against either the supplied postings or the built-in corpus for `domain`.
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Json(request): Json<GapRequest>,
) -> Result<Json<GapReport>, AppError> {
    let postings: Vec<&String> = request
        .job_descriptions
        .iter()
        .filter(|jd| !jd.trim().is_empty())
        .collect();

    let settings = &state.config.analysis;
    let report = if postings.is_empty() {
        let corpus = state.market.postings(request.domain.as_deref());
        analyze_gap(&request.user_skills, corpus, &state.resources, settings)
    } else {
        let corpus = postings
            .iter()
            .map(|jd| state.extractor.extract(jd))
            .collect::<Result<Vec<_>, _>>()?;
        analyze_gap(&request.user_skills, &corpus, &state.resources, settings)
    };

    info!(
        readiness_score = report.readiness_score,
        missing = report.missing_skills.len(),
        "Gap analysis completed"
    );

    Ok(Json(report))
}

/// POST /api/v1/analysis/job-fit
pub async fn handle_job_fit(
    State(state): State<AppState>,
    Json(request): Json<JobFitRequest>,
) -> Result<Json<JobFitReport>, AppError> {
    if request.job_description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Job description is too short. Please provide more details.".to_string(),
        ));
    }

    let report = analyze_job_fit(
        &state.extractor,
        &request.user_skills,
        &request.job_description,
        request.resume_text.as_deref(),
        request.domain.as_deref().unwrap_or_default(),
        &state.resources,
        &state.config.analysis,
    )?;

    info!(
        match_percentage = report.match_percentage,
        fit_level = ?report.fit_level,
        "Job fit analysis completed"
    );

    Ok(Json(report))
}

/// POST /api/v1/roles/recommend
pub async fn handle_recommend_roles(
    State(state): State<AppState>,
    Json(request): Json<RecommendRolesRequest>,
) -> Result<Json<RecommendRolesResponse>, AppError> {
    if request.readiness_score > 100 {
        return Err(AppError::Validation(
            "readiness_score must be between 0 and 100".to_string(),
        ));
    }

    let max_roles = request
        .max_roles
        .unwrap_or(state.config.analysis.default_max_roles);

    let recommendations = recommend_roles(
        &request.user_skills,
        request.readiness_score,
        &state.roles,
        max_roles,
    );
    info!("Generated {} role recommendations", recommendations.len());

    Ok(Json(RecommendRolesResponse {
        count: recommendations.len(),
        recommendations,
    }))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let roles = state.roles.all_roles().to_vec();
    Json(RolesResponse {
        count: roles.len(),
        roles,
    })
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<RoleDefinition>, AppError> {
    state
        .roles
        .get_role(&role_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Role {role_id} not found")))
}

/// GET /api/v1/resources/skills
pub async fn handle_resource_skills(State(state): State<AppState>) -> Json<ResourceSkillsResponse> {
    let skills = state.resources.available_skills();
    Json(ResourceSkillsResponse {
        count: skills.len(),
        skills,
    })
}

/// GET /api/v1/market/domains
pub async fn handle_market_domains(State(state): State<AppState>) -> Json<MarketDomainsResponse> {
    Json(MarketDomainsResponse {
        domains: state
            .market
            .domain_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        default_domain: state.config.analysis.default_domain.clone(),
    })
}
