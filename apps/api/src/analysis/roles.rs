//! Role Recommender: ranks catalog roles by skill fit and readiness.
//!
//! fit_score = round(70 × required coverage + 30 × preferred coverage).
//! Roles more than 20 readiness points out of reach are dropped.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::skills::normalize::{normalize_skill, title_case};
use crate::skills::CategorizedSkills;

/// Readiness points below a role's minimum that still count as a stretch goal.
const STRETCH_MARGIN: u32 = 20;

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "company_types", default)]
    pub company_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_path: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_readiness: u32,
}

#[derive(Debug, Deserialize)]
struct RolesFile {
    #[serde(default)]
    roles: Vec<RoleDefinition>,
}

/// Immutable role list, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<RoleDefinition>) -> Self {
        Self { roles }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: RolesFile =
            serde_json::from_str(json).context("internship roles JSON is malformed")?;
        Ok(Self::new(file.roles))
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read internship roles at {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Loads the catalog; a missing or malformed file yields an empty catalog.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => {
                info!("Loaded {} internship roles", catalog.roles.len());
                catalog
            }
            Err(e) if !path.exists() => {
                warn!("Internship roles file not found, no roles will be recommended: {e:#}");
                Self::default()
            }
            Err(e) => {
                error!("Error parsing internship roles: {e:#}");
                Self::default()
            }
        }
    }

    pub fn all_roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    pub fn get_role(&self, id: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|r| r.id == id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendation output
// ────────────────────────────────────────────────────────────────────────────

/// Readiness relative to a role's minimum. Declaration order is ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleStatus {
    Ready,
    #[serde(rename = "Stretch Goal")]
    StretchGoal,
    Future,
}

impl RoleStatus {
    pub fn classify(readiness_score: u32, min_readiness: u32) -> Self {
        if readiness_score >= min_readiness {
            RoleStatus::Ready
        } else if readiness_score.saturating_add(STRETCH_MARGIN) >= min_readiness {
            RoleStatus::StretchGoal
        } else {
            RoleStatus::Future
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RoleStatus::Ready => "green",
            RoleStatus::StretchGoal => "yellow",
            RoleStatus::Future => "red",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub id: String,
    pub title: String,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    pub company_types: Vec<String>,
    pub avg_salary: Option<String>,
    pub growth_path: Option<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_readiness: u32,
    pub fit_score: u32,
    pub required_matched: Vec<String>,
    pub required_missing: Vec<String>,
    pub preferred_matched: Vec<String>,
    pub skill_coverage: String,
    pub status: RoleStatus,
    pub status_color: String,
}

/// Skill overlap between a user and one role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleFit {
    pub fit_score: u32,
    pub required_matched: Vec<String>,
    pub required_missing: Vec<String>,
    pub preferred_matched: Vec<String>,
    pub required_total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

pub fn role_fit(user: &HashSet<String>, role: &RoleDefinition) -> RoleFit {
    let required = normalized_set(&role.required_skills);
    let preferred = normalized_set(&role.preferred_skills);

    let required_matched: Vec<&String> = required.iter().filter(|s| user.contains(*s)).collect();
    let required_missing: Vec<&String> = required.iter().filter(|s| !user.contains(*s)).collect();
    let preferred_matched: Vec<&String> = preferred.iter().filter(|s| user.contains(*s)).collect();

    let required_score = 70.0 * required_matched.len() as f64 / required.len().max(1) as f64;
    let preferred_score = 30.0 * preferred_matched.len() as f64 / preferred.len().max(1) as f64;

    RoleFit {
        fit_score: (required_score + preferred_score).round() as u32,
        required_matched: display_sorted(required_matched),
        required_missing: display_sorted(required_missing),
        preferred_matched: display_sorted(preferred_matched),
        required_total: required.len(),
    }
}

/// Ranks reachable roles by fit score, then status; equal keys keep catalog order.
pub fn recommend_roles(
    user_skills: &CategorizedSkills,
    readiness_score: u32,
    catalog: &RoleCatalog,
    max_roles: usize,
) -> Vec<RoleRecommendation> {
    let user = user_skills.normalized_set();

    let mut recommendations: Vec<RoleRecommendation> = catalog
        .all_roles()
        .iter()
        .filter(|role| readiness_score.saturating_add(STRETCH_MARGIN) >= role.min_readiness)
        .map(|role| {
            let fit = role_fit(&user, role);
            let status = RoleStatus::classify(readiness_score, role.min_readiness);
            RoleRecommendation {
                id: role.id.clone(),
                title: role.title.clone(),
                difficulty: role.difficulty.clone(),
                description: role.description.clone(),
                company_types: role.company_types.clone(),
                avg_salary: role.avg_salary.clone(),
                growth_path: role.growth_path.clone(),
                required_skills: role.required_skills.clone(),
                preferred_skills: role.preferred_skills.clone(),
                min_readiness: role.min_readiness,
                fit_score: fit.fit_score,
                skill_coverage: format!("{}/{}", fit.required_matched.len(), fit.required_total),
                required_matched: fit.required_matched,
                required_missing: fit.required_missing,
                preferred_matched: fit.preferred_matched,
                status,
                status_color: status.color().to_string(),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.fit_score
            .cmp(&a.fit_score)
            .then_with(|| a.status.cmp(&b.status))
    });
    recommendations.truncate(max_roles);
    recommendations
}

/// Distinct normalized skills in first-occurrence order.
fn normalized_set(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

fn display_sorted(skills: Vec<&String>) -> Vec<String> {
    let mut labels: Vec<String> = skills.into_iter().map(|s| title_case(s)).collect();
    labels.sort();
    labels
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
