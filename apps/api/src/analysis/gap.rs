//! Gap Analyzer: readiness against market demand, plus a learning roadmap.
//!
//! Algorithm:
//! 1. market frequency = aggregate(corpus)
//! 2. readiness = round(100 × matched weight / total weight), clamped to 100
//! 3. matched skills tagged High (≥5) / Medium, most demanded first
//! 4. missing skills tagged Critical (≥7) / High (≥4) / Medium, top N by demand
//! 5. roadmap = missing skills ordered by priority tier, with resources

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::resources::{estimate_learning_time, LearningResource, ResourceCatalog};
use crate::analysis::AnalysisSettings;
use crate::skills::normalize::title_case;
use crate::skills::{CategorizedSkills, SkillFrequency};

// ────────────────────────────────────────────────────────────────────────────
// Tiers
// ────────────────────────────────────────────────────────────────────────────

/// Learning priority of a missing skill. Declaration order is roadmap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn from_frequency(frequency: u32) -> Self {
        match frequency {
            f if f >= 7 => Priority::Critical,
            f if f >= 4 => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// Market demand of a skill the user already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
}

impl DemandLevel {
    pub fn from_frequency(frequency: u32) -> Self {
        if frequency >= 5 {
            DemandLevel::High
        } else {
            DemandLevel::Medium
        }
    }
}

/// Estimated readiness gain from learning a skill, banded by market frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreImpact {
    #[serde(rename = "+10-15%")]
    Major,
    #[serde(rename = "+5-10%")]
    Significant,
    #[serde(rename = "+3-5%")]
    Moderate,
    #[serde(rename = "+1-3%")]
    Minor,
}

impl ScoreImpact {
    pub fn from_frequency(frequency: u32) -> Self {
        match frequency {
            f if f >= 10 => ScoreImpact::Major,
            f if f >= 5 => ScoreImpact::Significant,
            f if f >= 3 => ScoreImpact::Moderate,
            _ => ScoreImpact::Minor,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill: String,
    pub frequency: u32,
    pub demand: DemandLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub frequency: u32,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub order: usize,
    pub skill: String,
    pub priority: Priority,
    pub frequency: u32,
    pub resources: Vec<LearningResource>,
    pub estimated_time: String,
    pub score_impact: ScoreImpact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub readiness_score: u32,
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<MissingSkill>,
    pub generated_roadmap: Vec<RoadmapItem>,
    pub total_market_skills: usize,
    pub user_skill_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Full gap analysis of `user_skills` against a skill-annotated corpus.
pub fn analyze_gap(
    user_skills: &CategorizedSkills,
    corpus: &[CategorizedSkills],
    resources: &ResourceCatalog,
    settings: &AnalysisSettings,
) -> GapReport {
    let market = SkillFrequency::aggregate(corpus);
    let user = user_skills.normalized();

    let readiness_score = readiness_score(&user, &market);
    let matched_skills = matched_skills(&user, &market);
    let missing_skills = missing_skills(&user, &market, settings.missing_skills_top_n);
    let generated_roadmap = build_roadmap(
        &missing_skills,
        resources,
        settings.roadmap_max_skills,
        settings.roadmap_max_resources,
    );

    GapReport {
        readiness_score,
        matched_skills,
        missing_skills,
        generated_roadmap,
        total_market_skills: market.len(),
        user_skill_count: user.len(),
    }
}

/// Share of market-weighted demand covered by `user` (normalized, distinct skills).
pub fn readiness_score(user: &[String], market: &SkillFrequency) -> u32 {
    if market.is_empty() || user.is_empty() {
        return 0;
    }
    let total_weight = market.total_weight();

    let matched_weight: u64 = user
        .iter()
        .filter_map(|skill| market.get(skill))
        .map(u64::from)
        .sum();

    let score = (100.0 * matched_weight as f64 / total_weight as f64).round() as u32;
    // 100 is reserved for full coverage
    if matched_weight < total_weight {
        score.min(99)
    } else {
        score.min(100)
    }
}

pub fn matched_skills(user: &[String], market: &SkillFrequency) -> Vec<MatchedSkill> {
    let mut matched: Vec<MatchedSkill> = user
        .iter()
        .filter_map(|skill| {
            market.get(skill).map(|frequency| MatchedSkill {
                skill: title_case(skill),
                frequency,
                demand: DemandLevel::from_frequency(frequency),
            })
        })
        .collect();

    // stable: equal frequencies keep the user's order
    matched.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    matched
}

pub fn missing_skills(user: &[String], market: &SkillFrequency, top_n: usize) -> Vec<MissingSkill> {
    let owned: HashSet<&str> = user.iter().map(String::as_str).collect();

    let mut missing: Vec<MissingSkill> = market
        .iter()
        .filter(|(skill, _)| !owned.contains(skill))
        .map(|(skill, frequency)| MissingSkill {
            skill: title_case(skill),
            frequency,
            priority: Priority::from_frequency(frequency),
        })
        .collect();

    // stable: equal frequencies keep first-occurrence order in the corpus
    missing.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    missing.truncate(top_n);
    missing
}

/// Missing skills ordered Critical → High → Medium (stable within a tier),
/// each with resolved resources and a score-impact band.
pub fn build_roadmap(
    missing: &[MissingSkill],
    resources: &ResourceCatalog,
    max_skills: usize,
    max_resources_per_skill: usize,
) -> Vec<RoadmapItem> {
    let mut ordered: Vec<&MissingSkill> = missing.iter().collect();
    ordered.sort_by_key(|m| m.priority);

    ordered
        .into_iter()
        .take(max_skills)
        .enumerate()
        .map(|(i, item)| {
            let resources = resources.resources_for(&item.skill, max_resources_per_skill);
            RoadmapItem {
                order: i + 1,
                skill: item.skill.clone(),
                priority: item.priority,
                frequency: item.frequency,
                estimated_time: estimate_learning_time(&resources),
                resources,
                score_impact: ScoreImpact::from_frequency(item.frequency),
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
