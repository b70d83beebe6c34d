//! Resume Quality Analyzer.
//!
//! Four independent section analyses combined as a weighted average:
//! action verbs 0.25, soft skills 0.20, quantified achievements 0.30,
//! bullet points 0.25.

pub mod achievements;
pub mod action_verbs;
pub mod bullets;
pub mod handlers;
pub mod soft_skills;

use serde::{Deserialize, Serialize};

use achievements::{analyze_achievements, AchievementReport};
use action_verbs::{analyze_action_verbs, ActionVerbReport};
use bullets::{analyze_bullets, BulletReport};
use soft_skills::{detect_soft_skills, SoftSkillReport};

/// Sections scoring below this are candidates for the priority list.
const NEEDS_ATTENTION_BELOW: u32 = 70;
const MAX_PRIORITIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLevel {
    Excellent,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    Weak,
}

impl QualityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => QualityLevel::Excellent,
            s if s >= 60 => QualityLevel::Good,
            s if s >= 40 => QualityLevel::NeedsWork,
            _ => QualityLevel::Weak,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Your resume is well-optimized and impactful!",
            QualityLevel::Good => "Your resume is solid with room for improvement.",
            QualityLevel::NeedsWork => "Consider the suggestions below to strengthen your resume.",
            QualityLevel::Weak => "Your resume needs significant improvements.",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualitySections {
    pub action_verbs: ActionVerbReport,
    pub soft_skills: SoftSkillReport,
    pub quantified_achievements: AchievementReport,
    pub bullet_points: BulletReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub overall_score: u32,
    pub quality_level: QualityLevel,
    pub quality_message: String,
    pub sections: QualitySections,
    pub top_priorities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    ActionVerbs,
    SoftSkills,
    Achievements,
    Bullets,
}

impl Section {
    fn suggestion(self) -> &'static str {
        match self {
            Section::ActionVerbs => "Add more powerful action verbs to demonstrate impact",
            Section::SoftSkills => "Highlight soft skills with concrete examples",
            Section::Achievements => "Quantify your achievements with numbers and metrics",
            Section::Bullets => "Restructure bullet points for clarity and impact",
        }
    }
}

pub fn analyze_quality(resume_text: &str) -> QualityReport {
    let sections = QualitySections {
        action_verbs: analyze_action_verbs(resume_text),
        soft_skills: detect_soft_skills(resume_text),
        quantified_achievements: analyze_achievements(resume_text),
        bullet_points: analyze_bullets(resume_text),
    };

    let overall = sections.action_verbs.score as f64 * 0.25
        + sections.soft_skills.score as f64 * 0.20
        + sections.quantified_achievements.score as f64 * 0.30
        + sections.bullet_points.overall_score as f64 * 0.25;
    let overall_score = overall.round() as u32;
    let quality_level = QualityLevel::from_score(overall_score);

    QualityReport {
        overall_score,
        quality_level,
        quality_message: quality_level.message().to_string(),
        top_priorities: top_priorities(&sections),
        sections,
    }
}

/// Suggestions for the (up to three) weakest sections scoring under 70.
fn top_priorities(sections: &QualitySections) -> Vec<String> {
    let mut scores = [
        (Section::ActionVerbs, sections.action_verbs.score),
        (Section::SoftSkills, sections.soft_skills.score),
        (Section::Achievements, sections.quantified_achievements.score),
        (Section::Bullets, sections.bullet_points.overall_score),
    ];
    scores.sort_by_key(|(_, score)| *score);

    let priorities: Vec<String> = scores
        .iter()
        .take(MAX_PRIORITIES)
        .filter(|(_, score)| *score < NEEDS_ATTENTION_BELOW)
        .map(|(section, _)| section.suggestion().to_string())
        .collect();

    if priorities.is_empty() {
        vec!["Your resume is in great shape! Consider tailoring it to specific roles.".to_string()]
    } else {
        priorities
    }
}
