//! Soft-skill evidence via keyword patterns, seven competencies.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_EVIDENCE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftSkill {
    Communication,
    Leadership,
    ProblemSolving,
    Adaptability,
    TimeManagement,
    Creativity,
    Teamwork,
}

impl SoftSkill {
    pub const ALL: [SoftSkill; 7] = [
        SoftSkill::Communication,
        SoftSkill::Leadership,
        SoftSkill::ProblemSolving,
        SoftSkill::Adaptability,
        SoftSkill::TimeManagement,
        SoftSkill::Creativity,
        SoftSkill::Teamwork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SoftSkill::Communication => "communication",
            SoftSkill::Leadership => "leadership",
            SoftSkill::ProblemSolving => "problem solving",
            SoftSkill::Adaptability => "adaptability",
            SoftSkill::TimeManagement => "time management",
            SoftSkill::Creativity => "creativity",
            SoftSkill::Teamwork => "teamwork",
        }
    }

    fn patterns(self) -> &'static [&'static str] {
        match self {
            SoftSkill::Communication => &[
                r"\b(communicated?|presented?|collaborated?|teamwork|verbal|written)\b",
                r"\b(interpersonal|public.?speaking|articulate|listening)\b",
            ],
            SoftSkill::Leadership => &[
                r"\b(led|lead|managed?|supervised?|mentored?|coached?)\b",
                r"\b(leadership|team.?lead|decision.?making|delegat\w+)\b",
            ],
            SoftSkill::ProblemSolving => &[
                r"\b(solved?|problem.?solving|troubleshoot\w*|debugg\w+)\b",
                r"\b(critical.?thinking|analytical|solution\w*|resolv\w+)\b",
            ],
            SoftSkill::Adaptability => &[
                r"\b(adapt\w+|flexible|versatile|quick.?learn\w*|agile)\b",
                r"\b(cross.?functional|multi.?task\w*|fast.?paced)\b",
            ],
            SoftSkill::TimeManagement => &[
                r"\b(deadline|time.?management|prioritiz\w+|organization)\b",
                r"\b(efficient|productivity|schedul\w+|punctual)\b",
            ],
            SoftSkill::Creativity => &[
                r"\b(creative?|innovate?\w*|design\w*|ideation)\b",
                r"\b(brainstorm\w*|original|novel|inventive)\b",
            ],
            SoftSkill::Teamwork => &[
                r"\b(team\w*|collaborat\w+|cooperat\w+|partner\w*)\b",
                r"\b(cross.?team|group.?project|collective)\b",
            ],
        }
    }

    /// Concrete advice for the competencies that have one.
    fn suggestion(self) -> Option<&'static str> {
        match self {
            SoftSkill::Communication => {
                Some("Add examples of presentations, documentation, or stakeholder interactions")
            }
            SoftSkill::Leadership => {
                Some("Mention times you led projects, mentored others, or made key decisions")
            }
            SoftSkill::ProblemSolving => {
                Some("Describe specific problems you solved and the approach used")
            }
            SoftSkill::Teamwork => Some("Highlight collaborative projects and cross-team work"),
            _ => None,
        }
    }
}

static PATTERNS: LazyLock<Vec<(SoftSkill, Vec<Regex>)>> = LazyLock::new(|| {
    SoftSkill::ALL
        .iter()
        .map(|&skill| {
            let compiled = skill
                .patterns()
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")).expect("soft skill regex"))
                .collect();
            (skill, compiled)
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Moderate,
    #[serde(rename = "Not Found")]
    NotFound,
}

impl Strength {
    fn from_matches(count: usize) -> Self {
        match count {
            0 => Strength::NotFound,
            1 | 2 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftSkillEvidence {
    pub found: bool,
    pub evidence: Vec<String>,
    pub strength: Strength,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftSkillReport {
    pub score: u32,
    pub total_detected: usize,
    pub total_possible: usize,
    pub skills: BTreeMap<SoftSkill, SoftSkillEvidence>,
    pub feedback: Vec<String>,
}

pub fn detect_soft_skills(text: &str) -> SoftSkillReport {
    let lowered = text.to_lowercase();
    let mut skills = BTreeMap::new();

    for (skill, patterns) in PATTERNS.iter() {
        let matches: Vec<&str> = patterns
            .iter()
            .flat_map(|re| re.captures_iter(&lowered))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        let distinct: BTreeSet<&str> = matches.iter().copied().collect();
        skills.insert(
            *skill,
            SoftSkillEvidence {
                found: !matches.is_empty(),
                evidence: distinct.into_iter().take(MAX_EVIDENCE).map(String::from).collect(),
                strength: Strength::from_matches(matches.len()),
            },
        );
    }

    let missing: Vec<SoftSkill> = SoftSkill::ALL
        .iter()
        .copied()
        .filter(|s| skills.get(s).map_or(true, |e| !e.found))
        .collect();
    let total_possible = SoftSkill::ALL.len();
    let total_detected = total_possible - missing.len();

    SoftSkillReport {
        score: (100.0 * total_detected as f64 / total_possible as f64).round() as u32,
        total_detected,
        total_possible,
        skills,
        feedback: soft_skill_feedback(&missing),
    }
}

fn soft_skill_feedback(missing: &[SoftSkill]) -> Vec<String> {
    let names = |skills: &[SoftSkill]| {
        skills
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut feedback = vec![match missing.len() {
        0 => "Excellent! You've demonstrated all key soft skills.".to_string(),
        1 | 2 => format!(
            "Good soft skills coverage. Consider adding evidence for: {}",
            names(missing)
        ),
        _ => format!(
            "Missing key soft skills: {}",
            names(&missing[..missing.len().min(4)])
        ),
    }];

    for skill in missing.iter().take(2) {
        if let Some(suggestion) = skill.suggestion() {
            feedback.push(format!("{}: {suggestion}", title(skill.label())));
        }
    }

    feedback
}

fn title(label: &str) -> String {
    crate::skills::normalize::title_case(label)
}
