//! Job Fit Analyzer: user skills vs one job description, plus an optional
//! ATS-style keyword heuristic over the raw resume text.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::resources::{LearningResource, ResourceCatalog};
use crate::analysis::AnalysisSettings;
use crate::skills::nlp::NlpError;
use crate::skills::normalize::title_case;
use crate::skills::{CategorizedSkills, SkillExtractor};

const MISSING_WITH_RESOURCES: usize = 10;

const ACTION_VERBS: &[&str] = &[
    "developed", "implemented", "designed", "created", "built", "managed", "led", "achieved",
    "improved", "optimized", "analyzed", "collaborated", "launched", "delivered", "architected",
    "deployed", "automated",
];

const IMPACT_WORDS: &[&str] = &[
    "increased", "reduced", "saved", "generated", "grew", "improved", "accelerated",
    "streamlined", "enhanced", "maximized", "minimized",
];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("word regex"));

static METRIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+%",
        r"\$\d+",
        r"\d+\s*(users|customers|clients)",
        r"\d+x",
        r"\d+\s*(times|months|years|weeks|days)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("metric regex"))
    .collect()
});

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLevel {
    Excellent,
    Good,
    Moderate,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl FitLevel {
    pub fn from_percentage(match_percentage: f64) -> Self {
        if match_percentage >= 80.0 {
            FitLevel::Excellent
        } else if match_percentage >= 60.0 {
            FitLevel::Good
        } else if match_percentage >= 40.0 {
            FitLevel::Moderate
        } else {
            FitLevel::NeedsWork
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            FitLevel::Excellent => "green",
            FitLevel::Good => "blue",
            FitLevel::Moderate => "yellow",
            FitLevel::NeedsWork => "red",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FitLevel::Excellent => "You're a strong match for this role!",
            FitLevel::Good => "You have most of the required skills",
            FitLevel::Moderate => "Consider upskilling in the missing areas",
            FitLevel::NeedsWork => "Focus on building the core required skills",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkillResources {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub keyword_match: u32,
    pub action_verbs: u32,
    pub impact_words: u32,
    pub quantifiable_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub overall_score: u32,
    pub breakdown: AtsBreakdown,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFitReport {
    pub match_percentage: f64,
    pub fit_level: FitLevel,
    pub fit_color: String,
    pub fit_message: String,
    pub matched_skills: Vec<String>,
    pub matched_count: usize,
    pub missing_skills: Vec<String>,
    pub missing_count: usize,
    pub missing_with_resources: Vec<MissingSkillResources>,
    pub extra_skills: Vec<String>,
    pub extra_count: usize,
    pub jd_skills_extracted: Vec<String>,
    pub jd_skill_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats_score: Option<AtsReport>,
    pub domain: String,
}

/// Set comparison of normalized user and JD skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub match_percentage: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub extra: BTreeSet<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Scores `user_skills` against the skills extracted from `job_description`.
///
/// The ATS heuristic runs only when non-blank `resume_text` is supplied.
pub fn analyze_job_fit(
    extractor: &SkillExtractor,
    user_skills: &CategorizedSkills,
    job_description: &str,
    resume_text: Option<&str>,
    domain: &str,
    resources: &ResourceCatalog,
    settings: &AnalysisSettings,
) -> Result<JobFitReport, NlpError> {
    let jd_skills = extractor.extract(job_description)?;
    let skill_match = match_skills(user_skills, &jd_skills);

    let ats_score = resume_text
        .filter(|text| !text.trim().is_empty())
        .map(|text| ats_score(text, job_description));

    let missing_skills = display_sorted(&skill_match.missing);
    let missing_with_resources = missing_skills
        .iter()
        .take(MISSING_WITH_RESOURCES)
        .map(|skill| MissingSkillResources {
            skill: skill.clone(),
            resources: resources.resources_for(skill, settings.fit_resources_per_skill),
        })
        .collect();

    let matched_skills = display_sorted(&skill_match.matched);
    let extra_skills = display_sorted(&skill_match.extra);
    // normalized JD set: matched ∪ missing
    let jd_set: BTreeSet<String> = skill_match
        .matched
        .union(&skill_match.missing)
        .cloned()
        .collect();
    let jd_skills_extracted = display_sorted(&jd_set);
    let fit_level = FitLevel::from_percentage(skill_match.match_percentage);

    debug!(
        match_percentage = skill_match.match_percentage,
        jd_skills = jd_skills_extracted.len(),
        "job fit computed"
    );

    Ok(JobFitReport {
        match_percentage: skill_match.match_percentage,
        fit_level,
        fit_color: fit_level.color().to_string(),
        fit_message: fit_level.message().to_string(),
        matched_count: matched_skills.len(),
        matched_skills,
        missing_count: missing_skills.len(),
        missing_skills,
        missing_with_resources,
        extra_count: extra_skills.len(),
        extra_skills,
        jd_skill_count: jd_skills_extracted.len(),
        jd_skills_extracted,
        ats_score,
        domain: domain.to_string(),
    })
}

/// `matched = user ∩ jd`, `missing = jd − user`, `extra = user − jd`.
///
/// An empty JD skill set is a vacuous full match: 100% with every user skill extra.
pub fn match_skills(user: &CategorizedSkills, jd: &CategorizedSkills) -> SkillMatch {
    let user: BTreeSet<String> = user.normalized().into_iter().collect();
    let jd: BTreeSet<String> = jd.normalized().into_iter().collect();

    if jd.is_empty() {
        return SkillMatch {
            match_percentage: 100.0,
            matched: BTreeSet::new(),
            missing: BTreeSet::new(),
            extra: user,
        };
    }

    let matched: BTreeSet<String> = user.intersection(&jd).cloned().collect();
    let missing: BTreeSet<String> = jd.difference(&user).cloned().collect();
    let extra: BTreeSet<String> = user.difference(&jd).cloned().collect();
    let percentage = 100.0 * matched.len() as f64 / jd.len() as f64;

    SkillMatch {
        match_percentage: (percentage * 10.0).round() / 10.0,
        matched,
        missing,
        extra,
    }
}

fn display_sorted(skills: &BTreeSet<String>) -> Vec<String> {
    let mut labels: Vec<String> = skills.iter().map(|s| title_case(s)).collect();
    labels.sort();
    labels
}

// ────────────────────────────────────────────────────────────────────────────
// ATS heuristic
// ────────────────────────────────────────────────────────────────────────────

pub fn ats_score(resume_text: &str, job_description: &str) -> AtsReport {
    let resume_lower = resume_text.to_lowercase();
    let jd_lower = job_description.to_lowercase();

    let jd_words = words(&jd_lower);
    let resume_words = words(&resume_lower);
    let overlap = jd_words.intersection(&resume_words).count();
    let keyword_match = capped(150.0 * overlap as f64 / jd_words.len().max(1) as f64);

    let verb_count = ACTION_VERBS.iter().filter(|v| resume_lower.contains(*v)).count();
    let action_verbs = capped(100.0 * verb_count as f64 / 5.0);

    let impact_count = IMPACT_WORDS.iter().filter(|w| resume_lower.contains(*w)).count();
    let impact_words = capped(100.0 * impact_count as f64 / 3.0);

    let metric_count = METRIC_PATTERNS.iter().filter(|re| re.is_match(resume_text)).count();
    let metrics = capped(100.0 * metric_count as f64 / 2.0);

    let overall = keyword_match * 0.4 + action_verbs * 0.2 + impact_words * 0.2 + metrics * 0.2;

    AtsReport {
        overall_score: overall.round() as u32,
        breakdown: AtsBreakdown {
            keyword_match: keyword_match.round() as u32,
            action_verbs: action_verbs.round() as u32,
            impact_words: impact_words.round() as u32,
            quantifiable_results: metrics.round() as u32,
        },
        tips: ats_tips(keyword_match, action_verbs, impact_words, metrics),
    }
}

fn words(lowered: &str) -> BTreeSet<&str> {
    WORD_RE.find_iter(lowered).map(|m| m.as_str()).collect()
}

fn capped(score: f64) -> f64 {
    score.min(100.0)
}

fn ats_tips(keyword_match: f64, action_verbs: f64, impact_words: f64, metrics: f64) -> Vec<String> {
    let mut tips = Vec::new();
    if keyword_match < 60.0 {
        tips.push("Add more keywords from the job description to your resume");
    }
    if action_verbs < 50.0 {
        tips.push("Start bullet points with strong action verbs (developed, implemented, led)");
    }
    if impact_words < 50.0 {
        tips.push("Include more impact words (improved, increased, reduced)");
    }
    if metrics < 50.0 {
        tips.push("Add quantifiable achievements (percentages, numbers, metrics)");
    }
    if tips.is_empty() {
        tips.push("Great job! Your resume is well-optimized for ATS");
    }
    tips.into_iter().map(String::from).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::skills::SkillTaxonomy;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillTaxonomy::default()))
    }

    fn user(languages: &[&str], tools: &[&str]) -> CategorizedSkills {
        CategorizedSkills {
            languages: languages.iter().map(|s| s.to_string()).collect(),
            tools: tools.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const JD: &str = "We are hiring a backend engineer with Python, SQL and Docker experience. \
                      Kubernetes is a plus.";

    #[test]
    fn test_match_skills_partitions_sets() {
        let jd = user(&["Python", "SQL"], &["Docker", "Kubernetes"]);
        let me = user(&["Python", "Rust"], &["k8s"]);
        let result = match_skills(&me, &jd);

        assert_eq!(result.matched, set(&["k8s", "python"]));
        assert_eq!(result.missing, set(&["docker", "sql"]));
        assert_eq!(result.extra, set(&["rust"]));
        assert_eq!(result.match_percentage, 50.0);

        let union: BTreeSet<String> = result.matched.union(&result.missing).cloned().collect();
        assert_eq!(union, set(&["docker", "k8s", "python", "sql"]));
        let union: BTreeSet<String> = result.matched.union(&result.extra).cloned().collect();
        assert_eq!(union, set(&["k8s", "python", "rust"]));
    }

    #[test]
    fn test_jd_skills_are_normalized_and_consistent_with_match() {
        let report = analyze_job_fit(
            &extractor(),
            &user(&["React"], &[]),
            "Frontend role using React.js and JavaScript for the main product dashboard.",
            None,
            "Frontend Developer",
            &ResourceCatalog::default(),
            &AnalysisSettings::default(),
        )
        .unwrap();

        assert!(report.jd_skills_extracted.contains(&"React".to_string()));
        assert!(report.jd_skills_extracted.contains(&"Js".to_string()));
        assert!(!report.jd_skills_extracted.contains(&"React.Js".to_string()));
        assert!(!report.jd_skills_extracted.contains(&"Javascript".to_string()));
        assert_eq!(
            report.jd_skill_count,
            report.matched_count + report.missing_count
        );
        let mut sorted = report.jd_skills_extracted.clone();
        sorted.sort();
        assert_eq!(sorted, report.jd_skills_extracted);
    }

    #[test]
    fn test_match_percentage_rounds_to_one_decimal() {
        let jd = user(&["Python", "SQL", "Go"], &[]);
        let result = match_skills(&user(&["Python"], &[]), &jd);
        assert_eq!(result.match_percentage, 33.3);
    }

    #[test]
    fn test_empty_jd_is_vacuous_full_match() {
        let me = user(&["Python"], &["Git"]);
        let result = match_skills(&me, &CategorizedSkills::default());
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.extra, set(&["git", "python"]));
    }

    #[test]
    fn test_fit_levels_and_colors() {
        assert_eq!(FitLevel::from_percentage(80.0), FitLevel::Excellent);
        assert_eq!(FitLevel::from_percentage(79.9), FitLevel::Good);
        assert_eq!(FitLevel::from_percentage(40.0), FitLevel::Moderate);
        assert_eq!(FitLevel::from_percentage(0.0), FitLevel::NeedsWork);
        assert_eq!(FitLevel::NeedsWork.color(), "red");
        assert_eq!(
            serde_json::to_string(&FitLevel::NeedsWork).unwrap(),
            r#""Needs Work""#
        );
    }

    #[test]
    fn test_analyze_job_fit_end_to_end() {
        let report = analyze_job_fit(
            &extractor(),
            &user(&["Python"], &["Git"]),
            JD,
            None,
            "Backend Developer",
            &ResourceCatalog::default(),
            &AnalysisSettings::default(),
        )
        .unwrap();

        assert!(report.matched_skills.contains(&"Python".to_string()));
        assert!(report.missing_skills.contains(&"Docker".to_string()));
        assert!(report.missing_skills.contains(&"Sql".to_string()));
        assert_eq!(report.extra_skills, vec!["Git"]);
        assert_eq!(report.matched_count, report.matched_skills.len());
        assert_eq!(report.missing_with_resources.len(), report.missing_count.min(10));
        assert_eq!(report.missing_with_resources[0].resources.len(), 1);
        assert!(report.match_percentage > 0.0 && report.match_percentage < 100.0);
        assert!(report.ats_score.is_none());
        assert_eq!(report.domain, "Backend Developer");
    }

    #[test]
    fn test_blank_resume_skips_ats() {
        let report = analyze_job_fit(
            &extractor(),
            &user(&["Python"], &[]),
            JD,
            Some("   "),
            "",
            &ResourceCatalog::default(),
            &AnalysisSettings::default(),
        )
        .unwrap();
        assert!(report.ats_score.is_none());
    }

    #[test]
    fn test_ats_weak_resume_gets_all_tips() {
        let report = ats_score("hello", JD);
        assert_eq!(report.breakdown.action_verbs, 0);
        assert_eq!(report.breakdown.impact_words, 0);
        assert_eq!(report.breakdown.quantifiable_results, 0);
        assert_eq!(report.tips.len(), 4);
    }

    #[test]
    fn test_ats_strong_resume_gets_single_positive_tip() {
        let jd = "python developer who built and deployed services";
        let resume = "Python developer. Developed, implemented, designed, built and deployed \
                      services. Increased revenue 40%, reduced costs by $3000, improved uptime. \
                      Served 5000 users.";
        let report = ats_score(resume, jd);
        assert_eq!(report.breakdown.keyword_match, 100);
        assert_eq!(report.breakdown.action_verbs, 100);
        assert_eq!(report.breakdown.impact_words, 100);
        assert_eq!(report.breakdown.quantifiable_results, 100);
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.tips, vec!["Great job! Your resume is well-optimized for ATS"]);
    }

    #[test]
    fn test_metric_patterns_count_once_each() {
        // two percentages still count as one pattern
        let report = ats_score("grew 10% then 20%", "anything");
        assert_eq!(report.breakdown.quantifiable_results, 50);
    }
}
