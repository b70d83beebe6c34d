//! Action-verb coverage across seven impact categories.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Distinct verbs needed for a full score.
const VERBS_FOR_FULL_SCORE: f64 = 10.0;
/// Categories with fewer matches than this are reported as weak.
const WEAK_BELOW: usize = 2;
const EXAMPLES_PER_CATEGORY: usize = 3;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]+\b").expect("word regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbCategory {
    Leadership,
    Achievement,
    Creation,
    Improvement,
    Analysis,
    Technical,
    Communication,
}

impl VerbCategory {
    pub const ALL: [VerbCategory; 7] = [
        VerbCategory::Leadership,
        VerbCategory::Achievement,
        VerbCategory::Creation,
        VerbCategory::Improvement,
        VerbCategory::Analysis,
        VerbCategory::Technical,
        VerbCategory::Communication,
    ];

    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            VerbCategory::Leadership => &[
                "led", "managed", "directed", "coordinated", "supervised", "mentored", "guided",
                "headed", "oversaw", "orchestrated", "spearheaded",
            ],
            VerbCategory::Achievement => &[
                "achieved", "accomplished", "exceeded", "delivered", "completed", "earned",
                "attained", "won", "secured", "obtained",
            ],
            VerbCategory::Creation => &[
                "created", "designed", "developed", "built", "established", "founded", "initiated",
                "invented", "launched", "pioneered",
            ],
            VerbCategory::Improvement => &[
                "improved", "enhanced", "optimized", "streamlined", "accelerated", "increased",
                "boosted", "strengthened", "upgraded", "refined",
            ],
            VerbCategory::Analysis => &[
                "analyzed", "evaluated", "assessed", "researched", "investigated", "examined",
                "studied", "reviewed", "identified", "discovered",
            ],
            VerbCategory::Technical => &[
                "implemented", "engineered", "programmed", "automated", "integrated", "deployed",
                "configured", "architected", "debugged", "refactored",
            ],
            VerbCategory::Communication => &[
                "presented", "communicated", "negotiated", "collaborated", "partnered",
                "facilitated", "liaised", "advocated", "persuaded", "influenced",
            ],
        }
    }
}

/// True when `word` (any case) is in one of the verb categories.
pub fn is_action_verb(word: &str) -> bool {
    let lowered = word.to_lowercase();
    VerbCategory::ALL
        .iter()
        .any(|category| category.verbs().contains(&lowered.as_str()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUsage {
    pub count: usize,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionVerbReport {
    pub score: u32,
    pub total_found: usize,
    pub by_category: BTreeMap<VerbCategory, CategoryUsage>,
    pub weak_categories: Vec<VerbCategory>,
    pub feedback: Vec<String>,
}

pub fn analyze_action_verbs(text: &str) -> ActionVerbReport {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut by_category = BTreeMap::new();
    let mut weak_categories = Vec::new();
    let mut total_found = 0;

    for category in VerbCategory::ALL {
        let matched: Vec<&str> = category
            .verbs()
            .iter()
            .copied()
            .filter(|verb| words.contains(verb))
            .collect();

        total_found += matched.len();
        if matched.len() < WEAK_BELOW {
            weak_categories.push(category);
        }
        by_category.insert(
            category,
            CategoryUsage {
                count: matched.len(),
                examples: matched
                    .iter()
                    .take(EXAMPLES_PER_CATEGORY)
                    .map(|v| v.to_string())
                    .collect(),
            },
        );
    }

    let score = (100.0 * total_found as f64 / VERBS_FOR_FULL_SCORE).min(100.0);

    ActionVerbReport {
        score: score.round() as u32,
        total_found,
        by_category,
        feedback: verb_feedback(score, &weak_categories),
        weak_categories,
    }
}

fn verb_feedback(score: f64, weak: &[VerbCategory]) -> Vec<String> {
    let mut feedback = Vec::new();

    let headline = if score < 30.0 {
        "Your resume lacks strong action verbs. Start bullet points with powerful verbs like 'Led', 'Developed', 'Achieved'."
    } else if score < 60.0 {
        "Good use of some action verbs. Try to diversify with more leadership and achievement verbs."
    } else {
        "Excellent use of action verbs throughout your resume!"
    };
    feedback.push(headline.to_string());

    if weak.contains(&VerbCategory::Leadership) {
        feedback.push("Add leadership verbs: Led, Managed, Mentored, Coordinated".to_string());
    }
    if weak.contains(&VerbCategory::Achievement) {
        feedback.push("Highlight achievements: Achieved, Delivered, Exceeded, Accomplished".to_string());
    }
    if weak.contains(&VerbCategory::Technical) {
        feedback.push("Include technical verbs: Implemented, Developed, Engineered, Deployed".to_string());
    }

    feedback
}
