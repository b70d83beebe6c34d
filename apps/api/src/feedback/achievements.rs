//! Quantified achievements: numbers, percentages and money found in resume text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const METRICS_FOR_FULL_SCORE: f64 = 5.0;
const MAX_REPORTED: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Percentage,
    Monetary,
    Users,
    Projects,
    Multiplier,
    Time,
    Ranking,
    TeamSize,
}

static METRIC_PATTERNS: LazyLock<Vec<(Regex, MetricKind)>> = LazyLock::new(|| {
    [
        (r"(\d+)\s*%", MetricKind::Percentage),
        (r"\$\s*(\d+[\d,]*)", MetricKind::Monetary),
        (r"(\d+[\d,]*)\s*(users?|customers?|clients?|visitors?)", MetricKind::Users),
        (r"(\d+[\d,]*)\s*(projects?|applications?|features?)", MetricKind::Projects),
        (r"(\d+)x\s*", MetricKind::Multiplier),
        (r"(\d+)\s*(hours?|days?|weeks?|months?)", MetricKind::Time),
        (r"top\s*(\d+)", MetricKind::Ranking),
        (r"(\d+)\s*(team|members?|people)", MetricKind::TeamSize),
    ]
    .into_iter()
    .map(|(p, kind)| (Regex::new(&format!("(?i){p}")).expect("metric regex"), kind))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementReport {
    pub score: u32,
    pub total_found: usize,
    pub metrics: Vec<Metric>,
    pub feedback: Vec<String>,
}

/// Counts every occurrence of every metric pattern; one number can satisfy several kinds.
pub fn analyze_achievements(text: &str) -> AchievementReport {
    let found: Vec<Metric> = METRIC_PATTERNS
        .iter()
        .flat_map(|(re, kind)| {
            re.captures_iter(text).filter_map(move |caps| {
                caps.get(1).map(|m| Metric {
                    kind: *kind,
                    value: m.as_str().to_string(),
                })
            })
        })
        .collect();

    let total_found = found.len();
    let score = (100.0 * total_found as f64 / METRICS_FOR_FULL_SCORE).min(100.0);

    AchievementReport {
        score: score.round() as u32,
        total_found,
        metrics: found.into_iter().take(MAX_REPORTED).collect(),
        feedback: achievement_feedback(total_found),
    }
}

fn achievement_feedback(count: usize) -> Vec<String> {
    let lines: &[&str] = match count {
        0 => &[
            "No quantified achievements found! Add numbers to demonstrate impact.",
            "Examples: 'Increased performance by 40%', 'Led team of 5', 'Reduced costs by $10K'",
        ],
        1 | 2 => &[
            "Some metrics found. Add more numbers to strengthen impact.",
            "Try to include at least one metric per job experience.",
        ],
        _ => &["Good use of quantified achievements!"],
    };
    lines.iter().map(|s| s.to_string()).collect()
}
