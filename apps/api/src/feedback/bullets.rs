//! Bullet-point structure scoring.
//!
//! Each of the first ten bullets starts at 100:
//! -20 when it does not open with an action verb, -20 under 5 words,
//! -10 over 25 words, +10 when it carries a number. A bullet scoring
//! 70 or more is "good"; the section score is the share of good bullets.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::feedback::action_verbs::is_action_verb;

const ANALYZED_BULLETS: usize = 10;
const FALLBACK_SENTENCES: usize = 15;
const MIN_WORDS: usize = 5;
const MAX_WORDS: usize = 25;
const GOOD_BULLET: i32 = 70;
const PREVIEW_CHARS: usize = 100;

const TOO_SHORT: &str = "Too short";
const TOO_LONG: &str = "Too long";
const NO_ACTION_VERB: &str = "Doesn't start with action verb";

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:[•▪◦‣]|(?:^|[ \t])[-*][ \t])[ \t]*(.+)").expect("bullet regex")
});

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][^.!?]*[.!?]").expect("sentence regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletQuality {
    pub text: String,
    pub score: u32,
    pub issues: Vec<String>,
    pub has_metrics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletReport {
    pub overall_score: u32,
    pub total_bullets: usize,
    pub quality: Vec<BulletQuality>,
    pub feedback: Vec<String>,
}

/// Bullet-marked lines, or capitalized sentences of five or more words when none are marked.
pub fn find_bullets(text: &str) -> Vec<String> {
    let marked: Vec<String> = BULLET_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if !marked.is_empty() {
        return marked;
    }

    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| s.split_whitespace().count() >= MIN_WORDS)
        .take(FALLBACK_SENTENCES)
        .collect()
}

pub fn score_bullet(bullet: &str) -> BulletQuality {
    let mut issues = Vec::new();
    let mut score: i32 = 100;

    let word_count = bullet.split_whitespace().count();
    if word_count < MIN_WORDS {
        issues.push(TOO_SHORT.to_string());
        score -= 20;
    } else if word_count > MAX_WORDS {
        issues.push(TOO_LONG.to_string());
        score -= 10;
    }

    let opens_with_verb = bullet
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .is_some_and(is_action_verb);
    if !opens_with_verb {
        issues.push(NO_ACTION_VERB.to_string());
        score -= 20;
    }

    let has_metrics = bullet.chars().any(|c| c.is_ascii_digit());
    if has_metrics {
        score += 10;
    }

    BulletQuality {
        text: preview(bullet),
        score: score.clamp(0, 100) as u32,
        issues,
        has_metrics,
    }
}

pub fn analyze_bullets(text: &str) -> BulletReport {
    let bullets = find_bullets(text);
    let quality: Vec<BulletQuality> = bullets
        .iter()
        .take(ANALYZED_BULLETS)
        .map(|b| score_bullet(b))
        .collect();

    let good = quality
        .iter()
        .filter(|q| q.score as i32 >= GOOD_BULLET)
        .count();
    let overall_score = (100.0 * good as f64 / quality.len().max(1) as f64).round() as u32;

    BulletReport {
        overall_score,
        total_bullets: bullets.len(),
        feedback: bullet_feedback(overall_score, &quality),
        quality,
    }
}

fn preview(bullet: &str) -> String {
    if bullet.chars().count() > PREVIEW_CHARS {
        let head: String = bullet.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        bullet.to_string()
    }
}

fn bullet_feedback(score: u32, quality: &[BulletQuality]) -> Vec<String> {
    let mut feedback = vec![match score {
        s if s >= 70 => "Your bullet points are well-structured!",
        s if s >= 50 => "Bullet points are decent but could be improved.",
        _ => "Bullet points need significant improvement.",
    }
    .to_string()];

    let mut issue_counts: HashMap<&str, usize> = HashMap::new();
    for issue in quality.iter().flat_map(|q| q.issues.iter()) {
        *issue_counts.entry(issue.as_str()).or_default() += 1;
    }

    if issue_counts.get(NO_ACTION_VERB).copied().unwrap_or(0) > 2 {
        feedback.push("Start each bullet with a strong action verb (Developed, Led, Created)".to_string());
    }
    if issue_counts.get(TOO_SHORT).copied().unwrap_or(0) > 2 {
        feedback.push("Expand short bullets with more context and results".to_string());
    }

    let with_metrics = quality.iter().filter(|q| q.has_metrics).count();
    if (with_metrics as f64) < quality.len() as f64 / 2.0 {
        feedback.push("Add more quantifiable results (numbers, percentages, metrics)".to_string());
    }

    feedback
}
