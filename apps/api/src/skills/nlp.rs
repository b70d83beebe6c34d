//! Linguistic preprocessing capabilities used by the skill extractor.
//!
//! Extraction only needs three things from an NLP layer: tokens, named
//! entities and noun phrases. Each is a trait so a heavier tagger (or a cached
//! one) can replace `RuleBasedNlp` without touching extraction logic.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a linguistic collaborator.
#[derive(Debug, Error)]
pub enum NlpError {
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("entity recognition failed: {0}")]
    EntityRecognition(String),

    #[error("phrase chunking failed: {0}")]
    Chunking(String),
}

/// A token with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    Organization,
    Product,
    Location,
    Person,
    Other,
}

impl EntityLabel {
    /// Labels whose surface forms can name a technology.
    pub fn may_name_skill(&self) -> bool {
        matches!(
            self,
            EntityLabel::Organization | EntityLabel::Product | EntityLabel::Location
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, NlpError>;
}

pub trait EntityRecognizer: Send + Sync {
    fn entities(&self, text: &str) -> Result<Vec<Entity>, NlpError>;
}

pub trait PhraseChunker: Send + Sync {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>, NlpError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedNlp: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Characters that stay inside a token ("c++", "c#", "ci/cd", "node.js", "scikit-learn").
const INNER_TOKEN_CHARS: &[char] = &['+', '#', '.', '/', '-', '_'];

/// Trailing punctuation stripped from a token ("Python." → "Python").
const TRAILING_PUNCT: &[char] = &['.', '/', '-', '_'];

/// Characters that end a phrase outright.
const PHRASE_BREAKS: &[char] = &[
    ',', ';', ':', '(', ')', '[', ']', '{', '}', '!', '?', '"', '\n', '|', '•',
];

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "and", "or", "but", "nor", "with",
        "without", "in", "on", "at", "of", "for", "to", "from", "by", "as", "into", "onto",
        "over", "under", "via", "using", "about", "across", "through", "within", "between",
        "i", "we", "you", "he", "she", "they", "it", "our", "your", "their", "my", "its", "us",
        "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "do",
        "does", "did", "will", "would", "should", "can", "could", "may", "might", "must",
        "also", "such", "plus", "etc", "e.g", "i.e", "not", "no", "who", "which", "what",
    ]
    .into_iter()
    .collect()
});

/// Rule-based tokenizer, entity recognizer and phrase chunker.
///
/// Entities are maximal runs of capitalized tokens; noun phrases are maximal
/// runs of tokens between punctuation and stopwords.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedNlp;

impl Tokenizer for RuleBasedNlp {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, NlpError> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            let is_token_char = ch.is_alphanumeric() || INNER_TOKEN_CHARS.contains(&ch);
            match (is_token_char, start) {
                (true, None) => start = Some(idx),
                (false, Some(s)) => {
                    push_token(&mut tokens, text, s, idx);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            push_token(&mut tokens, text, s, text.len());
        }

        Ok(tokens)
    }
}

fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim_end_matches(TRAILING_PUNCT);
    // ".net" keeps its leading dot; a bare "-" or "/" is dropped.
    if trimmed.chars().any(char::is_alphanumeric) {
        tokens.push(Token {
            text: trimmed.to_string(),
            start,
            end: start + trimmed.len(),
        });
    }
}

fn is_capitalized(token: &str) -> bool {
    token
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase)
}

fn has_product_shape(token: &str) -> bool {
    token.chars().skip(1).any(char::is_uppercase) || token.chars().any(|c| c.is_ascii_digit())
}

impl EntityRecognizer for RuleBasedNlp {
    fn entities(&self, text: &str) -> Result<Vec<Entity>, NlpError> {
        let tokens = self
            .tokenize(text)
            .map_err(|e| NlpError::EntityRecognition(e.to_string()))?;

        let mut entities = Vec::new();
        let mut run: Vec<&Token> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let contiguous = run
                .last()
                .map(|prev| is_inline_gap(&text[prev.end..token.start]))
                .unwrap_or(true);
            let capitalized =
                is_capitalized(&token.text) && !STOPWORDS.contains(token.text.to_lowercase().as_str());

            if capitalized && contiguous {
                run.push(token);
            } else {
                flush_entity(&mut entities, &mut run, text);
                if capitalized {
                    run.push(token);
                }
            }

            if i + 1 == tokens.len() {
                flush_entity(&mut entities, &mut run, text);
            }
        }

        Ok(entities)
    }
}

/// Only spaces or tabs between two tokens keep an entity run going.
fn is_inline_gap(gap: &str) -> bool {
    gap.chars().all(|c| c == ' ' || c == '\t')
}

fn flush_entity(entities: &mut Vec<Entity>, run: &mut Vec<&Token>, text: &str) {
    if let (Some(first), Some(last)) = (run.first(), run.last()) {
        let surface = &text[first.start..last.end];
        let label = if run.iter().any(|t| has_product_shape(&t.text)) {
            EntityLabel::Product
        } else {
            EntityLabel::Organization
        };
        entities.push(Entity {
            text: surface.to_string(),
            label,
        });
    }
    run.clear();
}

impl PhraseChunker for RuleBasedNlp {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>, NlpError> {
        let tokens = self
            .tokenize(text)
            .map_err(|e| NlpError::Chunking(e.to_string()))?;

        let mut phrases = Vec::new();
        let mut run: Vec<&Token> = Vec::new();

        for token in &tokens {
            let breaks = run
                .last()
                .map(|prev| ends_phrase(&text[prev.end..token.start]))
                .unwrap_or(false);
            if breaks {
                flush_phrase(&mut phrases, &mut run, text);
            }

            if STOPWORDS.contains(token.text.to_lowercase().as_str()) {
                flush_phrase(&mut phrases, &mut run, text);
            } else {
                run.push(token);
            }
        }
        flush_phrase(&mut phrases, &mut run, text);

        Ok(phrases)
    }
}

/// A gap ends a phrase when it holds punctuation or a sentence-ending period.
fn ends_phrase(gap: &str) -> bool {
    gap.chars().any(|c| PHRASE_BREAKS.contains(&c) || c == '.')
}

fn flush_phrase(phrases: &mut Vec<String>, run: &mut Vec<&Token>, text: &str) {
    if let (Some(first), Some(last)) = (run.first(), run.last()) {
        phrases.push(text[first.start..last.end].to_string());
    }
    run.clear();
}
