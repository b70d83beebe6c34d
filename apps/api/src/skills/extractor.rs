//! Skill Extractor: scans free text against the taxonomy.
//!
//! Three detection passes, unioned per category:
//! 1. literal whole-token match of every taxonomy term
//! 2. named entities whose lower-cased surface form is a taxonomy term
//! 3. noun phrases whose lower-cased surface form is a taxonomy term
//!
//! Passes 2 and 3 rely on injected `EntityRecognizer` / `PhraseChunker`
//! capabilities; a failure there fails the whole extraction.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::debug;

use crate::skills::models::{CategorizedSkills, SkillCategory};
use crate::skills::nlp::{EntityRecognizer, NlpError, PhraseChunker, RuleBasedNlp};
use crate::skills::normalize::title_case;
use crate::skills::taxonomy::SkillTaxonomy;

/// Tokenizing is not injected separately: each `EntityRecognizer` and
/// `PhraseChunker` owns its own tokenizer, and the literal pass scans raw text.
pub struct SkillExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    entities: Arc<dyn EntityRecognizer>,
    phrases: Arc<dyn PhraseChunker>,
}

impl SkillExtractor {
    /// Extractor backed by the rule-based NLP layer.
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        let nlp = Arc::new(RuleBasedNlp);
        Self::with_nlp(taxonomy, nlp.clone(), nlp)
    }

    pub fn with_nlp(
        taxonomy: Arc<SkillTaxonomy>,
        entities: Arc<dyn EntityRecognizer>,
        phrases: Arc<dyn PhraseChunker>,
    ) -> Self {
        Self {
            taxonomy,
            entities,
            phrases,
        }
    }

    /// Extracts categorized skills from `text`.
    ///
    /// Empty or whitespace-only text yields all-empty categories without
    /// consulting the NLP layer. Labels are title-cased and sorted per category.
    pub fn extract(&self, text: &str) -> Result<CategorizedSkills, NlpError> {
        if text.trim().is_empty() {
            return Ok(CategorizedSkills::default());
        }

        let mut found: BTreeMap<SkillCategory, BTreeSet<String>> = BTreeMap::new();
        let lowered = text.to_lowercase();

        for (category, term) in self.taxonomy.terms() {
            if contains_whole_token(&lowered, term) {
                found.entry(category).or_default().insert(title_case(term));
            }
        }

        for entity in self.entities.entities(text)? {
            if !entity.label.may_name_skill() {
                continue;
            }
            self.add_if_term(&mut found, &entity.text);
        }

        for phrase in self.phrases.noun_phrases(text)? {
            self.add_if_term(&mut found, &phrase);
        }

        let skills = CategorizedSkills::from_sets(
            SkillCategory::ALL.map(|c| (c, found.remove(&c).unwrap_or_default())),
        );
        debug!(total = skills.total(), "skills extracted");
        Ok(skills)
    }

    fn add_if_term(&self, found: &mut BTreeMap<SkillCategory, BTreeSet<String>>, surface: &str) {
        let lowered = surface.trim().to_lowercase();
        if let Some(category) = self.taxonomy.category_of(&lowered) {
            found.entry(category).or_default().insert(title_case(&lowered));
        }
    }
}

/// True when `term` occurs in `haystack` with no word character touching
/// either end. Both arguments are expected lower-cased.
pub fn contains_whole_token(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
