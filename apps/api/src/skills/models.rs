//! Categorized skill records shared by every analyzer.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::skills::normalize::normalize_skill;

/// The five fixed taxonomy categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Tools,
    Concepts,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Tools,
        SkillCategory::Concepts,
    ];
}

/// Skills found in one document, grouped by category.
///
/// Every category is always present (possibly empty). Missing keys in incoming
/// JSON deserialize as empty lists, since posting payloads often omit a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub concepts: Vec<String>,
}

impl CategorizedSkills {
    /// Builds a record from per-category sets; each category comes out sorted.
    pub fn from_sets(sets: [(SkillCategory, BTreeSet<String>); 5]) -> Self {
        let mut skills = CategorizedSkills::default();
        for (category, set) in sets {
            *skills.category_mut(category) = set.into_iter().collect();
        }
        skills
    }

    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Concepts => &self.concepts,
        }
    }

    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Frameworks => &mut self.frameworks,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Concepts => &mut self.concepts,
        }
    }

    /// All labels in category order, duplicates included.
    pub fn flatten(&self) -> Vec<&str> {
        SkillCategory::ALL
            .iter()
            .flat_map(|c| self.category(*c).iter().map(String::as_str))
            .collect()
    }

    pub fn total(&self) -> usize {
        SkillCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Normalized, de-duplicated labels in first-occurrence order.
    pub fn normalized(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.flatten()
            .into_iter()
            .map(normalize_skill)
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect()
    }

    pub fn normalized_set(&self) -> HashSet<String> {
        self.normalized().into_iter().collect()
    }
}
