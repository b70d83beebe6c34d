//! Frequency Aggregator: market demand counts of normalized skills across a corpus.

use std::collections::HashMap;

use crate::skills::models::CategorizedSkills;
use crate::skills::normalize::normalize_skill;

/// Normalized skill → number of occurrences across a corpus.
///
/// Counts are order-independent. Iteration follows first-occurrence order so
/// that downstream stable sorts break frequency ties deterministically.
#[derive(Debug, Clone, Default)]
pub struct SkillFrequency {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl SkillFrequency {
    /// Folds every document's skills into one frequency table.
    ///
    /// Each label is normalized before counting; a document contributes one
    /// count per label it lists.
    pub fn aggregate<'a, I>(corpus: I) -> Self
    where
        I: IntoIterator<Item = &'a CategorizedSkills>,
    {
        let mut frequency = SkillFrequency::default();
        for document in corpus {
            for label in document.flatten() {
                frequency.increment(&normalize_skill(label));
            }
        }
        frequency
    }

    fn increment(&mut self, skill: &str) {
        if skill.is_empty() {
            return;
        }
        match self.index.get(skill) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(skill.to_string(), self.entries.len());
                self.entries.push((skill.to_string(), 1));
            }
        }
    }

    pub fn get(&self, skill: &str) -> Option<u32> {
        self.index.get(skill).map(|&i| self.entries[i].1)
    }

    /// Distinct skills.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// `(skill, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(s, n)| (s.as_str(), *n))
    }

    #[cfg(test)]
    pub fn to_map(&self) -> HashMap<String, u32> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(languages: &[&str], tools: &[&str]) -> CategorizedSkills {
        CategorizedSkills {
            languages: languages.iter().map(|s| s.to_string()).collect(),
            tools: tools.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_corpus_yields_empty_table() {
        let frequency = SkillFrequency::aggregate(&Vec::<CategorizedSkills>::new());
        assert!(frequency.is_empty());
        assert_eq!(frequency.total_weight(), 0);
    }

    #[test]
    fn test_counts_normalized_labels() {
        let corpus = vec![
            doc(&["JavaScript", "Python"], &["Kubernetes"]),
            doc(&["javascript"], &["K8s", "Git"]),
        ];
        let frequency = SkillFrequency::aggregate(&corpus);
        assert_eq!(frequency.get("js"), Some(2));
        assert_eq!(frequency.get("k8s"), Some(2));
        assert_eq!(frequency.get("python"), Some(1));
        assert_eq!(frequency.get("git"), Some(1));
        assert_eq!(frequency.total_weight(), 6);
        assert_eq!(frequency.len(), 4);
    }

    #[test]
    fn test_iteration_follows_first_occurrence() {
        let corpus = vec![doc(&["Rust"], &["Docker"]), doc(&["Go", "Rust"], &[])];
        let frequency = SkillFrequency::aggregate(&corpus);
        let order: Vec<&str> = frequency.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec!["rust", "docker", "go"]);
    }

    #[test]
    fn test_aggregate_is_permutation_invariant() {
        let a = doc(&["Python", "SQL"], &["Git"]);
        let b = doc(&["Python"], &["Docker"]);
        let c = doc(&["SQL"], &["Docker", "Git"]);
        let forward = SkillFrequency::aggregate(&[a.clone(), b.clone(), c.clone()]);
        let backward = SkillFrequency::aggregate(&[c.clone(), a.clone(), b.clone()]);
        let shuffled = SkillFrequency::aggregate(&[b, c, a]);
        assert_eq!(forward.to_map(), backward.to_map());
        assert_eq!(forward.to_map(), shuffled.to_map());
    }

    #[test]
    fn test_blank_labels_are_ignored() {
        let frequency = SkillFrequency::aggregate(&[doc(&["", "  "], &["Git"])]);
        assert_eq!(frequency.len(), 1);
    }
}
