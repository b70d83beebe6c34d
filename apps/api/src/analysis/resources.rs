//! Learning Resource Catalog: curated resources keyed by skill.
//!
//! Loaded once from JSON at startup. Lookup is exact key, then substring
//! containment, then a synthesized web-search resource, so every skill
//! resolves to at least one entry.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillResources {
    /// Display name; falls back to the catalog key when absent.
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    entries: BTreeMap<String, SkillResources>,
}

impl ResourceCatalog {
    pub fn new(entries: BTreeMap<String, SkillResources>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, SkillResources> =
            serde_json::from_str(json).context("learning resources JSON is malformed")?;
        Ok(Self::new(entries))
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read learning resources at {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Loads the catalog, degrading to an empty one when the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => {
                info!("Loaded {} skill resources", catalog.len());
                catalog
            }
            Err(e) if !path.exists() => {
                warn!("Learning resources file not found, using empty catalog: {e:#}");
                Self::default()
            }
            Err(e) => {
                error!("Error parsing learning resources: {e:#}");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Up to `max` resources for `skill`.
    ///
    /// 1. exact match on the lookup key
    /// 2. first catalog key (sorted) that contains, or is contained in, the lookup key
    /// 3. a single generic search resource
    pub fn resources_for(&self, skill: &str, max: usize) -> Vec<LearningResource> {
        let key = resource_key(skill);

        if let Some(entry) = self.entries.get(&key) {
            return entry.resources.iter().take(max).cloned().collect();
        }

        if !key.is_empty() {
            let partial = self
                .entries
                .iter()
                .find(|(k, _)| !k.is_empty() && (key.contains(k.as_str()) || k.contains(&key)));
            if let Some((_, entry)) = partial {
                return entry.resources.iter().take(max).cloned().collect();
            }
        }

        vec![search_resource(skill)]
    }

    /// Display names of every skill with curated resources.
    pub fn available_skills(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, entry)| entry.skill.clone().unwrap_or_else(|| key.clone()))
            .collect()
    }
}

/// Catalog key form: lower-cased, trimmed, ".js" and "." removed.
pub fn resource_key(skill: &str) -> String {
    skill
        .trim()
        .to_lowercase()
        .replace(".js", "")
        .replace('.', "")
}

fn search_resource(skill: &str) -> LearningResource {
    LearningResource {
        title: format!("Search for {skill} tutorials"),
        url: format!(
            "https://www.google.com/search?q={}+tutorial",
            skill.replace(' ', "+")
        ),
        platform: Some("Google".to_string()),
        difficulty: Some("Varies".to_string()),
        duration: Some("Self-paced".to_string()),
        resource_type: Some("search".to_string()),
    }
}

/// Rough total study time from durations of the form "<n> hours".
pub fn estimate_learning_time(resources: &[LearningResource]) -> String {
    let total_hours: f64 = resources
        .iter()
        .filter_map(|r| r.duration.as_deref())
        .filter(|d| d.to_lowercase().contains("hour"))
        .filter_map(|d| d.split_whitespace().next()?.parse::<f64>().ok())
        .sum();

    let hours = total_hours as u32;
    if total_hours == 0.0 {
        "Self-paced".to_string()
    } else if total_hours < 5.0 {
        format!("~{hours} hours")
    } else if total_hours < 20.0 {
        format!("~{hours} hours (1-2 weeks)")
    } else {
        format!("~{hours} hours (2-4 weeks)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"{
        "python": {
            "skill": "Python",
            "resources": [
                {"title": "Python Tutorial", "url": "https://docs.python.org/3/tutorial/", "duration": "6 hours"},
                {"title": "Real Python", "url": "https://realpython.com/", "duration": "10 hours"},
                {"title": "Automate the Boring Stuff", "url": "https://automatetheboringstuff.com/"}
            ]
        },
        "react": {
            "resources": [
                {"title": "React Docs", "url": "https://react.dev/", "type": "documentation"}
            ]
        },
        "sql": {
            "skill": "SQL",
            "resources": [
                {"title": "SQLZoo", "url": "https://sqlzoo.net/", "duration": "3 hours"}
            ]
        }
    }"#;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::from_json(CATALOG_JSON).unwrap()
    }

    #[test]
    fn test_resource_key_strips_js_and_dots() {
        assert_eq!(resource_key(" React.js "), "react");
        assert_eq!(resource_key("Node.js"), "node");
        assert_eq!(resource_key("ASP.NET"), "aspnet");
    }

    #[test]
    fn test_exact_match_caps_resources() {
        let resources = catalog().resources_for("Python", 2);
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title, "Python Tutorial");
    }

    #[test]
    fn test_exact_match_after_key_normalization() {
        let resources = catalog().resources_for("React.js", 3);
        assert_eq!(resources[0].title, "React Docs");
        assert_eq!(resources[0].resource_type.as_deref(), Some("documentation"));
    }

    #[test]
    fn test_substring_fallback() {
        // "postgresql" contains "sql"
        let resources = catalog().resources_for("PostgreSQL", 3);
        assert_eq!(resources[0].title, "SQLZoo");
        // "react" is contained in "react native"
        let resources = catalog().resources_for("React Native", 3);
        assert_eq!(resources[0].title, "React Docs");
    }

    #[test]
    fn test_generic_search_fallback() {
        let resources = catalog().resources_for("Spring Boot", 3);
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].title, "Search for Spring Boot tutorials");
        assert_eq!(
            resources[0].url,
            "https://www.google.com/search?q=Spring+Boot+tutorial"
        );
        assert_eq!(resources[0].resource_type.as_deref(), Some("search"));
    }

    #[test]
    fn test_empty_skill_skips_substring_tier() {
        let resources = catalog().resources_for("", 3);
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].platform.as_deref(), Some("Google"));
    }

    #[test]
    fn test_empty_catalog_always_synthesizes() {
        let resources = ResourceCatalog::default().resources_for("Rust", 3);
        assert_eq!(resources[0].title, "Search for Rust tutorials");
    }

    #[test]
    fn test_available_skills_prefers_display_name() {
        assert_eq!(catalog().available_skills(), vec!["Python", "react", "SQL"]);
    }

    #[test]
    fn test_estimate_learning_time_bands() {
        let catalog = catalog();
        assert_eq!(estimate_learning_time(&[]), "Self-paced");
        assert_eq!(
            estimate_learning_time(&catalog.resources_for("sql", 3)),
            "~3 hours"
        );
        assert_eq!(
            estimate_learning_time(&catalog.resources_for("python", 3)),
            "~16 hours (1-2 weeks)"
        );
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        let catalog = ResourceCatalog::load(file.path());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ResourceCatalog::load(&dir.path().join("absent.json"));
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let catalog = ResourceCatalog::load(file.path());
        assert_eq!(catalog.len(), 0);
        assert!(ResourceCatalog::try_load(file.path()).is_err());
    }
}
