//! Static technical-skill taxonomy: category → canonical lowercase terms.
//!
//! Built once at startup and shared read-only through `AppState`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::skills::models::{CategorizedSkills, SkillCategory};
use crate::skills::normalize::{normalize_skill, title_case};

const LANGUAGES: &[&str] = &[
    "python", "javascript", "typescript", "java", "c++", "c#", "php", "ruby", "go", "rust",
    "swift", "kotlin", "scala", "r", "sql", "html", "html5", "css", "css3", "bash", "shell",
    "perl", "dart", "elixir", "clojure",
];

const FRAMEWORKS: &[&str] = &[
    "react", "react.js", "reactjs", "vue", "vue.js", "vuejs", "angular", "next.js", "nextjs",
    "nuxt", "svelte", "django", "flask", "fastapi", "express", "express.js", "expressjs",
    "nestjs", "spring", "spring boot", "laravel", "rails", "ruby on rails", "asp.net", ".net",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "react native",
    "flutter", "ionic", "xamarin", "tailwind", "tailwind css", "bootstrap", "material-ui",
    "mui", "chakra ui", "redux", "mobx", "zustand", "graphql", "apollo", "prisma", "typeorm",
    "sequelize", "mongoose", "hibernate",
];

const DATABASES: &[&str] = &[
    "postgresql", "postgres", "mysql", "mongodb", "redis", "elasticsearch", "cassandra",
    "dynamodb", "sqlite", "oracle", "sql server", "mariadb", "neo4j", "couchdb", "firebase",
    "supabase",
];

const TOOLS: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "docker", "kubernetes", "k8s", "jenkins",
    "travis ci", "circle ci", "github actions", "aws", "azure", "gcp", "google cloud", "heroku",
    "vercel", "netlify", "terraform", "ansible", "puppet", "chef", "vagrant", "nginx", "apache",
    "webpack", "vite", "rollup", "babel", "eslint", "prettier", "jest", "mocha", "chai",
    "cypress", "selenium", "postman", "insomnia", "figma", "adobe xd", "sketch", "photoshop",
    "illustrator", "jira", "confluence", "slack", "trello", "asana", "notion", "vs code",
    "intellij", "pycharm", "jupyter", "tableau", "power bi", "grafana", "prometheus", "elk",
    "kafka", "rabbitmq", "celery", "airflow", "spark", "hadoop", "mlflow",
];

const CONCEPTS: &[&str] = &[
    "restful api", "rest api", "api", "microservices", "serverless", "ci/cd", "devops", "agile",
    "scrum", "tdd", "bdd", "oop", "functional programming", "machine learning", "deep learning",
    "nlp", "computer vision", "data science", "data analysis", "data visualization", "etl",
    "big data", "cloud computing", "responsive design", "mobile development", "web development",
    "full stack", "frontend", "backend", "ui/ux", "accessibility", "seo",
    "performance optimization", "security", "authentication", "authorization", "jwt", "oauth",
    "solid principles", "design patterns", "algorithms", "data structures", "testing",
    "debugging",
];

/// Fixed mapping of category → ordered canonical terms.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: BTreeMap<SkillCategory, Vec<String>>,
    term_index: HashMap<String, SkillCategory>,
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new([
            (SkillCategory::Languages, LANGUAGES),
            (SkillCategory::Frameworks, FRAMEWORKS),
            (SkillCategory::Databases, DATABASES),
            (SkillCategory::Tools, TOOLS),
            (SkillCategory::Concepts, CONCEPTS),
        ])
    }
}

impl SkillTaxonomy {
    /// Terms are lower-cased and trimmed; a term listed twice keeps its first category.
    pub fn new<'a>(entries: impl IntoIterator<Item = (SkillCategory, &'a [&'a str])>) -> Self {
        let mut categories: BTreeMap<SkillCategory, Vec<String>> =
            SkillCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();
        let mut term_index = HashMap::new();

        for (category, terms) in entries {
            for term in terms {
                let term = term.trim().to_lowercase();
                if term.is_empty() || term_index.contains_key(&term) {
                    continue;
                }
                term_index.insert(term.clone(), category);
                categories.entry(category).or_default().push(term);
            }
        }

        Self {
            categories,
            term_index,
        }
    }

    /// Read-only view of every category and its terms.
    pub fn categories_of(&self) -> &BTreeMap<SkillCategory, Vec<String>> {
        &self.categories
    }

    pub fn terms(&self) -> impl Iterator<Item = (SkillCategory, &str)> {
        self.categories
            .iter()
            .flat_map(|(category, terms)| terms.iter().map(move |t| (*category, t.as_str())))
    }

    /// Category of an exact (lower-case) term.
    pub fn category_of(&self, term: &str) -> Option<SkillCategory> {
        self.term_index.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.term_index.len()
    }

    /// Places free-form labels into categories for display.
    ///
    /// Lookup tries the lower-cased label, then its normalized form; labels the
    /// taxonomy does not know are filed under `tools`.
    pub fn categorize<S: AsRef<str>>(&self, labels: &[S]) -> CategorizedSkills {
        let mut sets: BTreeMap<SkillCategory, BTreeSet<String>> = BTreeMap::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() {
                continue;
            }
            let lowered = label.to_lowercase();
            let category = self
                .category_of(&lowered)
                .or_else(|| self.category_of(&normalize_skill(label)))
                .unwrap_or(SkillCategory::Tools);
            sets.entry(category).or_default().insert(title_case(&lowered));
        }

        CategorizedSkills::from_sets(
            SkillCategory::ALL.map(|c| (c, sets.remove(&c).unwrap_or_default())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_has_all_categories() {
        let taxonomy = SkillTaxonomy::default();
        let categories = taxonomy.categories_of();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[&SkillCategory::Languages].len(), 25);
        assert_eq!(categories[&SkillCategory::Frameworks].len(), 51);
        assert_eq!(categories[&SkillCategory::Databases].len(), 16);
        assert_eq!(categories[&SkillCategory::Tools].len(), 65);
        assert_eq!(categories[&SkillCategory::Concepts].len(), 44);
        assert_eq!(taxonomy.len(), 201);
    }

    #[test]
    fn test_category_lookup() {
        let taxonomy = SkillTaxonomy::default();
        assert_eq!(taxonomy.category_of("rust"), Some(SkillCategory::Languages));
        assert_eq!(taxonomy.category_of("spring boot"), Some(SkillCategory::Frameworks));
        assert_eq!(taxonomy.category_of("ci/cd"), Some(SkillCategory::Concepts));
        assert_eq!(taxonomy.category_of("cobol"), None);
    }

    #[test]
    fn test_terms_keep_declaration_order() {
        let taxonomy = SkillTaxonomy::default();
        let first_languages: Vec<&str> = taxonomy
            .terms()
            .filter(|(c, _)| *c == SkillCategory::Languages)
            .map(|(_, t)| t)
            .take(3)
            .collect();
        assert_eq!(first_languages, vec!["python", "javascript", "typescript"]);
    }

    #[test]
    fn test_duplicate_terms_keep_first_category() {
        let taxonomy = SkillTaxonomy::new([
            (SkillCategory::Languages, &["Rust", "sql"][..]),
            (SkillCategory::Databases, &["SQL", "redis"][..]),
        ]);
        assert_eq!(taxonomy.category_of("sql"), Some(SkillCategory::Languages));
        assert_eq!(taxonomy.categories_of()[&SkillCategory::Databases], vec!["redis"]);
    }

    #[test]
    fn test_categorize_places_known_and_unknown_labels() {
        let taxonomy = SkillTaxonomy::default();
        let skills = taxonomy.categorize(&["React", "PostgreSQL", "Sass", "SQL", "REST API", "Node.js"]);
        assert_eq!(skills.frameworks, vec!["React"]);
        assert_eq!(skills.databases, vec!["Postgresql"]);
        assert_eq!(skills.languages, vec!["Sql"]);
        assert_eq!(skills.concepts, vec!["Rest Api"]);
        assert_eq!(skills.tools, vec!["Node.Js", "Sass"]);
    }
}
