//! Built-in mock job-market corpus, one posting set per target domain.
//!
//! Stands in for real market ingestion. Each domain holds five representative
//! postings repeated 20 times, so demand counts come out in multiples of 20.

use std::collections::BTreeMap;

use crate::skills::{CategorizedSkills, SkillTaxonomy};

const POSTING_REPEAT: usize = 20;

const DOMAINS: &[(&str, &[&[&str]])] = &[
    (
        "Frontend Developer",
        &[
            &["React", "JavaScript", "CSS", "HTML", "TypeScript", "Tailwind", "Next.js", "Redux", "Git"],
            &["Vue", "JavaScript", "HTML", "CSS", "Sass", "Webpack"],
            &["React", "TypeScript", "MaterialUI", "Jest", "GraphQL"],
            &["Angular", "TypeScript", "RxJS", "HTML", "SCSS"],
            &["JavaScript", "React", "Node.js", "CSS", "Figma"],
        ],
    ),
    (
        "Backend Developer",
        &[
            &["Python", "Django", "SQL", "PostgreSQL", "Docker", "AWS", "Git", "Redis"],
            &["Node.js", "Express", "MongoDB", "JavaScript", "TypeScript", "REST API"],
            &["Java", "Spring Boot", "MySQL", "Microservices", "Kafka"],
            &["Go", "PostgreSQL", "Docker", "Kubernetes", "gRPC"],
            &["Python", "Flask", "SQLAlchemy", "Celery", "RabbitMQ"],
        ],
    ),
    (
        "Data Analyst",
        &[
            &["Python", "Pandas", "NumPy", "SQL", "Tableau", "Excel", "Statistics"],
            &["R", "SQL", "PowerBI", "Data Visualization", "Excel"],
            &["Python", "SQL", "Machine Learning", "Scikit-Learn", "Jupyter"],
            &["Excel", "VBA", "SQL", "Reporting", "Google Sheets"],
            &["Python", "Spark", "Hadoop", "SQL", "AWS"],
        ],
    ),
    (
        "Full Stack Developer",
        &[
            &["React", "Node.js", "Express", "MongoDB", "JavaScript", "TypeScript", "HTML", "CSS"],
            &["Vue", "Laravel", "PHP", "MySQL", "JavaScript", "Tailwind"],
            &["Next.js", "PostgreSQL", "Prisma", "TypeScript", "Tailwind", "Vercel"],
            &["Angular", "Java", "Spring Boot", "SQL", "TypeScript"],
            &["MERN Stack", "AWS", "Docker", "Git", "CI/CD"],
        ],
    ),
    (
        "Mobile Developer",
        &[
            &["Flutter", "Dart", "Firebase", "Android", "iOS"],
            &["React Native", "JavaScript", "TypeScript", "Redux", "Mobile UI"],
            &["Swift", "iOS", "Xcode", "CoreData", "SwiftUI"],
            &["Kotlin", "Android", "Jetpack Compose", "Java", "Gradle"],
            &["Flutter", "Bloc", "Clean Architecture", "Git", "App Store"],
        ],
    ),
];

/// Skill-annotated postings keyed by domain name.
#[derive(Debug, Clone)]
pub struct MarketCorpus {
    domains: BTreeMap<String, Vec<CategorizedSkills>>,
    default_domain: String,
}

impl MarketCorpus {
    /// The bundled mock corpus. Posting labels are filed into categories via the taxonomy.
    pub fn builtin(taxonomy: &SkillTaxonomy, default_domain: &str) -> Self {
        let domains = DOMAINS
            .iter()
            .map(|(name, postings)| {
                let annotated: Vec<CategorizedSkills> =
                    postings.iter().map(|skills| taxonomy.categorize(*skills)).collect();
                let repeated = std::iter::repeat(annotated)
                    .take(POSTING_REPEAT)
                    .flatten()
                    .collect();
                (name.to_string(), repeated)
            })
            .collect();

        Self {
            domains,
            default_domain: default_domain.to_string(),
        }
    }

    /// Postings for `domain`; unknown or absent domains fall back to the default domain.
    pub fn postings(&self, domain: Option<&str>) -> &[CategorizedSkills] {
        domain
            .and_then(|d| self.domains.get(d))
            .or_else(|| self.domains.get(&self.default_domain))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.keys().map(String::as_str).collect()
    }
}
