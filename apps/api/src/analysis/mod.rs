// Market readiness, job fit and role recommendation.
// Every analyzer is a pure function over immutable catalogs; HTTP lives in handlers.

pub mod gap;
pub mod handlers;
pub mod job_fit;
pub mod resources;
pub mod roles;

pub use resources::ResourceCatalog;
pub use roles::RoleCatalog;

/// Tunable caps shared by the analyzers, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub missing_skills_top_n: usize,
    pub roadmap_max_skills: usize,
    pub roadmap_max_resources: usize,
    pub fit_resources_per_skill: usize,
    pub default_max_roles: usize,
    pub default_domain: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            missing_skills_top_n: 10,
            roadmap_max_skills: 10,
            roadmap_max_resources: 3,
            fit_resources_per_skill: 2,
            default_max_roles: 5,
            default_domain: "Frontend Developer".to_string(),
        }
    }
}
