use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::analysis::AnalysisSettings;

const DEFAULT_ROLES_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/internship_roles.json");
const DEFAULT_RESOURCES_CATALOG: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/learning_resources.json");

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed numeric value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub roles_catalog_path: PathBuf,
    pub resources_catalog_path: PathBuf,
    pub analysis: AnalysisSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = AnalysisSettings::default();

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            roles_catalog_path: path_env("ROLES_CATALOG_PATH", DEFAULT_ROLES_CATALOG),
            resources_catalog_path: path_env("RESOURCES_CATALOG_PATH", DEFAULT_RESOURCES_CATALOG),
            analysis: AnalysisSettings {
                missing_skills_top_n: parse_env("MISSING_SKILLS_TOP_N", defaults.missing_skills_top_n)?,
                roadmap_max_skills: parse_env("ROADMAP_MAX_SKILLS", defaults.roadmap_max_skills)?,
                roadmap_max_resources: parse_env(
                    "ROADMAP_MAX_RESOURCES",
                    defaults.roadmap_max_resources,
                )?,
                fit_resources_per_skill: parse_env(
                    "FIT_RESOURCES_PER_SKILL",
                    defaults.fit_resources_per_skill,
                )?,
                default_max_roles: parse_env("DEFAULT_MAX_ROLES", defaults.default_max_roles)?,
                default_domain: std::env::var("DEFAULT_DOMAIN").unwrap_or(defaults.default_domain),
            },
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
