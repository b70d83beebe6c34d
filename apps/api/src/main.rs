mod analysis;
mod config;
mod documents;
mod errors;
mod feedback;
mod market;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::{ResourceCatalog, RoleCatalog};
use crate::config::Config;
use crate::market::MarketCorpus;
use crate::routes::build_router;
use crate::skills::{SkillExtractor, SkillTaxonomy};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Skill taxonomy + extractor (rule-based NLP by default)
    let taxonomy = Arc::new(SkillTaxonomy::default());
    info!("Skill taxonomy loaded ({} terms)", taxonomy.len());
    for (category, terms) in taxonomy.categories_of() {
        debug!(category = ?category, terms = terms.len(), "Taxonomy category");
    }
    let extractor = Arc::new(SkillExtractor::new(taxonomy.clone()));

    // Catalogs: a missing or malformed file degrades to an empty catalog
    let resources = Arc::new(ResourceCatalog::load(&config.resources_catalog_path));
    let roles = Arc::new(RoleCatalog::load(&config.roles_catalog_path));

    // Built-in mock market corpus
    let market = Arc::new(MarketCorpus::builtin(
        &taxonomy,
        &config.analysis.default_domain,
    ));
    info!(
        "Market corpus ready: {} domains (default: {})",
        market.domain_names().len(),
        config.analysis.default_domain
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        extractor,
        resources,
        roles,
        market,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the dashboard host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
