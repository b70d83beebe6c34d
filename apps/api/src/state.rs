use std::sync::Arc;

use crate::analysis::{ResourceCatalog, RoleCatalog};
use crate::config::Config;
use crate::market::MarketCorpus;
use crate::skills::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything behind the `Arc`s is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: Arc<SkillExtractor>,
    /// Learning resources keyed by skill; empty when the catalog file is absent.
    pub resources: Arc<ResourceCatalog>,
    pub roles: Arc<RoleCatalog>,
    /// Built-in mock postings used when a gap request carries no job descriptions.
    pub market: Arc<MarketCorpus>,
}
