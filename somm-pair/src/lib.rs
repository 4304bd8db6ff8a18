//! somm-pair library interface
//!
//! Wine recommendation microservice: accepts dish names, translates
//! them through an LLM collaborator, fans out to the pairing vendor
//! in bounded concurrent batches, and degrades to mock data per dish
//! when a call fails. Also scans uploaded menus into structured dish
//! lists via the same LLM collaborator.

pub mod api;
pub mod error;
pub mod services;
pub mod types;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use somm_common::config::PairConfig;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{LlmClient, MenuExtractor, PairingClient, RecommendationOrchestrator};
use crate::types::{DishTranslator, PairingVendor};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Recommendation orchestrator with injected collaborators
    pub orchestrator: Arc<RecommendationOrchestrator>,
    /// Menu extraction service; absent without an LLM credential
    pub menu_extractor: Option<Arc<MenuExtractor>>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        orchestrator: Arc<RecommendationOrchestrator>,
        menu_extractor: Option<Arc<MenuExtractor>>,
    ) -> Self {
        Self {
            orchestrator,
            menu_extractor,
            startup_time: Utc::now(),
        }
    }

    /// Wire up collaborator clients from configuration
    ///
    /// Missing credentials are not errors: the orchestrator runs
    /// degraded (pass-through translation, mock pairings) and menu
    /// scanning is disabled.
    pub fn from_config(config: &PairConfig) -> anyhow::Result<Self> {
        let llm_client = match &config.llm_api_key {
            Some(key) => Some(Arc::new(LlmClient::new(key.clone())?)),
            None => None,
        };

        let translator: Option<Arc<dyn DishTranslator>> = llm_client
            .as_ref()
            .map(|client| Arc::clone(client) as Arc<dyn DishTranslator>);

        let vendor: Option<Arc<dyn PairingVendor>> = match &config.pairing_api_key {
            Some(key) => Some(Arc::new(PairingClient::new(
                config.pairing_api_url.clone(),
                key.clone(),
            )?)),
            None => None,
        };

        let orchestrator = Arc::new(RecommendationOrchestrator::new(
            translator,
            vendor,
            config.batch_size,
        ));

        let menu_extractor = llm_client.map(|client| Arc::new(MenuExtractor::new(client)));

        Ok(Self::new(orchestrator, menu_extractor))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::recommend_routes())
        .merge(api::menu_routes())
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
