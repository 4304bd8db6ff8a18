//! Collaborator traits and vendor wire types
//!
//! The orchestrator talks to its two external collaborators through
//! trait objects so that tests can substitute fakes and run with zero
//! network. Vendor payloads are deserialized into strict types at the
//! boundary; a shape mismatch is an error (which triggers the mock
//! fallback), never a partially-populated result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use somm_common::api::WineColor;
use thiserror::Error;

/// Pairing vendor client errors
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid API key")]
    InvalidApiKey,
}

/// LLM collaborator errors (translation + menu extraction)
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Empty completion")]
    EmptyCompletion,

    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Pairing vendor success payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingResponse {
    pub tech_info: TechInfo,
    pub pairings: Vec<VendorPairing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechInfo {
    pub extracted_dish: String,
    pub all_results: Vec<VendorMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorMatch {
    #[serde(rename = "match")]
    pub matched: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorPairing {
    pub wine_recommendation: String,
    pub relevance: f64,
    #[serde(rename = "type")]
    pub wine_type: String,
    pub country: String,
    pub color: WineColor,
}

/// Wine-to-dish pairing vendor
///
/// One call per dish; the orchestrator owns batching and fallback.
#[async_trait]
pub trait PairingVendor: Send + Sync {
    async fn dish_pairings(&self, dish: &str) -> Result<PairingResponse, PairingError>;
}

/// Dish-name translation collaborator
///
/// Takes all dish names in one call and returns the English
/// equivalents in input order. Callers must treat a count mismatch as
/// a failed translation.
#[async_trait]
pub trait DishTranslator: Send + Sync {
    async fn translate(&self, dishes: &[String]) -> Result<Vec<String>, LlmError>;
}
