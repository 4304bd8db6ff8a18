//! Service layer for somm-pair
//!
//! - `orchestrator` - batched recommendation fan-out with fallback
//! - `pairing_client` - pairing vendor HTTP client
//! - `llm_client` - LLM collaborator (translation, menu extraction)
//! - `menu_extractor` - scanned-menu to structured menu
//! - `mock_generator` - fallback recommendation synthesis

pub mod llm_client;
pub mod menu_extractor;
pub mod mock_generator;
pub mod orchestrator;
pub mod pairing_client;

pub use llm_client::LlmClient;
pub use menu_extractor::MenuExtractor;
pub use orchestrator::RecommendationOrchestrator;
pub use pairing_client::PairingClient;
