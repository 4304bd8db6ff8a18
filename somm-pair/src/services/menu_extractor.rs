//! Scanned-menu extraction
//!
//! Sends an uploaded menu (image or PDF) to the LLM collaborator and
//! parses the returned JSON into a structured menu. The model is
//! asked for a fixed template; fenced code blocks around the JSON are
//! tolerated and stripped before parsing.

use crate::services::llm_client::LlmClient;
use crate::types::LlmError;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

const MENU_PROMPT: &str = "This is a restaurant menu.\n\
    Return only a JSON object with the name of the restaurant (if present in the image or PDF, else \"Restaurant\") and the different categories of dishes.\n\
    Don't use full uppercase. Only capital letter. If no price is available, write \"null\". Try to narrow down the dish names to common dishes and don't mention irrelevant ingredients in the dish name.\n\
    Template:\n\
    {\n\
    \"restaurant\": \"<restaurant_name>\",\n\
    \"categories\": {\n\
      \"<category_name_1>\": [\n\
        {\n\
          \"name\": \"<dish_name_1>\",\n\
          \"price\": <price_1>\n\
        }\n\
      ]\n\
    }\n\
    }\n\
    Limit the categories to \"Starters\", \"Main dishes\", \"Desserts\".";

/// One dish on a scanned menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDish {
    pub name: String,
    pub price: Option<f64>,
}

/// Structured menu extracted from an upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuExtraction {
    pub restaurant: String,
    pub categories: BTreeMap<String, Vec<MenuDish>>,
}

/// Menu extraction service
pub struct MenuExtractor {
    llm: Arc<LlmClient>,
}

/// Accepted upload content types: any image, or PDF
pub fn is_supported_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/") || media_type == "application/pdf"
}

impl MenuExtractor {
    pub fn new(llm: Arc<LlmClient>) -> Self {
        Self { llm }
    }

    /// Extract a structured menu from raw upload bytes
    pub async fn extract(
        &self,
        media_type: &str,
        data: &[u8],
    ) -> Result<MenuExtraction, LlmError> {
        let base64_data = base64::engine::general_purpose::STANDARD.encode(data);

        tracing::debug!(
            media_type = %media_type,
            bytes = data.len(),
            "Sending menu to LLM for extraction"
        );

        let text = self
            .llm
            .complete_with_attachment(MENU_PROMPT, media_type, &base64_data)
            .await?;

        parse_menu_json(&text)
    }
}

/// Parse the model's completion into a `MenuExtraction`
///
/// Tolerates ```json fences around the payload.
pub fn parse_menu_json(text: &str) -> Result<MenuExtraction, LlmError> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|e| LlmError::ParseError(e.to_string()))
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}
