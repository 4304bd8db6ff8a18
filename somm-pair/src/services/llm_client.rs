//! LLM collaborator client (translation + menu extraction)
//!
//! Thin HTTP wrapper over the model vendor's messages endpoint. The
//! model is an opaque text-in/text-out collaborator: this module owns
//! the prompts and response plumbing, while interpretation of the
//! returned text lives with the callers (the orchestrator for
//! translations, the menu extractor for scanned menus).

use crate::types::{DishTranslator, LlmError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-3-5-sonnet-20241022";
const MAX_TOKENS: u32 = 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// LLM messages API client
pub struct LlmClient {
    http_client: reqwest::Client,
    api_key: String,
}

/// Messages API response (only the fields we read)
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key,
        })
    }

    /// One-shot completion: send a single user message, return the
    /// first content block's text
    pub async fn complete(&self, content: Value) -> Result<String, LlmError> {
        let body = json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": content,
                }
            ],
        });

        let response = self
            .http_client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();

        if status == 401 {
            return Err(LlmError::InvalidApiKey);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError(status.as_u16(), error_text));
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        let text = messages_response
            .content
            .first()
            .map(|block| block.text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::EmptyCompletion);
        }

        Ok(text)
    }

    /// Send a text prompt together with one base64 attachment
    /// (image or PDF)
    pub async fn complete_with_attachment(
        &self,
        prompt: &str,
        media_type: &str,
        base64_data: &str,
    ) -> Result<String, LlmError> {
        let source_type = if media_type == "application/pdf" {
            "document"
        } else {
            "image"
        };

        let content = json!([
            { "type": "text", "text": prompt },
            {
                "type": source_type,
                "source": {
                    "type": "base64",
                    "media_type": media_type,
                    "data": base64_data,
                }
            }
        ]);

        self.complete(content).await
    }
}

/// Build the culinary-translator prompt for a dish list
pub fn translation_prompt(dishes: &[String]) -> String {
    format!(
        "You are a culinary translator. Translate each dish name to English following these rules:\n\
         \n\
         1. Use the most common English name for the dish\n\
         2. If no standard English translation exists, keep the original name\n\
         3. Use simple, recognizable terms (avoid fancy or technical language)\n\
         4. For regional dishes, use the most widely known English equivalent\n\
         5. Return ONLY the translated names, one per line, in the same order as input\n\
         6. Do not add explanations, descriptions, or additional text\n\
         \n\
         Examples:\n\
         Input: \"Coq au Vin\" -> Output: \"Chicken in Wine\"\n\
         Input: \"Sushi\" -> Output: \"Sushi\"\n\
         Input: \"Ratatouille\" -> Output: \"Ratatouille\"\n\
         \n\
         Dishes to translate:\n\
         {}\n\
         \n\
         Translations:",
        dishes.join("\n")
    )
}

/// Split a completion into translated dish names, dropping blanks
pub fn parse_translations(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl DishTranslator for LlmClient {
    async fn translate(&self, dishes: &[String]) -> Result<Vec<String>, LlmError> {
        let prompt = translation_prompt(dishes);
        let text = self.complete(Value::String(prompt)).await?;
        Ok(parse_translations(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_all_dishes_in_order() {
        let dishes = vec![
            "Coq au Vin".to_string(),
            "Boeuf Bourguignon".to_string(),
            "Tarte Tatin".to_string(),
        ];

        let prompt = translation_prompt(&dishes);
        assert!(prompt.contains("Coq au Vin\nBoeuf Bourguignon\nTarte Tatin"));
        assert!(prompt.contains("one per line"));
    }

    #[test]
    fn parse_translations_drops_blank_lines() {
        let text = "Chicken in Wine\n\n  Beef Stew  \n\n";
        let translations = parse_translations(text);
        assert_eq!(translations, vec!["Chicken in Wine", "Beef Stew"]);
    }

    #[test]
    fn parse_translations_of_empty_text_is_empty() {
        assert!(parse_translations("").is_empty());
        assert!(parse_translations("\n\n").is_empty());
    }

    #[test]
    fn messages_response_reads_first_block() {
        let json = r#"{"content": [{"type": "text", "text": "Sushi\nRamen"}]}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.content[0].text, "Sushi\nRamen");
    }

    #[test]
    fn client_creation_succeeds() {
        assert!(LlmClient::new("test_key".to_string()).is_ok());
    }
}
