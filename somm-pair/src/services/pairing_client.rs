//! Pairing vendor API client
//!
//! One HTTP POST per dish against the vendor's dish-pairings
//! endpoint. Calls carry a fixed 20 second timeout; a timeout is
//! reported as a network error and handled exactly like any other
//! per-dish failure by the orchestrator.

use crate::types::{PairingError, PairingResponse, PairingVendor};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Pairing vendor API client
pub struct PairingClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PairingClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, PairingError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PairingError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl PairingVendor for PairingClient {
    async fn dish_pairings(&self, dish: &str) -> Result<PairingResponse, PairingError> {
        tracing::debug!(dish = %dish, "Querying pairing vendor");

        let response = self
            .http_client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .json(&json!({ "query": dish }))
            .send()
            .await
            .map_err(|e| PairingError::NetworkError(e.to_string()))?;

        let status = response.status();

        if status == 401 {
            return Err(PairingError::InvalidApiKey);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PairingError::ApiError(status.as_u16(), error_text));
        }

        let pairing_response: PairingResponse = response
            .json()
            .await
            .map_err(|e| PairingError::ParseError(e.to_string()))?;

        tracing::debug!(
            dish = %dish,
            extracted_dish = %pairing_response.tech_info.extracted_dish,
            pairings = pairing_response.pairings.len(),
            "Pairing vendor lookup successful"
        );

        Ok(pairing_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        let client = PairingClient::new(
            "https://vendor.example/dish-pairings".to_string(),
            "test_key".to_string(),
        );
        assert!(client.is_ok());
    }
}
