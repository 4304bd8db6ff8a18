//! Recommendation orchestrator
//!
//! Fans out one pairing-vendor call per dish in fixed-size concurrent
//! batches and degrades to mock data per dish on failure. Batches run
//! strictly sequentially; within a batch all calls run concurrently
//! and each settles independently. A failing call never cancels its
//! siblings and never reaches the caller: the corresponding slot gets
//! a fallback result instead.
//!
//! Output order is strictly positional on the input dish list,
//! regardless of network completion order: every per-dish future owns
//! its slot, and batch results are concatenated in input order.

use crate::services::mock_generator;
use crate::types::{DishTranslator, PairingResponse, PairingVendor};
use futures::future::join_all;
use somm_common::api::{
    DishMatch, RecommendationDetails, RecommendationResult, WinePairingCandidate,
};
use somm_common::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// UI-facing truncation of the vendor payload
const TOP_RESULTS: usize = 5;

/// Recommendation orchestrator
///
/// Collaborators are injected at construction; either may be absent,
/// in which case the orchestrator degrades (pass-through names, mock
/// pairings) rather than failing.
pub struct RecommendationOrchestrator {
    translator: Option<Arc<dyn DishTranslator>>,
    vendor: Option<Arc<dyn PairingVendor>>,
    batch_size: usize,
}

impl RecommendationOrchestrator {
    pub fn new(
        translator: Option<Arc<dyn DishTranslator>>,
        vendor: Option<Arc<dyn PairingVendor>>,
        batch_size: usize,
    ) -> Self {
        if vendor.is_none() {
            warn!("No pairing vendor configured, all dishes will use mock recommendations");
        }
        if translator.is_none() {
            debug!("No translator configured, dish names pass through untranslated");
        }

        Self {
            translator,
            vendor,
            batch_size: batch_size.max(1),
        }
    }

    /// Whether the orchestrator is running without a live pairing vendor
    pub fn is_degraded(&self) -> bool {
        self.vendor.is_none()
    }

    /// Produce one recommendation per input dish, in input order
    ///
    /// Fails only on invalid input; vendor and translator failures are
    /// absorbed per dish.
    pub async fn recommend(&self, dishes: &[String]) -> Result<Vec<RecommendationResult>> {
        if dishes.is_empty() {
            return Err(Error::InvalidInput(
                "At least one dish is required".to_string(),
            ));
        }

        let translated = self.translate_dishes(dishes).await;

        let mut results = Vec::with_capacity(dishes.len());
        let mut fallback_count = 0usize;

        for (batch_index, batch) in translated.chunks(self.batch_size).enumerate() {
            let base = batch_index * self.batch_size;

            debug!(
                batch = batch_index,
                dishes = batch.len(),
                "Dispatching pairing batch"
            );

            let batch_futures = batch.iter().enumerate().map(|(offset, translated_dish)| {
                let index = base + offset;
                let original_dish = &dishes[index];
                async move { self.pair_one_dish(original_dish, translated_dish).await }
            });

            for (result, fell_back) in join_all(batch_futures).await {
                if fell_back {
                    fallback_count += 1;
                }
                results.push(result);
            }
        }

        info!(
            dishes = dishes.len(),
            fallbacks = fallback_count,
            "Recommendation run complete"
        );

        Ok(results)
    }

    /// Translate all dish names in one collaborator call
    ///
    /// Any failure, and any response whose line count differs from
    /// the input count, falls back to the original names wholesale.
    /// Positionally zipping a short or long response would silently
    /// misalign dishes and translations, so it is never attempted.
    async fn translate_dishes(&self, dishes: &[String]) -> Vec<String> {
        let Some(translator) = &self.translator else {
            return dishes.to_vec();
        };

        match translator.translate(dishes).await {
            Ok(translations) if translations.len() == dishes.len() => translations,
            Ok(translations) => {
                warn!(
                    expected = dishes.len(),
                    received = translations.len(),
                    "Translation count mismatch, using original dish names"
                );
                dishes.to_vec()
            }
            Err(e) => {
                warn!(error = %e, "Translation failed, using original dish names");
                dishes.to_vec()
            }
        }
    }

    /// Resolve one dish to a result, success or fallback
    ///
    /// Returns the result plus whether the fallback path was taken.
    async fn pair_one_dish(
        &self,
        original_dish: &str,
        translated_dish: &str,
    ) -> (RecommendationResult, bool) {
        let Some(vendor) = &self.vendor else {
            return (mock_generator::generate_fallback(original_dish), true);
        };

        match vendor.dish_pairings(translated_dish).await {
            Ok(response) => (
                map_vendor_response(original_dish, translated_dish, response),
                false,
            ),
            Err(e) => {
                warn!(
                    dish = %original_dish,
                    translated = %translated_dish,
                    error = %e,
                    "Pairing vendor call failed, using mock recommendations"
                );
                (mock_generator::generate_fallback(original_dish), true)
            }
        }
    }
}

/// Map a vendor success payload onto the API result shape
///
/// Keeps at most the top 5 dish matches and top 5 wine pairings.
pub(crate) fn map_vendor_response(
    original_dish: &str,
    translated_dish: &str,
    response: PairingResponse,
) -> RecommendationResult {
    let top_dishes = response
        .tech_info
        .all_results
        .into_iter()
        .take(TOP_RESULTS)
        .map(|result| DishMatch {
            matched: result.matched,
            score: result.score,
        })
        .collect();

    let top_wine_pairings = response
        .pairings
        .into_iter()
        .take(TOP_RESULTS)
        .map(|pairing| WinePairingCandidate {
            wine_recommendation: pairing.wine_recommendation,
            relevance: pairing.relevance,
            wine_type: pairing.wine_type,
            country: pairing.country,
            color: pairing.color,
        })
        .collect();

    RecommendationResult {
        original_dish: original_dish.to_string(),
        translated_dish: translated_dish.to_string(),
        recommendations: RecommendationDetails {
            extracted_dish: Some(response.tech_info.extracted_dish),
            top_dishes: Some(top_dishes),
            top_wine_pairings,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TechInfo, VendorMatch, VendorPairing};
    use somm_common::api::WineColor;

    fn vendor_response(extracted: &str, matches: usize, pairings: usize) -> PairingResponse {
        PairingResponse {
            tech_info: TechInfo {
                extracted_dish: extracted.to_string(),
                all_results: (0..matches)
                    .map(|i| VendorMatch {
                        matched: format!("match-{}", i),
                        score: 1.0 - i as f64 * 0.1,
                    })
                    .collect(),
            },
            pairings: (0..pairings)
                .map(|i| VendorPairing {
                    wine_recommendation: format!("Wine {}", i),
                    relevance: 90.0 - i as f64,
                    wine_type: "Wine".to_string(),
                    country: "France".to_string(),
                    color: WineColor::Red,
                })
                .collect(),
        }
    }

    #[test]
    fn mapping_truncates_to_top_five() {
        let result = map_vendor_response("Dish", "Dish", vendor_response("dish", 8, 9));

        let details = result.recommendations;
        assert_eq!(details.extracted_dish.as_deref(), Some("dish"));
        assert_eq!(details.top_dishes.unwrap().len(), 5);
        assert_eq!(details.top_wine_pairings.len(), 5);
    }

    #[test]
    fn mapping_keeps_vendor_ranking_order() {
        let result = map_vendor_response("Dish", "Dish", vendor_response("dish", 3, 3));

        let top_dishes = result.recommendations.top_dishes.unwrap();
        assert_eq!(top_dishes[0].matched, "match-0");
        assert_eq!(top_dishes[2].matched, "match-2");
        assert_eq!(
            result.recommendations.top_wine_pairings[0].wine_recommendation,
            "Wine 0"
        );
    }

    #[test]
    fn mapping_preserves_both_dish_names() {
        let result =
            map_vendor_response("Coq au Vin", "Chicken in Wine", vendor_response("chicken", 1, 1));
        assert_eq!(result.original_dish, "Coq au Vin");
        assert_eq!(result.translated_dish, "Chicken in Wine");
    }
}
