//! Recommendation API request/response types
//!
//! Wire types shared between the recommendation service and its
//! clients. Field names follow the established JSON contract
//! (`wine_recommendation`, `type`, `match`, ...), so Rust-keyword
//! collisions are handled with serde renames.

use serde::{Deserialize, Serialize};

/// Wine color classification
///
/// The pairing vendor and the fallback generator both use exactly
/// these three colors; anything else in a vendor payload is a shape
/// mismatch and rejected at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WineColor {
    Red,
    White,
    Rose,
}

impl WineColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            WineColor::Red => "Red",
            WineColor::White => "White",
            WineColor::Rose => "Rose",
        }
    }
}

impl std::fmt::Display for WineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate wine for a dish
///
/// `relevance` is on a 0-100 scale in the fallback path; the live
/// vendor defines its own scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinePairingCandidate {
    pub wine_recommendation: String,
    pub relevance: f64,
    #[serde(rename = "type")]
    pub wine_type: String,
    pub country: String,
    pub color: WineColor,
}

/// One dish match reported by the pairing vendor (live path only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishMatch {
    #[serde(rename = "match")]
    pub matched: String,
    pub score: f64,
}

/// Recommendation payload for one dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_dish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_dishes: Option<Vec<DishMatch>>,
    pub top_wine_pairings: Vec<WinePairingCandidate>,
}

/// One result per input dish, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub original_dish: String,
    pub translated_dish: String,
    pub recommendations: RecommendationDetails,
}

/// POST /recommend request body
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub dishes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wine_color_serializes_to_bare_name() {
        assert_eq!(serde_json::to_string(&WineColor::Red).unwrap(), "\"Red\"");
        assert_eq!(serde_json::to_string(&WineColor::Rose).unwrap(), "\"Rose\"");
    }

    #[test]
    fn unknown_wine_color_is_rejected() {
        let result: Result<WineColor, _> = serde_json::from_str("\"Orange\"");
        assert!(result.is_err());
    }

    #[test]
    fn candidate_uses_wire_field_names() {
        let candidate = WinePairingCandidate {
            wine_recommendation: "Chardonnay".to_string(),
            relevance: 87.0,
            wine_type: "Chardonnay".to_string(),
            country: "France".to_string(),
            color: WineColor::White,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["type"], "Chardonnay");
        assert!(json.get("wine_type").is_none());
    }

    #[test]
    fn dish_match_round_trips_match_keyword() {
        let json = r#"{"match": "Grilled Salmon", "score": 0.92}"#;
        let parsed: DishMatch = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.matched, "Grilled Salmon");

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["match"], "Grilled Salmon");
    }

    #[test]
    fn fallback_result_omits_live_only_fields() {
        let result = RecommendationResult {
            original_dish: "Coq au Vin".to_string(),
            translated_dish: "Coq au Vin".to_string(),
            recommendations: RecommendationDetails {
                extracted_dish: None,
                top_dishes: None,
                top_wine_pairings: vec![],
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["recommendations"].get("extracted_dish").is_none());
        assert!(json["recommendations"].get("top_dishes").is_none());
    }
}
