//! Fallback wine recommendation generator
//!
//! Synthesizes structurally valid pairing data when the pairing
//! vendor is unavailable or a per-dish call fails, so the caller
//! always has something to render. Randomized in content, fixed in
//! shape: exactly three pairings, unique per (varietal, country),
//! relevance in [70, 100).

use rand::Rng;
use somm_common::api::{
    RecommendationDetails, RecommendationResult, WineColor, WinePairingCandidate,
};
use std::collections::HashSet;

const RED_VARIETALS: &[&str] = &[
    "Cabernet Sauvignon",
    "Merlot",
    "Pinot Noir",
    "Syrah",
    "Malbec",
    "Zinfandel",
];

const WHITE_VARIETALS: &[&str] = &[
    "Chardonnay",
    "Sauvignon Blanc",
    "Pinot Grigio",
    "Riesling",
    "Moscato",
];

const ROSE_VARIETALS: &[&str] = &[
    "Provence Rosé",
    "White Zinfandel",
    "Pinot Noir Rosé",
    "Syrah Rosé",
];

const COUNTRIES: &[&str] = &[
    "France",
    "Italy",
    "Spain",
    "United States",
    "Australia",
    "Argentina",
    "Chile",
    "Germany",
    "Portugal",
    "New Zealand",
];

/// Dish keywords that bias toward white wine
const WHITE_HINTS: &[&str] = &["fish", "seafood", "salad", "chicken", "vegetable"];

/// Dish keywords that bias toward rosé
const ROSE_HINTS: &[&str] = &["fruit", "dessert", "light", "appetizer"];

/// Probability that one candidate ignores the preferred color and
/// draws a uniform random color instead (pairing diversity)
const COLOR_OVERRIDE_PROBABILITY: f64 = 0.3;

const PAIRINGS_PER_DISH: usize = 3;

/// Pick the preferred wine color from the dish name
///
/// Case-insensitive substring match; red is the default.
pub fn preferred_color(dish: &str) -> WineColor {
    let lower = dish.to_lowercase();

    if WHITE_HINTS.iter().any(|hint| lower.contains(hint)) {
        WineColor::White
    } else if ROSE_HINTS.iter().any(|hint| lower.contains(hint)) {
        WineColor::Rose
    } else {
        WineColor::Red
    }
}

fn varietals_for(color: WineColor) -> &'static [&'static str] {
    match color {
        WineColor::Red => RED_VARIETALS,
        WineColor::White => WHITE_VARIETALS,
        WineColor::Rose => ROSE_VARIETALS,
    }
}

/// Generate a fallback recommendation for one dish
///
/// Never fails. The dish is the original (untranslated) name;
/// `translated_dish` mirrors it since no translation happens on the
/// fallback path.
pub fn generate_fallback(dish: &str) -> RecommendationResult {
    let preferred = preferred_color(dish);
    let mut rng = rand::thread_rng();

    let mut pairings = Vec::with_capacity(PAIRINGS_PER_DISH);
    let mut used: HashSet<(&str, &str)> = HashSet::new();

    while pairings.len() < PAIRINGS_PER_DISH {
        let color = if rng.gen_bool(COLOR_OVERRIDE_PROBABILITY) {
            const ALL_COLORS: [WineColor; 3] = [WineColor::Red, WineColor::White, WineColor::Rose];
            ALL_COLORS[rng.gen_range(0..ALL_COLORS.len())]
        } else {
            preferred
        };

        let varietals = varietals_for(color);
        let varietal = varietals[rng.gen_range(0..varietals.len())];
        let country = COUNTRIES[rng.gen_range(0..COUNTRIES.len())];

        // Re-draw on (varietal, country) collision
        if !used.insert((varietal, country)) {
            continue;
        }

        let relevance = f64::from(rng.gen_range(70u32..100));

        pairings.push(WinePairingCandidate {
            wine_recommendation: varietal.to_string(),
            relevance,
            // First word of the varietal, matching the vendor's
            // simplified type field
            wine_type: varietal.split(' ').next().unwrap_or(varietal).to_string(),
            country: country.to_string(),
            color,
        });
    }

    RecommendationResult {
        original_dish: dish.to_string(),
        translated_dish: dish.to_string(),
        recommendations: RecommendationDetails {
            extracted_dish: None,
            top_dishes: None,
            top_wine_pairings: pairings,
        },
    }
}
