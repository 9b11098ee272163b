// ABOUTME: Last-resort recipe suggestions when every remote tier fails
// ABOUTME: Synthesizes a fixed set of generic recipes with bounded random match counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

use moodbites_core::constants::recipe_defaults::{
    FALLBACK_MAX_MATCHED, FALLBACK_MAX_MISSING, PLACEHOLDER_IMAGE_URL,
};
use moodbites_core::models::{Difficulty, RecipeCandidate, RecipeId, RecipeSource};

/// Generic recipes that work with most fridge contents
const FALLBACK_TEMPLATES: &[(&str, &str, u32, u32)] = &[
    ("fallback-stir-fry", "Quick Veggie Stir Fry", 20, 320),
    ("fallback-salad", "Simple Garden Salad", 10, 180),
    ("fallback-soup", "Hearty Vegetable Soup", 40, 250),
    ("fallback-frittata", "Fridge Clean-Out Frittata", 25, 290),
];

/// Generator for the fallback tier; always succeeds
pub struct FallbackRecipes {
    rng: Mutex<ChaCha8Rng>,
}

impl FallbackRecipes {
    /// Generator seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Deterministic generator for reproducible output
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Build the fallback set for a session holding `ingredient_count` ingredients
    ///
    /// Matched counts stay within `1..=min(ingredient_count, 5)` (zero when the
    /// session is empty) and each recipe misses between one and four
    /// ingredients.
    #[must_use]
    pub fn generate(&self, ingredient_count: usize) -> Vec<RecipeCandidate> {
        let max_matched = u32::try_from(ingredient_count)
            .unwrap_or(u32::MAX)
            .min(FALLBACK_MAX_MATCHED);

        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        FALLBACK_TEMPLATES
            .iter()
            .map(|&(id, title, minutes, calories)| {
                let matched = if max_matched == 0 {
                    0
                } else {
                    rng.gen_range(1..=max_matched)
                };
                let missing = rng.gen_range(1..=FALLBACK_MAX_MISSING);

                RecipeCandidate {
                    id: RecipeId::Text(id.to_owned()),
                    title: title.to_owned(),
                    cook_time_minutes: minutes,
                    calories: Some(calories),
                    difficulty: Difficulty::from_minutes(minutes),
                    image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
                    matched_ingredient_count: matched,
                    total_ingredient_count: matched + missing,
                    missing_ingredient_count: missing,
                    source_provider: RecipeSource::Fallback,
                }
            })
            .collect()
    }
}

impl Default for FallbackRecipes {
    fn default() -> Self {
        Self::new()
    }
}
