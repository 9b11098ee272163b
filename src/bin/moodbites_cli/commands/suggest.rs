// ABOUTME: Recipe suggestion command for moodbites-cli
// ABOUTME: Runs the tiered refresh for a typed-in ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use moodbites::config::MoodBitesConfig;
use moodbites::models::Ingredient;
use moodbites::recipes::RecipeRefresher;
use moodbites::scan::categorize;

use crate::helpers::display::{display_ingredients, display_recipes};

/// Suggest recipes for the given ingredient names
pub async fn run(config: &MoodBitesConfig, names: &[String]) {
    let ingredients: Vec<Ingredient> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| Ingredient::manual(name, categorize(name)))
        .collect();

    let recipes = RecipeRefresher::from_config(config)
        .fetch_recipes(&ingredients)
        .await;

    display_ingredients(&ingredients);
    display_recipes(&recipes);
}
