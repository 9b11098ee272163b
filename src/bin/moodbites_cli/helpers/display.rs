// ABOUTME: Output formatting helpers for moodbites-cli
// ABOUTME: Consistent display of validation reports, ingredients and recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use moodbites::models::{Ingredient, RecipeCandidate};
use moodbites::validation::SubmissionReport;

/// Print every field result and the cross-field guard
pub fn display_report(report: &SubmissionReport) {
    println!("\nRecipe form check");
    println!("{}", "=".repeat(60));
    for result in &report.results {
        match &result.error {
            None => println!("   ok    {}", result.field),
            Some(message) => println!("   FAIL  {}: {message}", result.field),
        }
    }
    if !report.non_food_terms.is_empty() {
        println!(
            "\n   Non-food terms found: {}",
            report.non_food_terms.join(", ")
        );
    }
    println!("{}", "=".repeat(60));
}

/// Print the ingredient list of a scan
pub fn display_ingredients(ingredients: &[Ingredient]) {
    println!("\nIngredients ({})", ingredients.len());
    for ingredient in ingredients {
        println!(
            "   {:<24} {:>3}%  {:<10} {:?}",
            ingredient.name, ingredient.confidence, ingredient.category, ingredient.provenance
        );
    }
}

/// Print recipe suggestions
pub fn display_recipes(recipes: &[RecipeCandidate]) {
    println!("\nRecipe suggestions ({})", recipes.len());
    println!("{}", "-".repeat(60));
    for recipe in recipes {
        let calories = recipe
            .calories
            .map_or_else(|| "? kcal".to_owned(), |kcal| format!("{kcal} kcal"));
        println!("   {} [{}]", recipe.title, recipe.source_provider);
        println!(
            "      {} min, {:?}, {calories}, uses {}/{} ingredients ({} missing)",
            recipe.cook_time_minutes,
            recipe.difficulty,
            recipe.matched_ingredient_count,
            recipe.total_ingredient_count,
            recipe.missing_ingredient_count
        );
    }
}
