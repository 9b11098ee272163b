// ABOUTME: Recipe search provider abstraction shared by every refresh tier
// ABOUTME: Defines the ingredient query and the async RecipeSearchProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use async_trait::async_trait;

use moodbites_core::errors::AppResult;
use moodbites_core::models::{Ingredient, RecipeCandidate, RecipeSource};

/// Search-by-ingredients query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Ingredient names, in session order
    pub ingredients: Vec<String>,
    /// Number of recipes to request
    pub number: u32,
}

impl RecipeQuery {
    /// Build a query from session ingredients
    #[must_use]
    pub fn from_ingredients(ingredients: &[Ingredient], number: u32) -> Self {
        Self {
            ingredients: ingredients
                .iter()
                .map(|ingredient| ingredient.name.trim().to_owned())
                .filter(|name| !name.is_empty())
                .collect(),
            number,
        }
    }

    /// Comma-joined ingredient list as sent upstream
    #[must_use]
    pub fn joined(&self) -> String {
        self.ingredients.join(",")
    }

    /// Whether there is anything to search for
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// One tier of the recipe refresh chain
///
/// Implementations convert provider-specific responses into
/// [`RecipeCandidate`]s tagged with their [`RecipeSource`] and report
/// transport or parse problems as errors; the refresher decides whether to
/// fall through.
#[async_trait]
pub trait RecipeSearchProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Source tag applied to every candidate from this provider
    fn source(&self) -> RecipeSource;

    /// Search recipes that use the given ingredients
    async fn search_by_ingredients(&self, query: &RecipeQuery) -> AppResult<Vec<RecipeCandidate>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodbites_core::models::IngredientCategory;

    #[test]
    fn test_query_joins_names_in_order() {
        let ingredients = vec![
            Ingredient::detected("tomato", 91, IngredientCategory::Vegetables, None),
            Ingredient::manual(" basil ", IngredientCategory::Produce),
        ];
        let query = RecipeQuery::from_ingredients(&ingredients, 5);

        assert_eq!(query.joined(), "tomato,basil");
        assert_eq!(query.number, 5);
        assert!(!query.is_empty());
    }
}
