// ABOUTME: Three-tier recipe refresh: primary search, local service, then synthesized fallback
// ABOUTME: Swallows tier errors and timeouts so a refresh always yields recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Recipe Refresh
//!
//! Each tier is tried exactly once per refresh, in order:
//!
//! 1. primary search (`Spoonacular`)
//! 2. local recipe service (`LocalService`)
//! 3. synthesized fallback (`Fallback`)
//!
//! A tier that errors, times out, or returns nothing hands over to the next
//! one. No retry, no backoff, no coalescing of concurrent refreshes.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use moodbites_core::constants::recipe_defaults::DEFAULT_RESULT_COUNT;
use moodbites_core::constants::service_defaults::HTTP_TIMEOUT_SECS;
use moodbites_core::errors::{AppError, AppResult};
use moodbites_core::models::{Ingredient, RecipeCandidate};

use super::fallback::FallbackRecipes;
use super::http_search::HttpRecipeSearch;
use super::provider::{RecipeQuery, RecipeSearchProvider};
use crate::config::MoodBitesConfig;

/// Recipe refresh orchestrator
pub struct RecipeRefresher {
    primary: Arc<dyn RecipeSearchProvider>,
    secondary: Arc<dyn RecipeSearchProvider>,
    fallback: FallbackRecipes,
    result_count: u32,
    tier_timeout: Duration,
}

impl RecipeRefresher {
    /// Build a refresher over two remote tiers
    #[must_use]
    pub fn new(
        primary: Arc<dyn RecipeSearchProvider>,
        secondary: Arc<dyn RecipeSearchProvider>,
    ) -> Self {
        Self {
            primary,
            secondary,
            fallback: FallbackRecipes::new(),
            result_count: DEFAULT_RESULT_COUNT,
            tier_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }

    /// Build the HTTP tiers from configuration
    #[must_use]
    pub fn from_config(config: &MoodBitesConfig) -> Self {
        let recipes = &config.recipe_search;
        Self::new(
            Arc::new(HttpRecipeSearch::spoonacular(recipes.spoonacular.clone())),
            Arc::new(HttpRecipeSearch::local_service(recipes.local_service.clone())),
        )
        .with_result_count(recipes.result_count)
        .with_tier_timeout(Duration::from_secs(config.http.timeout_secs))
    }

    /// Replace the fallback generator
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackRecipes) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of recipes requested from remote tiers
    #[must_use]
    pub fn with_result_count(mut self, result_count: u32) -> Self {
        self.result_count = result_count;
        self
    }

    /// Upper bound on each remote tier call
    #[must_use]
    pub fn with_tier_timeout(mut self, tier_timeout: Duration) -> Self {
        self.tier_timeout = tier_timeout;
        self
    }

    /// Fetch recipe candidates for the given ingredients; never fails
    pub async fn fetch_recipes(&self, ingredients: &[Ingredient]) -> Vec<RecipeCandidate> {
        let query = RecipeQuery::from_ingredients(ingredients, self.result_count);

        if query.is_empty() {
            debug!("No ingredients to search with, using fallback recipes");
        } else {
            for provider in [&self.primary, &self.secondary] {
                match self.try_tier(provider.as_ref(), &query).await {
                    Ok(recipes) if !recipes.is_empty() => {
                        info!(
                            provider = provider.name(),
                            recipes = recipes.len(),
                            ingredients = query.ingredients.len(),
                            "Recipe refresh served"
                        );
                        return recipes;
                    }
                    Ok(_) => {
                        debug!(provider = provider.name(), "Recipe tier returned no results");
                    }
                    Err(e) => {
                        warn!(provider = provider.name(), error = %e, "Recipe tier failed");
                    }
                }
            }
        }

        let recipes = self.fallback.generate(query.ingredients.len());
        info!(recipes = recipes.len(), "Serving fallback recipes");
        recipes
    }

    async fn try_tier(
        &self,
        provider: &dyn RecipeSearchProvider,
        query: &RecipeQuery,
    ) -> AppResult<Vec<RecipeCandidate>> {
        tokio::time::timeout(self.tier_timeout, provider.search_by_ingredients(query))
            .await
            .map_err(|_| {
                AppError::service_unavailable(
                    provider.name(),
                    format!("timed out after {}ms", self.tier_timeout.as_millis()),
                )
            })?
    }
}
