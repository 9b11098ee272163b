// ABOUTME: HTTP recipe search client for Spoonacular and the local recipe service
// ABOUTME: Maps loosely-shaped JSON hits into RecipeCandidates with explicit placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # HTTP Recipe Search
//!
//! Both remote tiers speak the same shape:
//!
//! ```text
//! GET {base_url}{path}?ingredients=tomato,onion&number=6[&apiKey=...]
//! [{ "id": 1, "title": "...", "readyInMinutes": 25, "calories": 320,
//!    "image": "...", "usedIngredientCount": 2, "missedIngredientCount": 3 }]
//! ```
//!
//! Every field except `id` and `title` is optional and falls back to a
//! placeholder instead of failing the whole response.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use moodbites_core::constants::recipe_defaults::{
    DEFAULT_COOK_TIME_MINUTES, PLACEHOLDER_IMAGE_URL,
};
use moodbites_core::constants::service_names;
use moodbites_core::errors::{AppError, AppResult};
use moodbites_core::models::{Difficulty, RecipeCandidate, RecipeId, RecipeSource};

use super::provider::{RecipeQuery, RecipeSearchProvider};
use crate::config::RecipeEndpointConfig;
use crate::http_client::shared_client;

/// One hit as returned by a search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchHit {
    /// Provider id, numeric or string
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Ready time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    /// Calories per serving
    #[serde(default)]
    pub calories: Option<f64>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Fridge ingredients used
    #[serde(default)]
    pub used_ingredient_count: Option<u32>,
    /// Ingredients missing from the fridge
    #[serde(default)]
    pub missed_ingredient_count: Option<u32>,
}

impl RecipeSearchHit {
    /// Convert into a display candidate, filling placeholders
    #[must_use]
    pub fn into_candidate(self, source: RecipeSource) -> RecipeCandidate {
        let cook_time_minutes = self.ready_in_minutes.unwrap_or(DEFAULT_COOK_TIME_MINUTES);
        let matched = self.used_ingredient_count.unwrap_or(0);
        let missing = self.missed_ingredient_count.unwrap_or(0);
        let image_url = self
            .image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned());

        RecipeCandidate {
            id: self.id,
            title: self.title,
            cook_time_minutes,
            calories: self
                .calories
                .filter(|kcal| kcal.is_finite() && *kcal >= 0.0)
                .map(|kcal| kcal.round() as u32),
            difficulty: Difficulty::from_minutes(cook_time_minutes),
            image_url,
            matched_ingredient_count: matched,
            total_ingredient_count: matched.saturating_add(missing),
            missing_ingredient_count: missing,
            source_provider: source,
        }
    }
}

/// Recipe search over HTTP
pub struct HttpRecipeSearch {
    name: &'static str,
    source: RecipeSource,
    endpoint: RecipeEndpointConfig,
    http_client: reqwest::Client,
}

impl HttpRecipeSearch {
    /// Primary tier: Spoonacular-compatible API
    #[must_use]
    pub fn spoonacular(endpoint: RecipeEndpointConfig) -> Self {
        Self::new(service_names::SPOONACULAR, RecipeSource::Spoonacular, endpoint)
    }

    /// Secondary tier: in-house recipe service
    #[must_use]
    pub fn local_service(endpoint: RecipeEndpointConfig) -> Self {
        Self::new(
            service_names::LOCAL_RECIPE_SERVICE,
            RecipeSource::LocalService,
            endpoint,
        )
    }

    fn new(name: &'static str, source: RecipeSource, endpoint: RecipeEndpointConfig) -> Self {
        Self {
            name,
            source,
            endpoint,
            http_client: shared_client().clone(),
        }
    }

    /// Use a specific HTTP client instead of the shared one
    #[must_use]
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }
}

#[async_trait]
impl RecipeSearchProvider for HttpRecipeSearch {
    fn name(&self) -> &'static str {
        self.name
    }

    fn source(&self) -> RecipeSource {
        self.source
    }

    async fn search_by_ingredients(&self, query: &RecipeQuery) -> AppResult<Vec<RecipeCandidate>> {
        let url = self.endpoint.search_url();
        let mut params = vec![
            ("ingredients", query.joined()),
            ("number", query.number.to_string()),
        ];
        if let Some(api_key) = &self.endpoint.api_key {
            params.push(("apiKey", api_key.clone()));
        }

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::from(e).with_service(self.name))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                self.name,
                format!(
                    "HTTP {}: {}",
                    status,
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let hits: Vec<RecipeSearchHit> = response.json().await.map_err(|e| {
            AppError::external_service(self.name, format!("JSON parse error: {e}"))
        })?;

        debug!(provider = self.name, hits = hits.len(), "Recipe search completed");

        Ok(hits
            .into_iter()
            .map(|hit| hit.into_candidate(self.source))
            .collect())
    }
}
