// ABOUTME: Recipe suggestions for fridge ingredients with tiered provider fallback
// ABOUTME: Provider trait, HTTP search client, fallback generator, and refresh orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// Synthesized last-resort recipes
pub mod fallback;
/// HTTP search client for remote tiers
pub mod http_search;
/// Search provider trait and query
pub mod provider;
/// Three-tier refresh orchestrator
pub mod refresher;

pub use fallback::FallbackRecipes;
pub use http_search::{HttpRecipeSearch, RecipeSearchHit};
pub use provider::{RecipeQuery, RecipeSearchProvider};
pub use refresher::RecipeRefresher;
