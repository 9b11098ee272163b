// ABOUTME: Integration tests for the three-tier recipe refresh
// ABOUTME: Uses in-memory providers and real HTTP search endpoints served by axum on localhost
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

mod common;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{candidate, init_test_logging, spawn_server, test_http_client, MockBehavior, MockProvider};
use moodbites::config::RecipeEndpointConfig;
use moodbites::constants::recipe_defaults::{FALLBACK_MAX_MATCHED, PLACEHOLDER_IMAGE_URL};
use moodbites::models::{Ingredient, IngredientCategory, RecipeId, RecipeSource};
use moodbites::recipes::{
    FallbackRecipes, HttpRecipeSearch, RecipeQuery, RecipeRefresher, RecipeSearchProvider,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn fridge(names: &[&str]) -> Vec<Ingredient> {
    names
        .iter()
        .map(|name| Ingredient::detected(*name, 85, IngredientCategory::Vegetables, None))
        .collect()
}

// ============================================================================
// Tier Ordering (in-memory providers)
// ============================================================================

#[tokio::test]
async fn test_primary_results_are_served_first() {
    init_test_logging();
    let primary = MockProvider::new(
        "primary",
        RecipeSource::Spoonacular,
        MockBehavior::Recipes(vec![candidate(1, "Shakshuka", RecipeSource::Spoonacular)]),
    );
    let secondary = MockProvider::new(
        "secondary",
        RecipeSource::LocalService,
        MockBehavior::Recipes(vec![candidate(2, "Dal", RecipeSource::LocalService)]),
    );
    let refresher = RecipeRefresher::new(primary.clone(), secondary.clone());

    let recipes = refresher.fetch_recipes(&fridge(&["tomato", "egg"])).await;

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].source_provider, RecipeSource::Spoonacular);
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 0);
}

#[tokio::test]
async fn test_empty_primary_falls_through_to_local_service() {
    init_test_logging();
    let primary = MockProvider::new("primary", RecipeSource::Spoonacular, MockBehavior::Recipes(Vec::new()));
    let only = candidate(42, "Tomato Rice", RecipeSource::LocalService);
    let secondary = MockProvider::new(
        "secondary",
        RecipeSource::LocalService,
        MockBehavior::Recipes(vec![only.clone()]),
    );
    let refresher = RecipeRefresher::new(primary.clone(), secondary.clone());

    let recipes = refresher.fetch_recipes(&fridge(&["tomato", "rice"])).await;

    assert_eq!(recipes, vec![only]);
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
}

#[tokio::test]
async fn test_both_tiers_failing_yields_fallback() {
    init_test_logging();
    let primary = MockProvider::new("primary", RecipeSource::Spoonacular, MockBehavior::Fail);
    let secondary =
        MockProvider::new("secondary", RecipeSource::LocalService, MockBehavior::Recipes(Vec::new()));
    let refresher = RecipeRefresher::new(primary.clone(), secondary.clone())
        .with_fallback(FallbackRecipes::with_seed(11));

    let ingredients = fridge(&["tomato", "onion", "garlic"]);
    let recipes = refresher.fetch_recipes(&ingredients).await;

    assert!(!recipes.is_empty());
    for recipe in &recipes {
        assert_eq!(recipe.source_provider, RecipeSource::Fallback);
        assert!(recipe.matched_ingredient_count >= 1);
        assert!(recipe.matched_ingredient_count <= 3.min(FALLBACK_MAX_MATCHED));
        assert_eq!(
            recipe.total_ingredient_count,
            recipe.matched_ingredient_count + recipe.missing_ingredient_count
        );
    }
    // Each tier is attempted exactly once
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
}

#[tokio::test]
async fn test_hanging_tier_times_out_and_falls_through() {
    init_test_logging();
    let primary = MockProvider::new("primary", RecipeSource::Spoonacular, MockBehavior::Hang);
    let secondary = MockProvider::new(
        "secondary",
        RecipeSource::LocalService,
        MockBehavior::Recipes(vec![candidate(5, "Poha", RecipeSource::LocalService)]),
    );
    let refresher = RecipeRefresher::new(primary, secondary)
        .with_tier_timeout(Duration::from_millis(100));

    let started = Instant::now();
    let recipes = refresher.fetch_recipes(&fridge(&["onion"])).await;

    assert_eq!(recipes[0].source_provider, RecipeSource::LocalService);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_empty_ingredient_list_skips_remote_tiers() {
    init_test_logging();
    let primary = MockProvider::new("primary", RecipeSource::Spoonacular, MockBehavior::Fail);
    let secondary = MockProvider::new("secondary", RecipeSource::LocalService, MockBehavior::Fail);
    let refresher = RecipeRefresher::new(primary.clone(), secondary.clone());

    let recipes = refresher.fetch_recipes(&[]).await;

    assert!(!recipes.is_empty());
    assert!(recipes.iter().all(|r| r.matched_ingredient_count == 0));
    assert_eq!(primary.calls(), 0);
    assert_eq!(secondary.calls(), 0);
}

// ============================================================================
// HTTP Search Endpoints
// ============================================================================

async fn empty_results() -> Json<Value> {
    Json(json!([]))
}

async fn one_local_result() -> Json<Value> {
    Json(json!([{
        "id": "local-7",
        "title": "Tomato Onion Sabzi",
        "readyInMinutes": 35,
        "usedIngredientCount": 2,
        "missedIngredientCount": 1
    }]))
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn echo_query(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!([{
        "id": 1,
        "title": params.get("ingredients").cloned().unwrap_or_default(),
        "readyInMinutes": params.get("number").and_then(|n| n.parse::<u32>().ok()),
        "image": params.get("apiKey").cloned(),
        "calories": 410.4
    }]))
}

#[tokio::test]
async fn test_http_tiers_serve_local_service_when_primary_is_empty() {
    init_test_logging();
    let primary_url = spawn_server(Router::new().route("/recipes/findByIngredients", get(empty_results))).await;
    let local_url = spawn_server(Router::new().route("/recipes/by-ingredients", get(one_local_result))).await;

    let refresher = RecipeRefresher::new(
        Arc::new(
            HttpRecipeSearch::spoonacular(RecipeEndpointConfig::new(
                primary_url,
                "/recipes/findByIngredients",
            ))
            .with_http_client(test_http_client()),
        ),
        Arc::new(
            HttpRecipeSearch::local_service(RecipeEndpointConfig::new(
                local_url,
                "/recipes/by-ingredients",
            ))
            .with_http_client(test_http_client()),
        ),
    );

    let recipes = refresher.fetch_recipes(&fridge(&["tomato", "onion"])).await;

    assert_eq!(recipes.len(), 1);
    let recipe = &recipes[0];
    assert_eq!(recipe.source_provider, RecipeSource::LocalService);
    assert_eq!(recipe.id, RecipeId::Text("local-7".to_owned()));
    assert_eq!(recipe.cook_time_minutes, 35);
    assert_eq!(recipe.total_ingredient_count, 3);
    assert_eq!(recipe.image_url, PLACEHOLDER_IMAGE_URL);
    assert_eq!(recipe.calories, None);
}

#[tokio::test]
async fn test_http_errors_fall_back_to_synthesized_recipes() {
    init_test_logging();
    let url = spawn_server(
        Router::new()
            .route("/recipes/findByIngredients", get(server_error))
            .route("/recipes/by-ingredients", get(server_error)),
    )
    .await;

    let refresher = RecipeRefresher::new(
        Arc::new(
            HttpRecipeSearch::spoonacular(RecipeEndpointConfig::new(
                url.clone(),
                "/recipes/findByIngredients",
            ))
            .with_http_client(test_http_client()),
        ),
        Arc::new(
            HttpRecipeSearch::local_service(RecipeEndpointConfig::new(url, "/recipes/by-ingredients"))
                .with_http_client(test_http_client()),
        ),
    );

    let recipes = refresher.fetch_recipes(&fridge(&["potato"])).await;

    assert!(!recipes.is_empty());
    assert!(recipes.iter().all(|r| r.source_provider == RecipeSource::Fallback));
}

#[tokio::test]
async fn test_search_sends_ingredients_number_and_api_key() {
    init_test_logging();
    let url = spawn_server(Router::new().route("/search", get(echo_query))).await;
    let search = HttpRecipeSearch::spoonacular(
        RecipeEndpointConfig::new(url, "/search").with_api_key("secret-key"),
    )
    .with_http_client(test_http_client());

    let query = RecipeQuery::from_ingredients(&fridge(&["tomato", "basil"]), 4);
    let recipes = search.search_by_ingredients(&query).await.unwrap();

    assert_eq!(recipes[0].title, "tomato,basil");
    assert_eq!(recipes[0].cook_time_minutes, 4);
    assert_eq!(recipes[0].image_url, "secret-key");
    assert_eq!(recipes[0].calories, Some(410));
    assert_eq!(recipes[0].source_provider, RecipeSource::Spoonacular);
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    init_test_logging();
    let search = HttpRecipeSearch::local_service(RecipeEndpointConfig::new(
        "http://127.0.0.1:9",
        "/recipes/by-ingredients",
    ))
    .with_http_client(test_http_client());

    let query = RecipeQuery::from_ingredients(&fridge(&["tomato"]), 6);
    let err = search.search_by_ingredients(&query).await.unwrap_err();

    assert_eq!(err.context.service.as_deref(), Some("local-recipe-service"));
}
