// ABOUTME: Tests for environment-driven configuration loading
// ABOUTME: Serialized because every case mutates process environment variables
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use moodbites::config::MoodBitesConfig;
use moodbites::constants::recipe_defaults::DEFAULT_RESULT_COUNT;
use moodbites::errors::ErrorCode;
use moodbites::logging::LogFormat;
use serial_test::serial;
use std::env;

const MANAGED_VARS: &[&str] = &[
    "SPOONACULAR_BASE_URL",
    "SPOONACULAR_API_KEY",
    "RECIPE_SERVICE_URL",
    "RECIPE_RESULT_COUNT",
    "DETECTION_SERVICE_URL",
    "DETECTION_MIN_CONFIDENCE",
    "UPLOAD_SERVICE_URL",
    "RECIPE_API_URL",
    "HTTP_TIMEOUT_SECS",
    "HTTP_CONNECT_TIMEOUT_SECS",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = MoodBitesConfig::from_env().unwrap();

    assert_eq!(
        config.recipe_search.spoonacular.search_url(),
        "https://api.spoonacular.com/recipes/findByIngredients"
    );
    assert!(config.recipe_search.spoonacular.api_key.is_none());
    assert_eq!(config.recipe_search.result_count, DEFAULT_RESULT_COUNT);
    assert_eq!(config.detection.detect_url(), "http://localhost:8000/detect");
    assert_eq!(config.upload.upload_url(), "http://localhost:5000/upload");
    assert_eq!(config.upload.recipe_create_url(), "http://localhost:5000/recipes");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "key-123");
    env::set_var("RECIPE_SERVICE_URL", "http://recipes.internal:8080/");
    env::set_var("RECIPE_RESULT_COUNT", "12");
    env::set_var("DETECTION_MIN_CONFIDENCE", "0.75");
    env::set_var("HTTP_TIMEOUT_SECS", "3");
    env::set_var("LOG_FORMAT", "json");

    let config = MoodBitesConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.recipe_search.spoonacular.api_key.as_deref(),
        Some("key-123")
    );
    assert_eq!(
        config.recipe_search.local_service.search_url(),
        "http://recipes.internal:8080/recipes/by-ingredients"
    );
    assert_eq!(config.recipe_search.result_count, 12);
    assert!((config.detection.min_confidence - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.http.timeout_secs, 3);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_unparseable_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var("RECIPE_RESULT_COUNT", "lots");

    let config = MoodBitesConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.recipe_search.result_count, DEFAULT_RESULT_COUNT);
}

#[test]
#[serial]
fn test_invalid_url_is_config_error() {
    clear_env();
    env::set_var("UPLOAD_SERVICE_URL", "ftp://files.example");

    let err = MoodBitesConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("UPLOAD_SERVICE_URL"));
}

#[test]
#[serial]
fn test_zero_result_count_is_config_error() {
    clear_env();
    env::set_var("RECIPE_RESULT_COUNT", "0");

    let err = MoodBitesConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}
