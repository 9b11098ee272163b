// ABOUTME: External service endpoint configuration for recipe search, detection and upload
// ABOUTME: Each section loads from environment variables with defaults from constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use serde::{Deserialize, Serialize};
use std::env;

use moodbites_core::constants::recipe_defaults::DEFAULT_RESULT_COUNT;
use moodbites_core::constants::service_defaults::{
    DETECTION_MIN_CONFIDENCE, DETECTION_PATH, DETECTION_SERVICE_URL, HTTP_CONNECT_TIMEOUT_SECS,
    HTTP_TIMEOUT_SECS, LOCAL_RECIPE_SERVICE_URL, LOCAL_SEARCH_PATH, RECIPE_API_URL,
    RECIPE_CREATE_PATH, SPOONACULAR_BASE_URL, SPOONACULAR_SEARCH_PATH, UPLOAD_PATH,
    UPLOAD_SERVICE_URL,
};

use super::env_var_or;

/// Join a base URL and a path without doubling the slash
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// One recipe search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeEndpointConfig {
    /// Service base URL
    pub base_url: String,
    /// Search path appended to the base URL
    pub path: String,
    /// API key sent as `apiKey`, if the service needs one
    pub api_key: Option<String>,
}

impl RecipeEndpointConfig {
    /// Endpoint without an API key
    #[must_use]
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            api_key: None,
        }
    }

    /// Attach an API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Full search URL
    #[must_use]
    pub fn search_url(&self) -> String {
        join_url(&self.base_url, &self.path)
    }
}

/// Recipe search tiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSearchConfig {
    /// Primary tier
    pub spoonacular: RecipeEndpointConfig,
    /// Secondary tier
    pub local_service: RecipeEndpointConfig,
    /// Recipes requested per search
    pub result_count: u32,
}

impl Default for RecipeSearchConfig {
    fn default() -> Self {
        Self {
            spoonacular: RecipeEndpointConfig::new(SPOONACULAR_BASE_URL, SPOONACULAR_SEARCH_PATH),
            local_service: RecipeEndpointConfig::new(LOCAL_RECIPE_SERVICE_URL, LOCAL_SEARCH_PATH),
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl RecipeSearchConfig {
    /// Load recipe search configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let mut spoonacular = RecipeEndpointConfig::new(
            env_var_or("SPOONACULAR_BASE_URL", SPOONACULAR_BASE_URL),
            SPOONACULAR_SEARCH_PATH,
        );
        spoonacular.api_key = env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            spoonacular,
            local_service: RecipeEndpointConfig::new(
                env_var_or("RECIPE_SERVICE_URL", LOCAL_RECIPE_SERVICE_URL),
                LOCAL_SEARCH_PATH,
            ),
            result_count: env_var_or("RECIPE_RESULT_COUNT", &DEFAULT_RESULT_COUNT.to_string())
                .parse()
                .unwrap_or(DEFAULT_RESULT_COUNT),
        }
    }
}

/// Fridge detection service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionServiceConfig {
    /// Service base URL
    pub base_url: String,
    /// Detections below this score (0..1) are dropped
    pub min_confidence: f64,
}

impl Default for DetectionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DETECTION_SERVICE_URL.to_owned(),
            min_confidence: DETECTION_MIN_CONFIDENCE,
        }
    }
}

impl DetectionServiceConfig {
    /// Load detection configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or("DETECTION_SERVICE_URL", DETECTION_SERVICE_URL),
            min_confidence: env_var_or(
                "DETECTION_MIN_CONFIDENCE",
                &DETECTION_MIN_CONFIDENCE.to_string(),
            )
            .parse()
            .unwrap_or(DETECTION_MIN_CONFIDENCE),
        }
    }

    /// Detection endpoint URL
    #[must_use]
    pub fn detect_url(&self) -> String {
        join_url(&self.base_url, DETECTION_PATH)
    }
}

/// Image hosting and recipe creation services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadServiceConfig {
    /// Image upload service base URL
    pub upload_base_url: String,
    /// Recipe API base URL
    pub recipe_api_url: String,
}

impl Default for UploadServiceConfig {
    fn default() -> Self {
        Self {
            upload_base_url: UPLOAD_SERVICE_URL.to_owned(),
            recipe_api_url: RECIPE_API_URL.to_owned(),
        }
    }
}

impl UploadServiceConfig {
    /// Load upload configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            upload_base_url: env_var_or("UPLOAD_SERVICE_URL", UPLOAD_SERVICE_URL),
            recipe_api_url: env_var_or("RECIPE_API_URL", RECIPE_API_URL),
        }
    }

    /// Image upload endpoint
    #[must_use]
    pub fn upload_url(&self) -> String {
        join_url(&self.upload_base_url, UPLOAD_PATH)
    }

    /// Recipe creation endpoint
    #[must_use]
    pub fn recipe_create_url(&self) -> String {
        join_url(&self.recipe_api_url, RECIPE_CREATE_PATH)
    }
}

/// Shared HTTP client timeouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: HTTP_TIMEOUT_SECS,
            connect_timeout_secs: HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Load HTTP client configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env_var_or("HTTP_TIMEOUT_SECS", &HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(HTTP_TIMEOUT_SECS),
            connect_timeout_secs: env_var_or(
                "HTTP_CONNECT_TIMEOUT_SECS",
                &HTTP_CONNECT_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .unwrap_or(HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_joins_cleanly() {
        let endpoint = RecipeEndpointConfig::new("http://localhost:5000/", "/recipes/by-ingredients");
        assert_eq!(
            endpoint.search_url(),
            "http://localhost:5000/recipes/by-ingredients"
        );
    }

    #[test]
    fn test_upload_urls() {
        let config = UploadServiceConfig {
            upload_base_url: "http://img.local".into(),
            recipe_api_url: "http://api.local/".into(),
        };
        assert_eq!(config.upload_url(), "http://img.local/upload");
        assert_eq!(config.recipe_create_url(), "http://api.local/recipes");
    }
}
