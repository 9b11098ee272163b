// ABOUTME: Application configuration aggregated from environment variables
// ABOUTME: Service endpoints, HTTP timeouts and logging, with URL and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// External service endpoint configuration
pub mod services;

pub use services::{
    DetectionServiceConfig, HttpClientConfig, RecipeEndpointConfig, RecipeSearchConfig,
    UploadServiceConfig,
};

use std::env;
use tracing::debug;
use url::Url;

use moodbites_core::errors::{AppError, AppResult};

use crate::logging::LoggingConfig;

/// Largest recipe count a single search may request
const MAX_RESULT_COUNT: u32 = 100;

/// Everything the library needs to reach its collaborators
#[derive(Debug, Clone, Default)]
pub struct MoodBitesConfig {
    /// Recipe search tiers
    pub recipe_search: RecipeSearchConfig,
    /// Fridge detection service
    pub detection: DetectionServiceConfig,
    /// Image upload and recipe API
    pub upload: UploadServiceConfig,
    /// Shared HTTP client timeouts
    pub http: HttpClientConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl MoodBitesConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any value fails [`Self::validate`]
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            recipe_search: RecipeSearchConfig::from_env(),
            detection: DetectionServiceConfig::from_env(),
            upload: UploadServiceConfig::from_env(),
            http: HttpClientConfig::from_env(),
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;
        debug!(
            spoonacular_key = config.recipe_search.spoonacular.api_key.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check URLs and numeric ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first offending setting
    pub fn validate(&self) -> AppResult<()> {
        validate_url("SPOONACULAR_BASE_URL", &self.recipe_search.spoonacular.base_url)?;
        validate_url("RECIPE_SERVICE_URL", &self.recipe_search.local_service.base_url)?;
        validate_url("DETECTION_SERVICE_URL", &self.detection.base_url)?;
        validate_url("UPLOAD_SERVICE_URL", &self.upload.upload_base_url)?;
        validate_url("RECIPE_API_URL", &self.upload.recipe_api_url)?;

        let result_count = self.recipe_search.result_count;
        if result_count == 0 || result_count > MAX_RESULT_COUNT {
            return Err(AppError::config(format!(
                "RECIPE_RESULT_COUNT must be between 1 and {MAX_RESULT_COUNT}, got {result_count}"
            )));
        }

        let min_confidence = self.detection.min_confidence;
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(AppError::config(format!(
                "DETECTION_MIN_CONFIDENCE must be between 0 and 1, got {min_confidence}"
            )));
        }

        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            return Err(AppError::config("HTTP timeouts must be at least one second"));
        }

        Ok(())
    }
}

fn validate_url(name: &str, value: &str) -> AppResult<()> {
    let parsed = Url::parse(value)
        .map_err(|e| AppError::config(format!("{name} is not a valid URL ({value}): {e}")))?;
    if matches!(parsed.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "{name} must use http or https, got {}",
            parsed.scheme()
        )))
    }
}

pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
