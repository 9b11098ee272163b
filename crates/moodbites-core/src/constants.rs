// ABOUTME: Form limits, placeholder values, and external service defaults
// ABOUTME: Single source for the numbers validators, reconcilers, and clients agree on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Constants Module
//!
//! Hardcoded limits and defaults. Environment overrides live in the root
//! crate's `config` module.

/// Recipe submission form limits
pub mod limits {
    /// Title length bounds (trimmed)
    pub const TITLE_MIN_LEN: usize = 3;
    /// Title length upper bound
    pub const TITLE_MAX_LEN: usize = 100;

    /// Description length bounds (trimmed)
    pub const DESCRIPTION_MIN_LEN: usize = 10;
    /// Description length upper bound
    pub const DESCRIPTION_MAX_LEN: usize = 500;

    /// Servings bounds (inclusive)
    pub const SERVINGS_MIN: u32 = 1;
    /// Servings upper bound
    pub const SERVINGS_MAX: u32 = 20;

    /// Number of non-blank ingredient entries
    pub const INGREDIENTS_MIN_COUNT: usize = 2;
    /// Ingredient count upper bound
    pub const INGREDIENTS_MAX_COUNT: usize = 20;
    /// Single ingredient entry length bounds
    pub const INGREDIENT_MIN_LEN: usize = 2;
    /// Single ingredient entry upper bound
    pub const INGREDIENT_MAX_LEN: usize = 50;

    /// Number of non-blank instruction steps
    pub const INSTRUCTIONS_MIN_COUNT: usize = 2;
    /// Instruction count upper bound
    pub const INSTRUCTIONS_MAX_COUNT: usize = 15;
    /// Single instruction length bounds
    pub const INSTRUCTION_MIN_LEN: usize = 10;
    /// Single instruction upper bound
    pub const INSTRUCTION_MAX_LEN: usize = 200;

    /// Maximum number of tags
    pub const TAGS_MAX_COUNT: usize = 10;
    /// Single tag length bounds
    pub const TAG_MIN_LEN: usize = 2;
    /// Single tag upper bound
    pub const TAG_MAX_LEN: usize = 20;

    /// Maximum image size (10 MiB)
    pub const IMAGE_MAX_BYTES: u64 = 10 * 1024 * 1024;

    /// Suspicious tokens reported per field
    pub const NON_FOOD_REPORT_CAP: usize = 3;
    /// Tokens up to this length are ignored unless blocklisted
    pub const SUSPICIOUS_TOKEN_MIN_LEN: usize = 4;

    /// Confidence assigned to user-entered ingredients
    pub const MANUAL_CONFIDENCE: u8 = 100;
}

/// Recipe candidate defaults for missing upstream fields
pub mod recipe_defaults {
    /// Cook time shown when the provider omits `readyInMinutes`
    pub const DEFAULT_COOK_TIME_MINUTES: u32 = 30;

    /// Image shown when the provider omits `image`
    pub const PLACEHOLDER_IMAGE_URL: &str = "/images/recipe-placeholder.jpg";

    /// Number of recipes requested per refresh
    pub const DEFAULT_RESULT_COUNT: u32 = 6;

    /// Ready-time thresholds used to derive difficulty
    pub const EASY_MAX_MINUTES: u32 = 20;
    /// Upper bound for medium difficulty
    pub const MEDIUM_MAX_MINUTES: u32 = 45;

    /// Bounds for synthesized fallback counts
    pub const FALLBACK_MAX_MATCHED: u32 = 5;
    /// Most missing ingredients a fallback recipe reports
    pub const FALLBACK_MAX_MISSING: u32 = 4;
}

/// External service defaults
pub mod service_defaults {
    /// Spoonacular API base URL
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
    /// Spoonacular search-by-ingredients path
    pub const SPOONACULAR_SEARCH_PATH: &str = "/recipes/findByIngredients";

    /// Local recipe service base URL
    pub const LOCAL_RECIPE_SERVICE_URL: &str = "http://localhost:5000";
    /// Local recipe service search path
    pub const LOCAL_SEARCH_PATH: &str = "/recipes/by-ingredients";

    /// Fridge detection service base URL
    pub const DETECTION_SERVICE_URL: &str = "http://localhost:8000";
    /// Detection endpoint path
    pub const DETECTION_PATH: &str = "/detect";
    /// Detections below this confidence (0..=1) are ignored
    pub const DETECTION_MIN_CONFIDENCE: f64 = 0.4;

    /// Image upload service base URL
    pub const UPLOAD_SERVICE_URL: &str = "http://localhost:5000";
    /// Image upload path
    pub const UPLOAD_PATH: &str = "/upload";
    /// Multipart field name for recipe images
    pub const UPLOAD_FIELD_NAME: &str = "recipeImage";

    /// Recipe API base URL
    pub const RECIPE_API_URL: &str = "http://localhost:5000";
    /// Recipe creation path
    pub const RECIPE_CREATE_PATH: &str = "/recipes";

    /// Per-request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Service names used in logs and error context
pub mod service_names {
    /// Service name for structured logging
    pub const MOODBITES: &str = "moodbites";
    /// Primary recipe provider
    pub const SPOONACULAR: &str = "spoonacular";
    /// Secondary recipe provider
    pub const LOCAL_RECIPE_SERVICE: &str = "local-recipe-service";
    /// Fridge detection model server
    pub const DETECTION_SERVICE: &str = "detection-service";
    /// Image host
    pub const UPLOAD_SERVICE: &str = "upload-service";
    /// Recipe persistence API
    pub const RECIPE_API: &str = "recipe-api";
}
