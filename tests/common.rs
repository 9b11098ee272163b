// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides form fixtures, in-memory providers and a local axum server helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `moodbites`

use async_trait::async_trait;
use axum::Router;
use moodbites::errors::{AppError, AppResult};
use moodbites::models::{
    Difficulty, ImageFile, Ingredient, RecipeCandidate, RecipeId, RecipeSource, RecipeSubmission,
};
use moodbites::recipes::{RecipeQuery, RecipeSearchProvider};
use moodbites::scan::IngredientDetector;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Small JPEG-looking image
pub fn test_image() -> ImageFile {
    ImageFile::new("dal.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
}

/// The tomato and onion form that passes every check
pub fn valid_submission() -> RecipeSubmission {
    RecipeSubmission {
        title: "Tomato Onion Fry".to_owned(),
        description: "A quick and tasty tomato onion dish".to_owned(),
        cook_time: "20 minutes".to_owned(),
        servings: "2".to_owned(),
        mood: "happy".to_owned(),
        ingredients: vec!["tomato".to_owned(), "onion".to_owned()],
        instructions: vec![
            "Chop the tomato and onion finely.".to_owned(),
            "Fry them in oil until soft.".to_owned(),
        ],
        tags: vec!["vegetarian".to_owned()],
        image: Some(test_image()),
    }
}

/// Candidate as a remote tier would return it
pub fn candidate(id: u64, title: &str, source: RecipeSource) -> RecipeCandidate {
    RecipeCandidate {
        id: RecipeId::Numeric(id),
        title: title.to_owned(),
        cook_time_minutes: 25,
        calories: Some(300),
        difficulty: Difficulty::Medium,
        image_url: format!("https://img.example/{id}.jpg"),
        matched_ingredient_count: 2,
        total_ingredient_count: 4,
        missing_ingredient_count: 2,
        source_provider: source,
    }
}

// ============================================================================
// In-memory collaborators
// ============================================================================

/// What a mock provider does when asked
pub enum MockBehavior {
    /// Return these recipes
    Recipes(Vec<RecipeCandidate>),
    /// Fail with an external service error
    Fail,
    /// Never answer within any reasonable timeout
    Hang,
}

/// Recipe search provider with scripted behaviour and call tracking
pub struct MockProvider {
    name: &'static str,
    source: RecipeSource,
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_query: Mutex<Option<RecipeQuery>>,
}

impl MockProvider {
    pub fn new(name: &'static str, source: RecipeSource, behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            name,
            source,
            behavior,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<RecipeQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSearchProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn source(&self) -> RecipeSource {
        self.source
    }

    async fn search_by_ingredients(&self, query: &RecipeQuery) -> AppResult<Vec<RecipeCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        match &self.behavior {
            MockBehavior::Recipes(recipes) => Ok(recipes.clone()),
            MockBehavior::Fail => Err(AppError::external_service(self.name, "HTTP 503")),
            MockBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
        }
    }
}

/// Detector returning a fixed list, or failing when given `None`
pub struct MockDetector {
    result: Option<Vec<Ingredient>>,
    calls: AtomicUsize,
}

impl MockDetector {
    pub fn returning(ingredients: Vec<Ingredient>) -> Arc<Self> {
        Arc::new(Self {
            result: Some(ingredients),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IngredientDetector for MockDetector {
    async fn detect(&self, _image: &ImageFile) -> AppResult<Vec<Ingredient>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().ok_or_else(|| {
            AppError::service_unavailable("detection-service", "connection refused")
        })
    }
}

// ============================================================================
// Local HTTP servers
// ============================================================================

/// Serve `app` on an ephemeral localhost port and return its base URL
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// HTTP client with short timeouts for tests
pub fn test_http_client() -> reqwest::Client {
    moodbites::http_client::build_client(5, 2)
}
