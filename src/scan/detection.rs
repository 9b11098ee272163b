// ABOUTME: Fridge photo ingredient detection over the external detection service
// ABOUTME: Posts the image as multipart and turns labelled boxes into Detected ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Ingredient Detection
//!
//! ```text
//! POST {base_url}/detect   (multipart, field "image")
//! { "detections": [ { "label": "tomato", "confidence": 0.91,
//!                     "bbox": [12.0, 40.5, 88.0, 120.0] } ] }
//! ```
//!
//! Detections under the configured confidence are dropped and repeated
//! labels collapse into one ingredient carrying the best score and its box.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use moodbites_core::constants::service_names;
use moodbites_core::errors::{AppError, AppResult};
use moodbites_core::models::{BoundingBox, ImageFile, Ingredient};

use super::categories::categorize;
use crate::config::DetectionServiceConfig;
use crate::http_client::shared_client;

/// Multipart field carrying the photo
pub const DETECTION_FIELD_NAME: &str = "image";

/// Response body of the detection service
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionResponse {
    /// Every labelled box found in the photo
    #[serde(default)]
    pub detections: Vec<RawDetection>,
}

/// One labelled box
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetection {
    /// Class label, e.g. "tomato"
    pub label: String,
    /// Score in 0..1; values above 1 are read as percentages
    pub confidence: f64,
    /// `[x1, y1, x2, y2]` in pixels
    #[serde(default)]
    pub bbox: Option<[f64; 4]>,
}

impl RawDetection {
    fn score(&self) -> f64 {
        let score = if self.confidence > 1.0 {
            self.confidence / 100.0
        } else {
            self.confidence
        };
        score.clamp(0.0, 1.0)
    }
}

/// Filter, merge and convert raw detections
///
/// Output keeps the order in which labels first appear.
#[must_use]
pub fn detections_to_ingredients(
    detections: Vec<RawDetection>,
    min_confidence: f64,
) -> Vec<Ingredient> {
    let mut best: Vec<(String, f64, Option<[f64; 4]>)> = Vec::new();

    for detection in detections {
        let label = detection.label.trim().to_lowercase();
        let score = detection.score();
        if label.is_empty() || !score.is_finite() || score < min_confidence {
            continue;
        }
        match best.iter_mut().find(|(existing, _, _)| *existing == label) {
            Some(entry) if score > entry.1 => {
                entry.1 = score;
                entry.2 = detection.bbox;
            }
            Some(_) => {}
            None => best.push((label, score, detection.bbox)),
        }
    }

    best.into_iter()
        .map(|(label, score, bbox)| {
            let confidence = (score * 100.0).round().clamp(0.0, 100.0) as u8;
            let category = categorize(&label);
            Ingredient::detected(label, confidence, category, bbox.map(BoundingBox::from_corners))
        })
        .collect()
}

/// Source of detected ingredients for a fridge photo
#[async_trait]
pub trait IngredientDetector: Send + Sync {
    /// Detect ingredients in the image
    async fn detect(&self, image: &ImageFile) -> AppResult<Vec<Ingredient>>;
}

/// HTTP client for the detection service
pub struct DetectionClient {
    config: DetectionServiceConfig,
    http_client: reqwest::Client,
}

impl DetectionClient {
    /// Client over the shared HTTP pool
    #[must_use]
    pub fn new(config: DetectionServiceConfig) -> Self {
        Self {
            config,
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
impl IngredientDetector for DetectionClient {
    async fn detect(&self, image: &ImageFile) -> AppResult<Vec<Ingredient>> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| AppError::invalid_input(format!("Invalid image type: {e}")))?;
        let form = Form::new().part(DETECTION_FIELD_NAME, part);

        let response = self
            .http_client
            .post(self.config.detect_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::from(e).with_service(service_names::DETECTION_SERVICE))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                service_names::DETECTION_SERVICE,
                format!(
                    "HTTP {}: {}",
                    status,
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let body: DetectionResponse = response.json().await.map_err(|e| {
            AppError::external_service(
                service_names::DETECTION_SERVICE,
                format!("JSON parse error: {e}"),
            )
        })?;

        let raw = body.detections.len();
        let ingredients = detections_to_ingredients(body.detections, self.config.min_confidence);
        debug!(raw, kept = ingredients.len(), "Detection response parsed");
        info!(ingredients = ingredients.len(), "Fridge photo analysed");

        Ok(ingredients)
    }
}
