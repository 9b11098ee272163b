// ABOUTME: Recipe image hosting and recipe creation clients
// ABOUTME: Upload errors surface the service message verbatim; nothing is posted after a failed upload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Recipe Submission
//!
//! ```text
//! validate form ──> POST {upload}/upload (multipart "recipeImage") ──> { image_url }
//!                                   │
//!                                   └──> POST {recipe_api}/recipes (JSON with image_url)
//! ```
//!
//! Failures are returned once, without retry.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use moodbites_core::constants::service_defaults::UPLOAD_FIELD_NAME;
use moodbites_core::errors::{AppError, AppResult};
use moodbites_core::models::{ImageFile, RecipeId, RecipePayload, RecipeSubmission};

use crate::config::UploadServiceConfig;
use crate::http_client::shared_client;
use crate::validation::{validate_image, FormField, RecipeValidator};

/// Body returned by the upload service and the recipe API
#[derive(Debug, Default, Deserialize)]
struct ServiceReply {
    #[serde(default, alias = "imageUrl")]
    image_url: Option<String>,
    #[serde(default, alias = "_id")]
    id: Option<RecipeId>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a non-success reply into `UploadFailed`, keeping the service message
async fn rejection(response: Response, fallback: &str) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ServiceReply>(&body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| describe_status(fallback, status));
    AppError::upload_failed(message)
}

fn describe_status(what: &str, status: StatusCode) -> String {
    format!("{what} (HTTP {})", status.as_u16())
}

fn transport_error(error: reqwest::Error) -> AppError {
    AppError::upload_failed(error.to_string()).with_source(error)
}

/// Client for the image hosting service
pub struct ImageUploadClient {
    config: UploadServiceConfig,
    http_client: reqwest::Client,
}

impl ImageUploadClient {
    /// Client over the shared HTTP pool
    #[must_use]
    pub fn new(config: UploadServiceConfig) -> Self {
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

    /// Upload an image and return its hosted URL
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for a non-image or oversized file, and
    /// `UploadFailed` for anything the service or transport rejects.
    pub async fn upload(&self, image: &ImageFile) -> AppResult<String> {
        if let Some(message) = validate_image(Some(image)) {
            return Err(AppError::validation(FormField::Image.as_str(), message));
        }

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(transport_error)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .http_client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(rejection(response, "Image upload failed").await);
        }

        let reply: ServiceReply = response.json().await.map_err(transport_error)?;
        let image_url = reply
            .image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::upload_failed("Upload response did not include an image URL"))?;

        info!(file = %image.file_name, bytes = image.size(), "Recipe image uploaded");
        Ok(image_url)
    }
}

/// Result of a successful recipe submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedRecipe {
    /// Id assigned by the recipe API, when it reports one
    pub id: Option<RecipeId>,
    /// The body that was posted
    pub payload: RecipePayload,
}

/// Validate, upload and create a recipe
pub struct RecipeSubmitter {
    validator: Arc<RecipeValidator>,
    uploader: ImageUploadClient,
    config: UploadServiceConfig,
    http_client: reqwest::Client,
}

impl RecipeSubmitter {
    /// Submitter over the shared HTTP pool
    #[must_use]
    pub fn new(validator: Arc<RecipeValidator>, config: UploadServiceConfig) -> Self {
        Self {
            validator,
            uploader: ImageUploadClient::new(config.clone()),
            config,
            http_client: shared_client().clone(),
        }
    }

    /// Use a specific HTTP client for both the upload and the recipe post
    #[must_use]
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.uploader = self.uploader.with_http_client(http_client.clone());
        self.http_client = http_client;
        self
    }

    /// Submit a recipe form
    ///
    /// # Errors
    ///
    /// Returns the first field error or `NonFoodContent` before any network
    /// call, then `UploadFailed` if the upload or recipe creation is rejected.
    pub async fn submit(&self, submission: &RecipeSubmission) -> AppResult<SubmittedRecipe> {
        let started = Instant::now();
        self.validator.validate_submission(submission).into_result()?;

        let image = submission.image.as_ref().ok_or_else(|| {
            AppError::validation(FormField::Image.as_str(), "Please upload a recipe image")
        })?;

        let image_url = match self.uploader.upload(image).await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Recipe image upload failed, nothing posted");
                return Err(e);
            }
        };

        let payload = self.validator.prepare_payload(submission, image_url)?;

        let response = self
            .http_client
            .post(self.config.recipe_create_url())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(rejection(response, "Recipe could not be saved").await);
        }

        let reply: ServiceReply = response.json().await.unwrap_or_default();

        info!(
            title = %payload.title,
            mood = %payload.mood.as_str(),
            duration_ms = started.elapsed().as_millis(),
            "Recipe submitted"
        );

        Ok(SubmittedRecipe {
            id: reply.id,
            payload,
        })
    }
}
