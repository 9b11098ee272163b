// ABOUTME: File loading helpers for moodbites-cli
// ABOUTME: Reads recipe form JSON and image files with a MIME type guessed from the extension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use std::path::Path;

use moodbites::errors::{AppError, AppResult};
use moodbites::models::{ImageFile, RecipeSubmission};

/// MIME type for a file extension; unknown extensions are not images
pub fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Load an image from disk
pub async fn load_image(path: &Path) -> AppResult<ImageFile> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read image {}: {e}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_owned();
    Ok(ImageFile::new(file_name, guess_content_type(path), bytes))
}

/// Load a recipe form from JSON, attaching an optional image
pub async fn load_submission(path: &Path, image: Option<&Path>) -> AppResult<RecipeSubmission> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read recipe {}: {e}", path.display()))
    })?;
    let mut submission: RecipeSubmission = serde_json::from_str(&raw)?;
    if let Some(image_path) = image {
        submission.image = Some(load_image(image_path).await?);
    }
    Ok(submission)
}
