// ABOUTME: Image upload and recipe submission commands for moodbites-cli
// ABOUTME: Thin wrappers over the upload and submission clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use std::path::Path;
use std::sync::Arc;

use moodbites::config::MoodBitesConfig;
use moodbites::errors::AppResult;
use moodbites::upload::{ImageUploadClient, RecipeSubmitter};
use moodbites::validation::RecipeValidator;

use crate::helpers::files::{load_image, load_submission};

/// Upload an image and print its hosted URL
pub async fn upload(config: &MoodBitesConfig, image: &Path) -> AppResult<()> {
    let file = load_image(image).await?;
    let url = ImageUploadClient::new(config.upload.clone())
        .upload(&file)
        .await?;
    println!("{url}");
    Ok(())
}

/// Validate, upload and create a recipe
pub async fn submit(config: &MoodBitesConfig, recipe: &Path, image: &Path) -> AppResult<()> {
    let submission = load_submission(recipe, Some(image)).await?;
    let submitted = RecipeSubmitter::new(Arc::new(RecipeValidator::default()), config.upload.clone())
        .submit(&submission)
        .await?;

    println!("\nRecipe \"{}\" submitted", submitted.payload.title);
    if let Some(id) = submitted.id {
        println!("   id: {id}");
    }
    println!("   image: {}", submitted.payload.image_url);
    Ok(())
}
