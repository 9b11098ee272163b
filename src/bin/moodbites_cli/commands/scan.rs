// ABOUTME: Fridge scan command for moodbites-cli
// ABOUTME: Detects ingredients in a photo, applies manual additions and shows suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use std::path::Path;
use std::sync::Arc;

use moodbites::config::MoodBitesConfig;
use moodbites::errors::AppResult;
use moodbites::recipes::RecipeRefresher;
use moodbites::scan::{DetectionClient, ScanController, ScanSession};
use moodbites::validation::RecipeValidator;
use tracing::warn;

use crate::helpers::display::{display_ingredients, display_recipes};
use crate::helpers::files::load_image;

/// Scan a fridge photo
pub async fn run(config: &MoodBitesConfig, image: &Path, additions: &[String]) -> AppResult<()> {
    let photo = load_image(image).await?;

    let mut controller = ScanController::new(
        ScanSession::new(Arc::new(RecipeValidator::default())),
        Arc::new(DetectionClient::new(config.detection.clone())),
        Arc::new(RecipeRefresher::from_config(config)),
    );

    controller.scan_image(&photo).await?;

    for name in additions {
        // A rejected name should not abort the remaining additions
        if let Err(e) = controller.add_manual_ingredient(name).await {
            warn!(ingredient = %name, error = %e, "Ingredient not added");
            println!("   Skipped \"{name}\": {}", e.message);
        }
    }

    display_ingredients(controller.session().all_ingredients());
    display_recipes(controller.session().suggested_recipes());
    Ok(())
}
