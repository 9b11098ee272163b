// ABOUTME: Recipe form validation command for moodbites-cli
// ABOUTME: Prints every field result and fails when the form would be rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use std::path::Path;

use moodbites::errors::AppResult;
use moodbites::validation::RecipeValidator;
use tracing::info;

use crate::helpers::display::display_report;
use crate::helpers::files::load_submission;

/// Validate a recipe form file
pub async fn run(recipe: &Path, image: Option<&Path>) -> AppResult<()> {
    let submission = load_submission(recipe, image).await?;
    let report = RecipeValidator::default().validate_submission(&submission);

    display_report(&report);
    if report.is_valid() {
        info!(recipe = %recipe.display(), "Recipe form is valid");
    }
    report.into_result()
}
