// ABOUTME: Recipe submission validation built on the keyword classifier
// ABOUTME: Field-level validators plus the whole-form report and cross-field guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// Pure per-field validators
pub mod fields;
/// Whole-form validation and payload preparation
pub mod submission;

pub use fields::{
    validate_cook_time, validate_description, validate_image, validate_ingredient_name,
    validate_ingredients, validate_instructions, validate_mood, validate_servings, validate_tags,
    validate_title,
};
pub use submission::{FormField, RecipeValidator, SubmissionReport, ValidationResult};
