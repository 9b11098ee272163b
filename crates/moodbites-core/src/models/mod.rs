// ABOUTME: Domain models shared across the kitchen core
// ABOUTME: Re-exports ingredient, recipe candidate, and submission types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// Ingredients with provenance and categories
pub mod ingredient;
/// Recipe suggestions from search providers
pub mod recipe;
/// Recipe submission form and the payload sent upstream
pub mod submission;

pub use ingredient::{BoundingBox, Ingredient, IngredientCategory, Provenance};
pub use recipe::{Difficulty, RecipeCandidate, RecipeId, RecipeSource};
pub use submission::{ImageFile, Mood, RecipePayload, RecipeSubmission};
