// ABOUTME: Recipe candidates suggested for a set of fridge ingredients
// ABOUTME: Candidates are regenerated wholesale on every refresh and never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::recipe_defaults::{EASY_MAX_MINUTES, MEDIUM_MAX_MINUTES};

/// Which tier of the refresh chain produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    /// Primary Spoonacular-compatible search API
    Spoonacular,
    /// Secondary in-house recipe service
    LocalService,
    /// Synthesized placeholder recipes
    Fallback,
}

impl RecipeSource {
    /// Stable name for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spoonacular => "spoonacular",
            Self::LocalService => "local_service",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream recipe identifier; providers use numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    /// Numeric id (Spoonacular)
    Numeric(u64),
    /// Opaque string id
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Cooking difficulty shown on recipe cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Quick recipes
    Easy,
    /// Moderate effort
    Medium,
    /// Long or involved recipes
    Hard,
}

impl Difficulty {
    /// Derive difficulty from total ready time
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        if minutes <= EASY_MAX_MINUTES {
            Self::Easy
        } else if minutes <= MEDIUM_MAX_MINUTES {
            Self::Medium
        } else {
            Self::Hard
        }
    }
}

/// A recipe suggestion ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// Provider recipe id
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Ready time in minutes
    pub cook_time_minutes: u32,
    /// Calories per serving, `None` when the provider did not report them
    pub calories: Option<u32>,
    /// Derived difficulty
    pub difficulty: Difficulty,
    /// Image URL or placeholder
    pub image_url: String,
    /// Fridge ingredients the recipe uses
    pub matched_ingredient_count: u32,
    /// All ingredients the recipe needs
    pub total_ingredient_count: u32,
    /// Ingredients the user still has to buy
    pub missing_ingredient_count: u32,
    /// Tier that produced this candidate
    pub source_provider: RecipeSource,
}

impl RecipeCandidate {
    /// Fraction of required ingredients already in the fridge
    #[must_use]
    pub fn match_ratio(&self) -> f64 {
        if self.total_ingredient_count == 0 {
            return 0.0;
        }
        f64::from(self.matched_ingredient_count) / f64::from(self.total_ingredient_count)
    }
}
