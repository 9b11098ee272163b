// ABOUTME: Per-field validators for the recipe submission form
// ABOUTME: Each validator is a pure function returning an error message or None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Field Validators
//!
//! Validators never keep state: running one twice on the same input always
//! yields the same answer. Format-only validators are plain functions; the
//! list validators also take the [`KeywordClassifier`] that decides what
//! counts as food.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use moodbites_core::constants::limits::{
    DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN, IMAGE_MAX_BYTES, INGREDIENTS_MAX_COUNT,
    INGREDIENTS_MIN_COUNT, INGREDIENT_MAX_LEN, INGREDIENT_MIN_LEN, INSTRUCTIONS_MAX_COUNT,
    INSTRUCTIONS_MIN_COUNT, INSTRUCTION_MAX_LEN, INSTRUCTION_MIN_LEN, SERVINGS_MAX,
    SERVINGS_MIN, TAGS_MAX_COUNT, TAG_MAX_LEN, TAG_MIN_LEN, TITLE_MAX_LEN, TITLE_MIN_LEN,
};
use moodbites_core::models::{ImageFile, Mood};

use crate::text::KeywordClassifier;

static LETTERS_AND_SPACES: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").ok());

static COOK_TIME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 20 minutes, 1 hour, 45mins, 1.5 hrs
    Regex::new(r"(?i)^\d+(?:\.\d+)?\s*(?:minutes?|mins?|hours?|hrs?)$").ok()
});

static TAG_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 -]+$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Title: required, 3-100 characters, letters and spaces only
#[must_use]
pub fn validate_title(value: &str) -> Option<String> {
    let title = value.trim();
    if title.is_empty() {
        return Some("Title is required".to_owned());
    }
    if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&char_len(title)) {
        return Some(format!(
            "Title must be between {TITLE_MIN_LEN} and {TITLE_MAX_LEN} characters"
        ));
    }
    if !matches(&LETTERS_AND_SPACES, title) {
        return Some("Title can only contain letters and spaces".to_owned());
    }
    None
}

/// Description: required, 10-500 characters, letters and spaces only
#[must_use]
pub fn validate_description(value: &str) -> Option<String> {
    let description = value.trim();
    if description.is_empty() {
        return Some("Description is required".to_owned());
    }
    if !(DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&char_len(description)) {
        return Some(format!(
            "Description must be between {DESCRIPTION_MIN_LEN} and {DESCRIPTION_MAX_LEN} characters"
        ));
    }
    if !matches(&LETTERS_AND_SPACES, description) {
        return Some("Description can only contain letters and spaces".to_owned());
    }
    None
}

/// Cook time: `<number> minutes|mins|hours|hrs`, case-insensitive
#[must_use]
pub fn validate_cook_time(value: &str) -> Option<String> {
    let cook_time = value.trim();
    if cook_time.is_empty() {
        return Some("Cook time is required".to_owned());
    }
    if !matches(&COOK_TIME_PATTERN, cook_time) {
        return Some("Cook time must look like \"20 minutes\" or \"1 hour\"".to_owned());
    }
    None
}

/// Servings: required whole number between 1 and 20
#[must_use]
pub fn validate_servings(value: &str) -> Option<String> {
    let servings = value.trim();
    if servings.is_empty() {
        return Some("Servings is required".to_owned());
    }
    match servings.parse::<u32>() {
        Ok(count) if (SERVINGS_MIN..=SERVINGS_MAX).contains(&count) => None,
        _ => Some(format!(
            "Servings must be a whole number between {SERVINGS_MIN} and {SERVINGS_MAX}"
        )),
    }
}

/// Mood: required selection from [`Mood::ALL`]
#[must_use]
pub fn validate_mood(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Please select a mood".to_owned());
    }
    if Mood::parse(value).is_none() {
        return Some("Please select a valid mood".to_owned());
    }
    None
}

/// A single ingredient name, shared by the form and the fridge reconciler
#[must_use]
pub fn validate_ingredient_name(classifier: &KeywordClassifier, value: &str) -> Option<String> {
    let name = value.trim();
    if name.is_empty() {
        return Some("Ingredient name is required".to_owned());
    }
    if !(INGREDIENT_MIN_LEN..=INGREDIENT_MAX_LEN).contains(&char_len(name)) {
        return Some(format!(
            "Ingredient \"{name}\" must be between {INGREDIENT_MIN_LEN} and {INGREDIENT_MAX_LEN} characters"
        ));
    }
    if !classifier.has_food_signal(name) {
        return Some(format!("\"{name}\" does not look like a food ingredient"));
    }
    if let Some(term) = classifier.first_non_food_token(name) {
        return Some(format!(
            "Ingredient \"{name}\" contains a non-food term: \"{term}\""
        ));
    }
    None
}

/// Ingredient list: 2-20 non-blank entries, no duplicates, each a valid food
#[must_use]
pub fn validate_ingredients(classifier: &KeywordClassifier, values: &[String]) -> Option<String> {
    let entries = non_blank(values);
    if entries.len() < INGREDIENTS_MIN_COUNT {
        return Some(format!(
            "Please add at least {INGREDIENTS_MIN_COUNT} ingredients"
        ));
    }
    if entries.len() > INGREDIENTS_MAX_COUNT {
        return Some(format!(
            "You can add at most {INGREDIENTS_MAX_COUNT} ingredients"
        ));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = entries.iter().find(|entry| !seen.insert(**entry)) {
        return Some(format!("Duplicate ingredient: \"{duplicate}\""));
    }

    entries
        .iter()
        .find_map(|entry| validate_ingredient_name(classifier, entry))
}

/// Instruction list: 2-15 non-blank steps, each 10-200 characters about cooking or food
#[must_use]
pub fn validate_instructions(classifier: &KeywordClassifier, values: &[String]) -> Option<String> {
    let steps = non_blank(values);
    if steps.len() < INSTRUCTIONS_MIN_COUNT {
        return Some(format!(
            "Please add at least {INSTRUCTIONS_MIN_COUNT} instruction steps"
        ));
    }
    if steps.len() > INSTRUCTIONS_MAX_COUNT {
        return Some(format!(
            "You can add at most {INSTRUCTIONS_MAX_COUNT} instruction steps"
        ));
    }

    steps.iter().enumerate().find_map(|(index, step)| {
        let number = index + 1;
        if !(INSTRUCTION_MIN_LEN..=INSTRUCTION_MAX_LEN).contains(&char_len(step)) {
            return Some(format!(
                "Step {number} must be between {INSTRUCTION_MIN_LEN} and {INSTRUCTION_MAX_LEN} characters"
            ));
        }
        if !classifier.has_cooking_signal(step) && !classifier.has_food_signal(step) {
            return Some(format!(
                "Step {number} does not describe a cooking action"
            ));
        }
        classifier
            .first_non_food_token(step)
            .map(|term| format!("Step {number} contains a non-food term: \"{term}\""))
    })
}

/// Tags: optional, at most 10, each 2-20 alphanumeric/space/hyphen characters
#[must_use]
pub fn validate_tags(classifier: &KeywordClassifier, values: &[String]) -> Option<String> {
    let tags = non_blank(values);
    if tags.len() > TAGS_MAX_COUNT {
        return Some(format!("You can add at most {TAGS_MAX_COUNT} tags"));
    }

    tags.iter().find_map(|tag| {
        if !(TAG_MIN_LEN..=TAG_MAX_LEN).contains(&char_len(tag)) {
            return Some(format!(
                "Tag \"{tag}\" must be between {TAG_MIN_LEN} and {TAG_MAX_LEN} characters"
            ));
        }
        if !matches(&TAG_PATTERN, tag) {
            return Some(format!(
                "Tag \"{tag}\" can only contain letters, numbers, spaces and hyphens"
            ));
        }
        classifier
            .first_non_food_token(tag)
            .map(|term| format!("Tag \"{tag}\" contains a non-food term: \"{term}\""))
    })
}

/// Image: required, at most 10 MiB, MIME type `image/*`
#[must_use]
pub fn validate_image(image: Option<&ImageFile>) -> Option<String> {
    let Some(image) = image else {
        return Some("Please upload a recipe image".to_owned());
    };
    if image.size() > IMAGE_MAX_BYTES {
        return Some("Image must be 10MB or smaller".to_owned());
    }
    if !image.content_type.starts_with("image/") {
        return Some("Only image files are allowed".to_owned());
    }
    None
}
