// ABOUTME: Recipe submission form values and the payload posted to the recipe API
// ABOUTME: Form fields stay as raw text so validators see exactly what the user typed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Mood a recipe is meant to help with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Celebrate a good day
    Happy,
    /// Comfort food
    Sad,
    /// Calming ingredients
    Stressed,
    /// Grounding meals
    Anxious,
    /// Energy boost
    Tired,
    /// Keep the momentum
    Energetic,
    /// Light and easy
    Relaxed,
    /// Brain food
    Focused,
}

impl Mood {
    /// Every selectable mood, in display order
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Stressed,
        Self::Anxious,
        Self::Tired,
        Self::Energetic,
        Self::Relaxed,
        Self::Focused,
    ];

    /// Form value for this mood
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Anxious => "anxious",
            Self::Tired => "tired",
            Self::Energetic => "energetic",
            Self::Relaxed => "relaxed",
            Self::Focused => "focused",
        }
    }

    /// Parse a form selection, case-insensitive
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image picked in the submission form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name
    pub file_name: String,
    /// MIME type reported by the picker
    pub content_type: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Build an image from raw parts
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// File size in bytes
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Raw values of the recipe submission form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSubmission {
    /// Recipe title
    pub title: String,
    /// Short description
    pub description: String,
    /// Free-text cook time such as "20 minutes"
    pub cook_time: String,
    /// Servings as typed
    #[serde(deserialize_with = "string_or_number")]
    pub servings: String,
    /// Selected mood
    pub mood: String,
    /// Ingredient lines, blanks allowed
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps, blanks allowed
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Optional tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Picked image; attached by the caller, never serialized
    #[serde(skip)]
    pub image: Option<ImageFile>,
}

impl RecipeSubmission {
    /// Ingredient lines with blank entries removed
    pub fn filled_ingredients(&self) -> impl Iterator<Item = &str> {
        non_blank(&self.ingredients)
    }

    /// Instruction steps with blank entries removed
    pub fn filled_instructions(&self) -> impl Iterator<Item = &str> {
        non_blank(&self.instructions)
    }

    /// Tags with blank entries removed
    pub fn filled_tags(&self) -> impl Iterator<Item = &str> {
        non_blank(&self.tags)
    }
}

fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Recipe body posted to the recipe API after the image is hosted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePayload {
    /// Trimmed title
    pub title: String,
    /// Trimmed description
    pub description: String,
    /// Cook time as entered
    pub cook_time: String,
    /// Parsed servings
    pub servings: u32,
    /// Selected mood
    pub mood: Mood,
    /// Non-blank ingredient lines
    pub ingredients: Vec<String>,
    /// Non-blank instruction steps
    pub instructions: Vec<String>,
    /// Non-blank tags
    pub tags: Vec<String>,
    /// Hosted image URL
    pub image_url: String,
}

/// Accept `"2"` and `2` alike for numeric form fields
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_is_case_insensitive() {
        assert_eq!(Mood::parse("Happy"), Some(Mood::Happy));
        assert_eq!(Mood::parse("  TIRED "), Some(Mood::Tired));
        assert_eq!(Mood::parse("hangry"), None);
        assert_eq!(Mood::parse(""), None);
    }

    #[test]
    fn test_submission_accepts_numeric_servings() {
        let json = r#"{
            "title": "Soup",
            "description": "Warm soup",
            "cook_time": "20 minutes",
            "servings": 4,
            "mood": "sad"
        }"#;
        let submission: RecipeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.servings, "4");
        assert!(submission.ingredients.is_empty());
        assert!(submission.image.is_none());
    }

    #[test]
    fn test_filled_entries_skip_blanks() {
        let submission = RecipeSubmission {
            ingredients: vec!["tomato".into(), "   ".into(), String::new(), " onion ".into()],
            ..RecipeSubmission::default()
        };
        let filled: Vec<&str> = submission.filled_ingredients().collect();
        assert_eq!(filled, vec!["tomato", "onion"]);
    }
}
