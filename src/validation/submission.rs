// ABOUTME: Whole-form recipe validation with the cross-field non-food guard
// ABOUTME: Produces one ValidationResult per field plus the aggregate guard outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use moodbites_core::errors::{AppError, AppResult};
use moodbites_core::models::{Mood, RecipePayload, RecipeSubmission};

use super::fields::{
    validate_cook_time, validate_description, validate_image, validate_ingredient_name,
    validate_ingredients, validate_instructions, validate_mood, validate_servings, validate_tags,
    validate_title,
};
use crate::text::KeywordClassifier;

/// Fields of the recipe submission form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Recipe title
    Title,
    /// Short description
    Description,
    /// Cook time text
    CookTime,
    /// Servings count
    Servings,
    /// Mood selection
    Mood,
    /// Ingredient lines
    Ingredients,
    /// Instruction steps
    Instructions,
    /// Tags
    Tags,
    /// Recipe image
    Image,
}

impl FormField {
    /// Every field in display order
    pub const ALL: [Self; 9] = [
        Self::Title,
        Self::Description,
        Self::CookTime,
        Self::Servings,
        Self::Mood,
        Self::Ingredients,
        Self::Instructions,
        Self::Tags,
        Self::Image,
    ];

    /// Form key for this field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::CookTime => "cook_time",
            Self::Servings => "servings",
            Self::Mood => "mood",
            Self::Ingredients => "ingredients",
            Self::Instructions => "instructions",
            Self::Tags => "tags",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one field; recomputed on every edit, never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Field that was checked
    pub field: FormField,
    /// Error message, `None` when the field is valid
    pub error: Option<String>,
}

impl ValidationResult {
    /// Whether the field passed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// All field results plus the cross-field guard outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// One result per form field, display order
    pub results: Vec<ValidationResult>,
    /// Terms the cross-field guard rejected
    pub non_food_terms: Vec<String>,
}

impl SubmissionReport {
    /// Every field passed and the guard found nothing
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.non_food_terms.is_empty() && self.results.iter().all(ValidationResult::is_valid)
    }

    /// Error for a specific field
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.results
            .iter()
            .find(|result| result.field == field)
            .and_then(|result| result.error.as_deref())
    }

    /// Failing fields with their messages
    pub fn errors(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.results
            .iter()
            .filter_map(|result| result.error.as_deref().map(|error| (result.field, error)))
    }

    /// Convert to a result: the first field error wins, then the guard
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for the first failing field (all failures are
    /// listed in the details) or `NonFoodContent` when only the guard failed.
    pub fn into_result(self) -> AppResult<()> {
        let failures: Vec<(FormField, &str)> = self.errors().collect();
        if let Some((field, message)) = failures.first() {
            let details: serde_json::Map<String, serde_json::Value> = failures
                .iter()
                .map(|(field, message)| (field.as_str().to_owned(), (*message).into()))
                .collect();
            return Err(AppError::validation(field.as_str(), *message)
                .with_details(serde_json::Value::Object(details)));
        }
        if !self.non_food_terms.is_empty() {
            return Err(AppError::non_food_content(&self.non_food_terms));
        }
        Ok(())
    }
}

/// Recipe form validator over an injected classifier
#[derive(Debug, Clone, Default)]
pub struct RecipeValidator {
    classifier: KeywordClassifier,
}

impl RecipeValidator {
    /// Build a validator around a classifier
    #[must_use]
    pub const fn new(classifier: KeywordClassifier) -> Self {
        Self { classifier }
    }

    /// Classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }

    /// Validate a single field, as done on every edit
    #[must_use]
    pub fn validate_field(&self, field: FormField, submission: &RecipeSubmission) -> ValidationResult {
        let error = match field {
            FormField::Title => validate_title(&submission.title),
            FormField::Description => validate_description(&submission.description),
            FormField::CookTime => validate_cook_time(&submission.cook_time),
            FormField::Servings => validate_servings(&submission.servings),
            FormField::Mood => validate_mood(&submission.mood),
            FormField::Ingredients => validate_ingredients(&self.classifier, &submission.ingredients),
            FormField::Instructions => {
                validate_instructions(&self.classifier, &submission.instructions)
            }
            FormField::Tags => validate_tags(&self.classifier, &submission.tags),
            FormField::Image => validate_image(submission.image.as_ref()),
        };
        ValidationResult { field, error }
    }

    /// Standalone single-ingredient check
    #[must_use]
    pub fn validate_ingredient_name(&self, name: &str) -> Option<String> {
        validate_ingredient_name(&self.classifier, name)
    }

    /// Non-food terms across title, description, ingredients, instructions and tags
    ///
    /// This runs even when each field passed on its own, catching
    /// combinations that look fine per field.
    #[must_use]
    pub fn non_food_guard(&self, submission: &RecipeSubmission) -> Vec<String> {
        let combined = [submission.title.as_str(), submission.description.as_str()]
            .into_iter()
            .chain(submission.ingredients.iter().map(String::as_str))
            .chain(submission.instructions.iter().map(String::as_str))
            .chain(submission.tags.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        self.classifier.find_non_food_tokens(&combined)
    }

    /// Validate every field and run the cross-field guard
    #[must_use]
    pub fn validate_submission(&self, submission: &RecipeSubmission) -> SubmissionReport {
        let results: Vec<ValidationResult> = FormField::ALL
            .into_iter()
            .map(|field| self.validate_field(field, submission))
            .collect();
        let non_food_terms = self.non_food_guard(submission);

        debug!(
            failed_fields = results.iter().filter(|result| !result.is_valid()).count(),
            non_food_terms = non_food_terms.len(),
            "Validated recipe submission"
        );

        SubmissionReport {
            results,
            non_food_terms,
        }
    }

    /// Validate and build the payload posted once the image is hosted
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or `NonFoodContent` from the guard.
    pub fn prepare_payload(
        &self,
        submission: &RecipeSubmission,
        image_url: impl Into<String>,
    ) -> AppResult<RecipePayload> {
        self.validate_submission(submission).into_result()?;

        let servings = submission
            .servings
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::validation(FormField::Servings.as_str(), "Invalid servings"))?;
        let mood = Mood::parse(&submission.mood)
            .ok_or_else(|| AppError::validation(FormField::Mood.as_str(), "Invalid mood"))?;

        Ok(RecipePayload {
            title: submission.title.trim().to_owned(),
            description: submission.description.trim().to_owned(),
            cook_time: submission.cook_time.trim().to_owned(),
            servings,
            mood,
            ingredients: submission.filled_ingredients().map(str::to_owned).collect(),
            instructions: submission.filled_instructions().map(str::to_owned).collect(),
            tags: submission.filled_tags().map(str::to_owned).collect(),
            image_url: image_url.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_snake_case() {
        assert_eq!(FormField::CookTime.as_str(), "cook_time");
        let json = serde_json::to_string(&FormField::CookTime).unwrap();
        assert_eq!(json, "\"cook_time\"");
    }

    #[test]
    fn test_empty_form_fails_every_required_field() {
        let report = RecipeValidator::default().validate_submission(&RecipeSubmission::default());

        assert!(!report.is_valid());
        assert_eq!(report.results.len(), FormField::ALL.len());
        assert!(report.error_for(FormField::Tags).is_none());
        assert!(report.error_for(FormField::Title).is_some());
        assert!(report.error_for(FormField::Image).is_some());
    }
}
