// ABOUTME: Ingredient model with confidence, category, and provenance tags
// ABOUTME: Ingredients are immutable once accepted into a scan session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::limits::MANUAL_CONFIDENCE;

/// Display category of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IngredientCategory {
    /// Fruit names (apple, banana, ...)
    Fruits,
    /// Vegetable names (tomato, onion, ...)
    Vegetables,
    /// Everything else found in a fridge
    #[default]
    Produce,
}

impl IngredientCategory {
    /// Human-readable label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Produce => "Produce",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an ingredient entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Found by the fridge detection model
    Detected,
    /// Typed in by the user
    Manual,
}

/// Detection box in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
    /// Right edge
    pub x2: f64,
    /// Bottom edge
    pub y2: f64,
}

impl BoundingBox {
    /// Build a box from the `[x1, y1, x2, y2]` array detection services return
    #[must_use]
    pub const fn from_corners(corners: [f64; 4]) -> Self {
        Self {
            x1: corners[0],
            y1: corners[1],
            x2: corners[2],
            y2: corners[3],
        }
    }

    /// Box area, zero for degenerate boxes
    #[must_use]
    pub fn area(&self) -> f64 {
        ((self.x2 - self.x1).max(0.0)) * ((self.y2 - self.y1).max(0.0))
    }
}

/// A single ingredient in a scan session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name
    pub name: String,
    /// Confidence in percent, 0..=100
    pub confidence: u8,
    /// Display category
    pub category: IngredientCategory,
    /// Origin of the entry
    pub provenance: Provenance,
    /// Detection box, only present for detected ingredients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

impl Ingredient {
    /// A user-entered ingredient, always fully confident
    #[must_use]
    pub fn manual(name: impl Into<String>, category: IngredientCategory) -> Self {
        Self {
            name: name.into(),
            confidence: MANUAL_CONFIDENCE,
            category,
            provenance: Provenance::Manual,
            bounding_box: None,
        }
    }

    /// A model-detected ingredient; confidence is clamped to 100
    #[must_use]
    pub fn detected(
        name: impl Into<String>,
        confidence: u8,
        category: IngredientCategory,
        bounding_box: Option<BoundingBox>,
    ) -> Self {
        Self {
            name: name.into(),
            confidence: confidence.min(100),
            category,
            provenance: Provenance::Detected,
            bounding_box,
        }
    }

    /// Whether this entry came from the detection model
    #[must_use]
    pub const fn is_detected(&self) -> bool {
        matches!(self.provenance, Provenance::Detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ingredient_is_fully_confident() {
        let ingredient = Ingredient::manual("basil", IngredientCategory::Produce);
        assert_eq!(ingredient.confidence, 100);
        assert_eq!(ingredient.provenance, Provenance::Manual);
        assert!(ingredient.bounding_box.is_none());
    }

    #[test]
    fn test_detected_confidence_is_clamped() {
        let ingredient = Ingredient::detected("apple", 180, IngredientCategory::Fruits, None);
        assert_eq!(ingredient.confidence, 100);
        assert!(ingredient.is_detected());
    }

    #[test]
    fn test_bounding_box_area() {
        let bbox = BoundingBox::from_corners([10.0, 10.0, 30.0, 20.0]);
        assert!((bbox.area() - 200.0).abs() < f64::EPSILON);

        let degenerate = BoundingBox::from_corners([30.0, 10.0, 10.0, 20.0]);
        assert!(degenerate.area().abs() < f64::EPSILON);
    }
}
