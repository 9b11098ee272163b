// ABOUTME: Display category lookup for ingredient names
// ABOUTME: Fixed substring table, fruit names checked before vegetable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use moodbites_core::models::IngredientCategory;

const FRUIT_NAMES: &[&str] = &[
    "apple",
    "banana",
    "orange",
    "mango",
    "grape",
    "berry",
    "lemon",
    "lime",
    "peach",
    "pear",
    "plum",
    "cherry",
    "melon",
    "kiwi",
    "pineapple",
    "papaya",
    "guava",
    "pomegranate",
    "apricot",
    "fig",
    "coconut",
    "avocado",
];

const VEGETABLE_NAMES: &[&str] = &[
    "tomato",
    "onion",
    "potato",
    "carrot",
    "cabbage",
    "cauliflower",
    "broccoli",
    "spinach",
    "lettuce",
    "cucumber",
    "pepper",
    "capsicum",
    "chili",
    "garlic",
    "ginger",
    "peas",
    "bean",
    "corn",
    "eggplant",
    "brinjal",
    "okra",
    "radish",
    "beetroot",
    "pumpkin",
    "zucchini",
    "celery",
    "mushroom",
    "kale",
];

/// Category for an ingredient name
///
/// Matching is a case-insensitive substring test, so "Green Apple" is a
/// fruit and "cherry tomatoes" is a fruit too (fruits win ties).
#[must_use]
pub fn categorize(name: &str) -> IngredientCategory {
    let lowered = name.trim().to_lowercase();
    if FRUIT_NAMES.iter().any(|fruit| lowered.contains(fruit)) {
        IngredientCategory::Fruits
    } else if VEGETABLE_NAMES.iter().any(|veg| lowered.contains(veg)) {
        IngredientCategory::Vegetables
    } else {
        IngredientCategory::Produce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_known_names() {
        assert_eq!(categorize("Apple"), IngredientCategory::Fruits);
        assert_eq!(categorize("ripe bananas"), IngredientCategory::Fruits);
        assert_eq!(categorize("tomato"), IngredientCategory::Vegetables);
        assert_eq!(categorize("Red Onion"), IngredientCategory::Vegetables);
    }

    #[test]
    fn test_categorize_defaults_to_produce() {
        assert_eq!(categorize("paneer"), IngredientCategory::Produce);
        assert_eq!(categorize("milk"), IngredientCategory::Produce);
        assert_eq!(categorize(""), IngredientCategory::Produce);
    }

    #[test]
    fn test_fruit_wins_over_vegetable() {
        assert_eq!(categorize("cherry tomato"), IngredientCategory::Fruits);
    }

    #[test]
    fn test_peas_does_not_capture_peach() {
        assert_eq!(categorize("peach"), IngredientCategory::Fruits);
        assert_eq!(categorize("green peas"), IngredientCategory::Vegetables);
    }
}
