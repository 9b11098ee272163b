// ABOUTME: Text analysis for recipe submissions and ingredient names
// ABOUTME: Tokenizer, curated vocabulary, and the food/non-food keyword classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// Food/cooking/non-food keyword heuristic
pub mod classifier;
/// Free-text tokenizer
pub mod tokenizer;
/// Curated word lists
pub mod vocabulary;

pub use classifier::KeywordClassifier;
pub use tokenizer::{normalize_token, tokenize};
pub use vocabulary::Vocabulary;
