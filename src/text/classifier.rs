// ABOUTME: Keyword classifier deciding whether free text is about food and cooking
// ABOUTME: Finds suspicious non-food tokens for field validators and the cross-field guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use regex::Regex;
use std::sync::LazyLock;

use moodbites_core::constants::limits::{NON_FOOD_REPORT_CAP, SUSPICIOUS_TOKEN_MIN_LEN};

use super::tokenizer::{normalize_token, tokenize};
use super::vocabulary::Vocabulary;

/// Cooking phrases that carry no single cooking verb
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static COOKING_PHRASE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "low flame", "bring to a boil", "pressure cooker", "let it rest"
    Regex::new(
        r"\b(?:(?:low|medium|high)\s+(?:flame|heat)|bring\s+(?:it\s+)?to\s+(?:a\s+)?boil|pressure[\s-]+cook(?:er|ed|ing)?|let\s+it\s+(?:rest|cool|sit))\b",
    )
    .ok()
});

static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2, 1.5, 1/2, 10-12, tsp, 200g, 2tbsp, 500ml, 100-150g
    Regex::new(r"^(?:\d+(?:[./]\d+)?(?:-\d+(?:[./]\d+)?)?(?:tsp|tbsp|cups?|ml|l|g|kg|mg|cm|mm)?|tsp|tbsp|cups?|ml|l|g|kg|mg|cm|mm)$")
        .ok()
});

/// Allow/deny heuristic over an injected [`Vocabulary`]
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    vocabulary: Vocabulary,
}

impl KeywordClassifier {
    /// Build a classifier over the given word lists
    #[must_use]
    pub const fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Word lists in use
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// True iff any token of `text` is a known food term
    #[must_use]
    pub fn has_food_signal(&self, text: &str) -> bool {
        tokenize(text)
            .iter()
            .any(|token| self.vocabulary.is_food(normalize_token(token)))
    }

    /// True iff any token is a cooking verb or the text contains a cooking phrase
    #[must_use]
    pub fn has_cooking_signal(&self, text: &str) -> bool {
        let has_verb = tokenize(text)
            .iter()
            .any(|token| self.vocabulary.is_cooking_verb(normalize_token(token)));
        if has_verb {
            return true;
        }

        let lowered = text.to_lowercase();
        COOKING_PHRASE_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&lowered))
    }

    /// Suspicious tokens in `text`, deduplicated, first-seen order, at most three
    ///
    /// Quantities, units, food terms, cooking verbs, descriptive words and
    /// stopwords are skipped. Remaining tokens longer than three characters are
    /// reported; blocklisted tokens are reported whatever their length.
    #[must_use]
    pub fn find_non_food_tokens(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();

        for raw in tokenize(text) {
            if found.len() >= NON_FOOD_REPORT_CAP {
                break;
            }
            let token = normalize_token(&raw);
            if token.is_empty() || found.iter().any(|seen| seen == token) {
                continue;
            }
            if self.is_suspicious(token) {
                found.push(token.to_owned());
            }
        }

        found
    }

    /// First suspicious token, if any
    #[must_use]
    pub fn first_non_food_token(&self, text: &str) -> Option<String> {
        self.find_non_food_tokens(text).into_iter().next()
    }

    fn is_suspicious(&self, token: &str) -> bool {
        if self.vocabulary.is_blocked(token) {
            return true;
        }
        if is_quantity(token)
            || self.vocabulary.is_food(token)
            || self.vocabulary.is_cooking_verb(token)
            || self.vocabulary.is_allowed_descriptive(token)
            || self.vocabulary.is_stopword(token)
        {
            return false;
        }
        token.chars().count() >= SUSPICIOUS_TOKEN_MIN_LEN
    }
}

fn is_quantity(token: &str) -> bool {
    QUANTITY_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::default()
    }

    #[test]
    fn test_food_signal() {
        let classifier = classifier();
        assert!(classifier.has_food_signal("2 cups chopped tomato"));
        assert!(classifier.has_food_signal("Tomatoes."));
        assert!(!classifier.has_food_signal("blue laptop case"));
        assert!(!classifier.has_food_signal(""));
    }

    #[test]
    fn test_cooking_signal_from_verbs() {
        let classifier = classifier();
        assert!(classifier.has_cooking_signal("Fry them until soft"));
        assert!(!classifier.has_cooking_signal("Wait patiently"));
    }

    #[test]
    fn test_cooking_signal_from_phrases() {
        let classifier = classifier();
        assert!(classifier.has_cooking_signal("Keep on LOW FLAME for a while"));
        assert!(classifier.has_cooking_signal("Bring to a boil"));
        assert!(classifier.has_cooking_signal("Pressure cook for three whistles"));
        assert!(classifier.has_cooking_signal("Let it rest before slicing"));
        assert!(classifier.has_cooking_signal("let it sit overnight"));
    }

    #[test]
    fn test_non_food_tokens_include_blocklisted() {
        let found = classifier().find_non_food_tokens("fry the laptop with onions");
        assert!(found.contains(&"laptop".to_owned()));
    }

    #[test]
    fn test_short_blocklisted_tokens_are_reported() {
        let found = classifier().find_non_food_tokens("wash the car");
        assert_eq!(found, vec!["car"]);
    }

    #[test]
    fn test_short_unknown_tokens_are_ignored() {
        assert!(classifier().find_non_food_tokens("zap the rice").is_empty());
    }

    #[test]
    fn test_quantities_and_units_are_skipped() {
        let found = classifier().find_non_food_tokens("2 cups rice, 200g paneer, 1.5 tbsp ghee, 1/2 tsp salt");
        assert!(found.is_empty(), "unexpected tokens: {found:?}");
    }

    #[test]
    fn test_numeric_ranges_are_quantities() {
        let classifier = classifier();
        for text in [
            "1-2 green chillies",
            "Cook for 10-12 minutes",
            "100-150g paneer",
            "1.5-2 cups",
        ] {
            let found = classifier.find_non_food_tokens(text);
            assert!(found.is_empty(), "{text}: unexpected tokens {found:?}");
        }
        assert_eq!(classifier.find_non_food_tokens("10-laptop"), vec!["10-laptop"]);
    }

    #[test]
    fn test_pressure_cooker_is_a_cooking_phrase() {
        let classifier = classifier();
        assert!(classifier.has_cooking_signal("Use a pressure cooker for three whistles"));
        assert!(classifier.has_cooking_signal("Pressure-cooked dal"));
        assert!(!classifier.has_cooking_signal("Pressure the team"));
    }

    #[test]
    fn test_non_food_tokens_are_deduplicated_and_capped() {
        let found = classifier()
            .find_non_food_tokens("laptop laptop keyboard spreadsheet monitor printer");
        assert_eq!(found, vec!["laptop", "keyboard", "spreadsheet"]);
    }

    #[test]
    fn test_sentence_punctuation_does_not_create_tokens() {
        let found = classifier().find_non_food_tokens("Chop the tomato and onion finely.");
        assert!(found.is_empty(), "unexpected tokens: {found:?}");
    }

    #[test]
    fn test_custom_vocabulary_is_respected() {
        let vocabulary = Vocabulary::empty().with_food_keywords(["jackfruit"]);
        let classifier = KeywordClassifier::new(vocabulary);

        assert!(classifier.has_food_signal("ripe jackfruit"));
        assert!(!classifier.has_food_signal("ripe tomato"));
        assert_eq!(classifier.find_non_food_tokens("ripe tomato"), vec!["ripe", "tomato"]);
    }
}
