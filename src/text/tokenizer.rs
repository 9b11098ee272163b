// ABOUTME: Free-text tokenizer used by the food keyword classifier
// ABOUTME: Lowercases, strips punctuation except dots and hyphens, and splits on whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// Split free text into normalized word tokens
///
/// Lowercases the input, replaces every character other than letters,
/// digits, whitespace, `.` and `-` with a space, then splits on whitespace.
/// Empty input yields an empty vector.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '.' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Strip sentence punctuation left on a token by [`tokenize`]
///
/// `"finely."` becomes `"finely"`, `"-"` becomes `""`; inner dots such as
/// `"1.5"` are kept.
#[must_use]
pub fn normalize_token(token: &str) -> &str {
    token.trim_matches(|c| c == '.' || c == '-')
}
