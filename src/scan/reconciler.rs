// ABOUTME: Merges detected and manual ingredient lists into the combined view
// ABOUTME: Order is detected then manual; no cross-provenance de-duplication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use moodbites_core::models::Ingredient;

/// Combined ingredient list, detected entries first
#[must_use]
pub fn reconcile(detected: &[Ingredient], manual: &[Ingredient]) -> Vec<Ingredient> {
    let mut all = Vec::with_capacity(detected.len() + manual.len());
    all.extend_from_slice(detected);
    all.extend_from_slice(manual);
    all
}
