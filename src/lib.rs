// ABOUTME: Main library entry point for the MoodBites kitchen core
// ABOUTME: Recipe text validation, fridge scan sessions and tiered recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

#![deny(unsafe_code)]

//! # MoodBites
//!
//! Client-side logic of the MoodBites diet and wellness app:
//!
//! - **Food-content validation** of free-text recipe submissions, built on
//!   a keyword classifier over a curated vocabulary
//! - **Fridge scanning**: detected and manual ingredients reconciled in a
//!   scan session, with recipe suggestions refreshed through a three-tier
//!   provider chain that always produces results
//! - **Recipe submission**: validate, host the image, then create the recipe
//!
//! Detection, image hosting, recipe search and recipe storage are external
//! HTTP services.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use moodbites::text::KeywordClassifier;
//!
//! let classifier = KeywordClassifier::default();
//! assert!(classifier.has_food_signal("2 cups chopped tomato"));
//! assert_eq!(
//!     classifier.find_non_food_tokens("fry the laptop with onions"),
//!     vec!["laptop".to_owned()]
//! );
//! ```

/// Environment-driven configuration
pub mod config;

/// Shared HTTP client
pub mod http_client;

/// Tracing subscriber setup
pub mod logging;

/// Recipe suggestion tiers and the refresh orchestrator
pub mod recipes;

/// Fridge scan sessions, detection and reconciliation
pub mod scan;

/// Tokenizer, vocabulary and keyword classifier
pub mod text;

/// Image upload and recipe submission clients
pub mod upload;

/// Recipe form validation
pub mod validation;

/// Error taxonomy, re-exported from `moodbites-core`
pub use moodbites_core::errors;

/// Limits and service defaults, re-exported from `moodbites-core`
pub use moodbites_core::constants;

/// Domain models, re-exported from `moodbites-core`
pub use moodbites_core::models;
