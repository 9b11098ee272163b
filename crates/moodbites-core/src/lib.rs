// ABOUTME: Core types and constants for the MoodBites kitchen platform
// ABOUTME: Foundation crate with error handling, domain models, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

#![deny(unsafe_code)]

//! # MoodBites Core
//!
//! Foundation crate providing shared types and constants for the MoodBites
//! kitchen platform. This crate is designed to change infrequently so the
//! heavier root crate can be rebuilt incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Form limits, placeholder values, and service defaults
//! - **models**: Ingredients, recipe candidates, and recipe submissions

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Ingredient, `RecipeCandidate`, `RecipeSubmission`)
pub mod models;
