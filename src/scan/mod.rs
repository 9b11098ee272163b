// ABOUTME: Fridge scanning: detection, ingredient reconciliation and session lifecycle
// ABOUTME: Couples detected and manual ingredients with recipe refreshes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

/// Ingredient name to display category
pub mod categories;
/// Session driver over detector and refresher
pub mod controller;
/// Detection service client
pub mod detection;
/// Detected plus manual merge
pub mod reconciler;
/// Scan session state machine
pub mod session;

pub use categories::categorize;
pub use controller::ScanController;
pub use detection::{
    detections_to_ingredients, DetectionClient, DetectionResponse, IngredientDetector,
    RawDetection,
};
pub use reconciler::reconcile;
pub use session::{RefreshTicket, ScanSession, ScanState};
