// ABOUTME: Fridge scan session state machine holding detected and manual ingredients
// ABOUTME: Issues generation-stamped refresh tickets so stale recipe results are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Scan Session
//!
//! ```text
//! Idle --begin_scan--> Scanning --complete_scan--> Results --add/remove--> Managing
//!   ^                     |                                                  |
//!   +------fail_scan------+--------------------reset-------------------------+
//! ```
//!
//! Recipe refreshes are split into [`ScanSession::begin_refresh`], which hands
//! out a [`RefreshTicket`] with a snapshot of the ingredients, and
//! [`ScanSession::apply_refresh`], which only accepts the results if the
//! ticket is still current. A reset bumps the generation, so a refresh that
//! was in flight across a reset is discarded on arrival.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use moodbites_core::errors::{AppError, AppResult};
use moodbites_core::models::{Ingredient, RecipeCandidate};

use super::categories::categorize;
use super::reconciler::reconcile;
use crate::validation::{FormField, RecipeValidator};

/// Lifecycle state of a scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    /// Nothing scanned yet
    #[default]
    Idle,
    /// Waiting on the detection service
    Scanning,
    /// Detection results shown
    Results,
    /// User has edited the ingredient list
    Managing,
}

impl ScanState {
    /// Lowercase state name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::Results => "results",
            Self::Managing => "managing",
        }
    }

    const fn has_results(self) -> bool {
        matches!(self, Self::Results | Self::Managing)
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission to apply one recipe refresh
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshTicket {
    generation: u64,
    sequence: u64,
    ingredients: Vec<Ingredient>,
}

impl RefreshTicket {
    /// Ingredient snapshot to search with
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Session generation the ticket was issued in
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// One fridge scan and the recipe suggestions built from it
#[derive(Debug, Clone)]
pub struct ScanSession {
    validator: Arc<RecipeValidator>,
    state: ScanState,
    detected: Vec<Ingredient>,
    manual: Vec<Ingredient>,
    all: Vec<Ingredient>,
    suggested_recipes: Vec<RecipeCandidate>,
    generation: u64,
    issued_sequence: u64,
    applied_sequence: u64,
    pending_sequence: Option<u64>,
}

impl ScanSession {
    /// Fresh idle session
    #[must_use]
    pub fn new(validator: Arc<RecipeValidator>) -> Self {
        Self {
            validator,
            state: ScanState::Idle,
            detected: Vec::new(),
            manual: Vec::new(),
            all: Vec::new(),
            suggested_recipes: Vec::new(),
            generation: 0,
            issued_sequence: 0,
            applied_sequence: 0,
            pending_sequence: None,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Ingredients found by the detection model
    #[must_use]
    pub fn detected_ingredients(&self) -> &[Ingredient] {
        &self.detected
    }

    /// Ingredients typed in by the user
    #[must_use]
    pub fn manual_ingredients(&self) -> &[Ingredient] {
        &self.manual
    }

    /// Detected followed by manual ingredients
    #[must_use]
    pub fn all_ingredients(&self) -> &[Ingredient] {
        &self.all
    }

    /// Latest applied recipe suggestions
    #[must_use]
    pub fn suggested_recipes(&self) -> &[RecipeCandidate] {
        &self.suggested_recipes
    }

    /// Incremented on every reset
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the most recently issued refresh has not been applied yet
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.pending_sequence.is_some()
    }

    /// Start waiting on the detection service
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the session is idle.
    pub fn begin_scan(&mut self) -> AppResult<()> {
        self.expect_state(ScanState::Idle, "begin_scan")?;
        self.state = ScanState::Scanning;
        Ok(())
    }

    /// Accept detection results and request the first refresh
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless a scan is in progress.
    pub fn complete_scan(&mut self, detected: Vec<Ingredient>) -> AppResult<RefreshTicket> {
        self.expect_state(ScanState::Scanning, "complete_scan")?;
        info!(detected = detected.len(), "Fridge scan completed");
        self.detected = detected;
        self.recompute();
        self.state = ScanState::Results;
        Ok(self.issue_ticket())
    }

    /// Abandon a scan that failed
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless a scan is in progress.
    pub fn fail_scan(&mut self) -> AppResult<()> {
        self.expect_state(ScanState::Scanning, "fail_scan")?;
        self.state = ScanState::Idle;
        Ok(())
    }

    /// Validate and append a user-entered ingredient
    ///
    /// The name is trimmed, checked with the shared ingredient validator and
    /// rejected if another manual entry has the same name ignoring case.
    /// Detected entries are not consulted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for a rejected name, `ResourceAlreadyExists`
    /// for a duplicate, or `InvalidStateTransition` before a scan completed.
    pub fn add_manual(&mut self, name: &str) -> AppResult<RefreshTicket> {
        self.expect_results("add_manual")?;

        let name = name.trim();
        if let Some(message) = self.validator.validate_ingredient_name(name) {
            return Err(AppError::validation(FormField::Ingredients.as_str(), message));
        }

        let lowered = name.to_lowercase();
        if self
            .manual
            .iter()
            .any(|existing| existing.name.to_lowercase() == lowered)
        {
            return Err(AppError::already_exists(format!("Ingredient \"{name}\"")));
        }

        self.manual.push(Ingredient::manual(name, categorize(name)));
        self.recompute();
        self.state = ScanState::Managing;
        debug!(ingredient = name, total = self.all.len(), "Manual ingredient added");

        Ok(self.issue_ticket())
    }

    /// Remove a manual ingredient by position; recipes are left as they are
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a bad index or `InvalidStateTransition`
    /// before a scan completed.
    pub fn remove_manual(&mut self, index: usize) -> AppResult<Ingredient> {
        self.expect_results("remove_manual")?;
        if index >= self.manual.len() {
            return Err(AppError::not_found(format!("Manual ingredient {index}")));
        }
        let removed = self.manual.remove(index);
        self.recompute();
        self.state = ScanState::Managing;
        Ok(removed)
    }

    /// Remove a detected ingredient by position; recipes are left as they are
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a bad index or `InvalidStateTransition`
    /// before a scan completed.
    pub fn remove_detected(&mut self, index: usize) -> AppResult<Ingredient> {
        self.expect_results("remove_detected")?;
        if index >= self.detected.len() {
            return Err(AppError::not_found(format!("Detected ingredient {index}")));
        }
        let removed = self.detected.remove(index);
        self.recompute();
        self.state = ScanState::Managing;
        Ok(removed)
    }

    /// Drop everything and return to idle
    pub fn reset(&mut self) {
        self.detected.clear();
        self.manual.clear();
        self.all.clear();
        self.suggested_recipes.clear();
        self.pending_sequence = None;
        self.generation += 1;
        self.state = ScanState::Idle;
        debug!(generation = self.generation, "Scan session reset");
    }

    /// Request a refresh for the current ingredient list
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` before a scan completed.
    pub fn begin_refresh(&mut self) -> AppResult<RefreshTicket> {
        self.expect_results("begin_refresh")?;
        Ok(self.issue_ticket())
    }

    /// Apply refresh results if the ticket is still current
    ///
    /// Returns `false` when the results were discarded: the ticket predates
    /// a reset, or a newer refresh has already been applied.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, recipes: Vec<RecipeCandidate>) -> bool {
        if ticket.generation != self.generation || ticket.sequence <= self.applied_sequence {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                sequence = ticket.sequence,
                "Discarding stale recipe refresh"
            );
            return false;
        }

        self.applied_sequence = ticket.sequence;
        if self.pending_sequence == Some(ticket.sequence) {
            self.pending_sequence = None;
        }
        self.suggested_recipes = recipes;
        true
    }

    fn issue_ticket(&mut self) -> RefreshTicket {
        self.issued_sequence += 1;
        self.pending_sequence = Some(self.issued_sequence);
        RefreshTicket {
            generation: self.generation,
            sequence: self.issued_sequence,
            ingredients: self.all.clone(),
        }
    }

    fn recompute(&mut self) {
        self.all = reconcile(&self.detected, &self.manual);
    }

    fn expect_state(&self, expected: ScanState, action: &str) -> AppResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(AppError::invalid_state(format!(
                "Cannot {action} while {}",
                self.state
            )))
        }
    }

    fn expect_results(&self, action: &str) -> AppResult<()> {
        if self.state.has_results() {
            Ok(())
        } else {
            Err(AppError::invalid_state(format!(
                "Cannot {action} while {}",
                self.state
            )))
        }
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(Arc::new(RecipeValidator::default()))
    }
}
