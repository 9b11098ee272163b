// ABOUTME: Drives a scan session against the detector and the recipe refresher
// ABOUTME: Scan, add-ingredient and on-demand refresh flows with stale-result protection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use std::sync::Arc;
use tracing::warn;

use moodbites_core::errors::AppResult;
use moodbites_core::models::{ImageFile, RecipeCandidate};

use super::detection::IngredientDetector;
use super::session::{RefreshTicket, ScanSession};
use crate::recipes::RecipeRefresher;

/// Scan session plus the services it talks to
pub struct ScanController {
    session: ScanSession,
    detector: Arc<dyn IngredientDetector>,
    refresher: Arc<RecipeRefresher>,
}

impl ScanController {
    /// Controller over a fresh session
    #[must_use]
    pub fn new(
        session: ScanSession,
        detector: Arc<dyn IngredientDetector>,
        refresher: Arc<RecipeRefresher>,
    ) -> Self {
        Self {
            session,
            detector,
            refresher,
        }
    }

    /// Session state and contents
    #[must_use]
    pub const fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Direct access for removals and reset
    pub fn session_mut(&mut self) -> &mut ScanSession {
        &mut self.session
    }

    /// Detect ingredients in a fridge photo, then fetch recipes for them
    ///
    /// # Errors
    ///
    /// Returns the detector error (the session goes back to idle), or
    /// `InvalidStateTransition` if a scan already produced results.
    pub async fn scan_image(&mut self, image: &ImageFile) -> AppResult<&[RecipeCandidate]> {
        self.session.begin_scan()?;

        let detected = match self.detector.detect(image).await {
            Ok(detected) => detected,
            Err(e) => {
                warn!(error = %e, "Fridge scan failed");
                self.session.fail_scan()?;
                return Err(e);
            }
        };

        let ticket = self.session.complete_scan(detected)?;
        self.run_refresh(ticket).await;
        Ok(self.session.suggested_recipes())
    }

    /// Add a user-entered ingredient and refresh recipes
    ///
    /// # Errors
    ///
    /// Returns the rejection from [`ScanSession::add_manual`]; nothing is
    /// fetched in that case.
    pub async fn add_manual_ingredient(&mut self, name: &str) -> AppResult<&[RecipeCandidate]> {
        let ticket = self.session.add_manual(name)?;
        self.run_refresh(ticket).await;
        Ok(self.session.suggested_recipes())
    }

    /// Refresh recipes for the current list, e.g. after removals
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` before a scan completed.
    pub async fn refresh_recipes(&mut self) -> AppResult<&[RecipeCandidate]> {
        let ticket = self.session.begin_refresh()?;
        self.run_refresh(ticket).await;
        Ok(self.session.suggested_recipes())
    }

    async fn run_refresh(&mut self, ticket: RefreshTicket) {
        let recipes = self.refresher.fetch_recipes(ticket.ingredients()).await;
        self.session.apply_refresh(ticket, recipes);
    }
}
