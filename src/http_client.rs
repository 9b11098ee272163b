// ABOUTME: Shared HTTP client used by the recipe, detection and upload clients
// ABOUTME: Process-wide pooled client with timeouts taken from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use moodbites_core::constants::service_defaults::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS};

use crate::config::HttpClientConfig;

/// Configured `(timeout, connect_timeout)` in seconds
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record timeouts for the shared client
///
/// Call once at startup before any client is built. Later calls, or calls
/// after [`shared_client`] has run, have no effect.
pub fn initialize_shared_client(config: &HttpClientConfig) {
    let _ = CLIENT_TIMEOUTS.set((config.timeout_secs, config.connect_timeout_secs));
}

/// Pooled HTTP client, built on first use
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((HTTP_TIMEOUT_SECS, HTTP_CONNECT_TIMEOUT_SECS));
        build_client(timeout, connect_timeout)
    })
}

/// Standalone client with explicit timeouts, mostly for tests
#[must_use]
pub fn build_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
