// ABOUTME: Helper modules for moodbites-cli
// ABOUTME: File loading and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

pub mod display;
pub mod files;
