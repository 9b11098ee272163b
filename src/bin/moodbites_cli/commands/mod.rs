// ABOUTME: Command modules for moodbites-cli
// ABOUTME: One module per subcommand group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

pub mod scan;
pub mod suggest;
pub mod upload;
pub mod validate;
