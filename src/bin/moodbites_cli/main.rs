// ABOUTME: MoodBites CLI - command-line front-end over the kitchen core library
// ABOUTME: Validates recipe forms, suggests recipes, scans fridge photos and uploads images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites
//!
//! Usage:
//! ```bash
//! # Check a recipe form without submitting it
//! moodbites-cli validate recipe.json --image dal.jpg
//!
//! # Validate, upload the image and create the recipe
//! moodbites-cli submit recipe.json --image dal.jpg
//!
//! # Recipe ideas for what is in the fridge
//! moodbites-cli suggest --ingredients tomato,onion,garlic
//!
//! # Detect ingredients in a fridge photo, add one by hand, then suggest recipes
//! moodbites-cli scan fridge.jpg --add basil
//!
//! # Host an image and print its URL
//! moodbites-cli upload dal.jpg
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use moodbites::config::MoodBitesConfig;
use moodbites::http_client::initialize_shared_client;

#[derive(Parser)]
#[command(
    name = "moodbites-cli",
    about = "MoodBites kitchen tools",
    long_about = "Validate recipe submissions, scan fridge photos and get recipe suggestions from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a recipe form stored as JSON
    Validate {
        /// Recipe form JSON file
        recipe: PathBuf,

        /// Recipe image to validate alongside the form
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Validate, upload the image and create the recipe
    Submit {
        /// Recipe form JSON file
        recipe: PathBuf,

        /// Recipe image
        #[arg(long)]
        image: PathBuf,
    },

    /// Suggest recipes for a list of ingredients
    Suggest {
        /// Comma-separated ingredient names
        #[arg(long, value_delimiter = ',', required = true)]
        ingredients: Vec<String>,
    },

    /// Detect ingredients in a fridge photo and suggest recipes
    Scan {
        /// Fridge photo
        image: PathBuf,

        /// Extra ingredients to add by hand (repeatable)
        #[arg(long = "add")]
        add: Vec<String>,
    },

    /// Upload an image to the hosting service
    Upload {
        /// Image file
        image: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = MoodBitesConfig::from_env()?;
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;
    initialize_shared_client(&config.http);
    debug!("MoodBites CLI configured");

    match cli.command {
        Command::Validate { recipe, image } => {
            commands::validate::run(&recipe, image.as_deref()).await?;
        }
        Command::Submit { recipe, image } => {
            commands::upload::submit(&config, &recipe, &image).await?;
        }
        Command::Suggest { ingredients } => {
            commands::suggest::run(&config, &ingredients).await;
        }
        Command::Scan { image, add } => {
            commands::scan::run(&config, &image, &add).await?;
        }
        Command::Upload { image } => {
            commands::upload::upload(&config, &image).await?;
        }
    }

    Ok(())
}
