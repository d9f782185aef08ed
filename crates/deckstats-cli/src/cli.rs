//! CLI argument definitions and config resolution for deckstats.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use deckstats_core::Config;
use deckstats_core::config::normalize_extension;
use tracing::{debug, info};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "deckstats.toml";

#[derive(Parser)]
#[command(name = "deckstats")]
#[command(about = "Card game match history report", version)]
pub struct Args {
    /// Directory containing match history files
    #[arg(short, long, value_name = "DIR", env = "DECKSTATS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File extension of match history files
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Hide opponent decks and matchups with fewer games than this
    #[arg(long, value_name = "N")]
    pub min_games: Option<u32>,

    /// Leave mirror matchups out of deck winrates
    #[arg(long)]
    pub exclude_mirror: bool,

    /// Colour headings and winrates
    #[arg(long)]
    pub color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Load the config file, then apply command-line overrides.
    ///
    /// Without `--config`, `deckstats.toml` in `base_dir` is used if present.
    pub fn resolve_config(&self, base_dir: &Path) -> Result<Config> {
        let default_path = base_dir.join(DEFAULT_CONFIG_FILE);
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None if default_path.is_file() => load_config(&default_path)?,
            None => {
                debug!("No config file, using defaults");
                Config::default()
            }
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = normalize_extension(extension);
        }
        if let Some(min_games) = self.min_games {
            config.min_meta_count = min_games;
        }
        if self.exclude_mirror {
            config.include_mirror = false;
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Render a failure the way it is shown on stdout
pub fn format_error(error: &anyhow::Error) -> String {
    format!("Encountered error:\n  {:#}\n", error)
}
