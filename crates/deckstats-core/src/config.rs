//! Report configuration.
//!
//! Loaded from a TOML file; every field is optional and falls back to the
//! built-in defaults:
//!
//! ```toml
//! data_dir = "data"
//! extension = "txt"
//! min_meta_count = 1
//! include_mirror = true
//! factions = ["Rakano", "Combrei"]
//!
//! [[keywords]]
//! keyword = "Icaria"
//! faction = "Rakano"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::faction::{DEFAULT_FACTIONS, DEFAULT_KEYWORDS, FactionClassifier, FactionKeyword};
use crate::stats::StatsOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub extension: String,
    pub min_meta_count: u32,
    pub include_mirror: bool,
    pub factions: Vec<String>,
    pub keywords: Vec<FactionKeyword>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            extension: "txt".to_string(),
            min_meta_count: 1,
            include_mirror: true,
            factions: DEFAULT_FACTIONS.iter().map(|f| f.to_string()).collect(),
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|(k, f)| FactionKeyword::new(k, f))
                .collect(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(Error::read(path))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.extension = normalize_extension(&config.extension);
        config.validate()?;
        Ok(config)
    }

    /// Check that every keyword maps to a listed faction
    pub fn validate(&self) -> Result<()> {
        self.classifier().map(|_| ())
    }

    pub fn classifier(&self) -> Result<FactionClassifier> {
        FactionClassifier::new(self.factions.clone(), self.keywords.clone())
    }

    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions {
            min_meta_count: self.min_meta_count,
            include_mirror: self.include_mirror,
        }
    }
}

/// Strip leading dots so `.txt` and `txt` match the same files
pub fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}
