use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Found invalid line in file \"{}\": {line}", .path.display())]
    InvalidLine { path: PathBuf, line: String },

    #[error("Found invalid win/loss in file \"{}\": {line}", .path.display())]
    InvalidOutcome { path: PathBuf, line: String },

    #[error("Found invalid play/draw in file \"{}\": {line}", .path.display())]
    InvalidTurnOrder { path: PathBuf, line: String },

    #[error("Keyword \"{keyword}\" maps to unknown faction \"{faction}\"")]
    UnknownFaction { keyword: String, faction: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Failed to read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach the path being read to an I/O error
    pub fn read(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Read { path, source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
