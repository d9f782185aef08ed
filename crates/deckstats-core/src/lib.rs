pub mod config;
pub mod error;
pub mod faction;
pub mod game;
pub mod history;
pub mod report;
pub mod stats;

pub use config::Config;
pub use error::{Error, Result};
pub use faction::{FactionClassifier, FactionKeyword};
pub use game::{Game, Outcome, Record, TurnOrder};
pub use history::{MatchHistory, load_directory};
pub use report::{ReportStyle, format_report};
pub use stats::{DeckSummary, FactionCount, MetaEntry, Statistics, StatsOptions, WinLoss};
