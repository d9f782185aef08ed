//! Match-history files.
//!
//! The first line of a file names the player's deck. Each following line is
//! one game, either `RESULT,OPPONENT` or `ORDER,RESULT,OPPONENT`:
//!
//! ```text
//! Rakano Warcry
//! W,Stonescar Burn
//! P,L,Combrei Midrange
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::game::{Game, Outcome, TurnOrder};

/// All games from a single history file.
#[derive(Debug, Clone)]
pub struct MatchHistory {
    pub source: PathBuf,
    pub deck: Arc<str>,
    pub games: Vec<Game>,
}

impl MatchHistory {
    /// Load and parse a history file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(Error::read(path))?;
        let history = Self::parse(path, &content)?;
        debug!(
            "Parsed {} games for {:?} from {}",
            history.games.len(),
            history.deck,
            path.display()
        );
        Ok(history)
    }

    /// Parse history content. `source` is only used in error messages.
    pub fn parse<P: AsRef<Path>>(source: P, content: &str) -> Result<Self> {
        let source = source.as_ref();
        let mut lines = content.lines();
        let deck: Arc<str> = Arc::from(lines.next().unwrap_or_default());
        let mut games = Vec::new();

        for line in lines {
            if line.is_empty() {
                continue;
            }
            games.push(parse_game(source, &deck, line)?);
        }

        Ok(Self {
            source: source.to_path_buf(),
            deck,
            games,
        })
    }
}

fn parse_game(source: &Path, deck: &Arc<str>, line: &str) -> Result<Game> {
    let fields: Vec<&str> = line.split(',').collect();
    let (order, result, opponent) = match fields.as_slice() {
        [result, opponent] => ("U", *result, *opponent),
        [order, result, opponent] => (*order, *result, *opponent),
        _ => {
            return Err(Error::InvalidLine {
                path: source.to_path_buf(),
                line: line.to_string(),
            });
        }
    };

    let outcome: Outcome = result.parse().map_err(|_| Error::InvalidOutcome {
        path: source.to_path_buf(),
        line: line.to_string(),
    })?;
    let turn_order: TurnOrder = order.parse().map_err(|_| Error::InvalidTurnOrder {
        path: source.to_path_buf(),
        line: line.to_string(),
    })?;

    Ok(Game {
        player_deck: Arc::clone(deck),
        opponent_deck: Arc::from(opponent),
        outcome,
        turn_order,
    })
}

/// Load every non-hidden history file with the given extension in `dir`,
/// in path order.
pub fn load_directory<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<MatchHistory>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir).map_err(Error::read(dir))? {
        let path = entry.map_err(Error::read(dir))?.path();
        if path.extension().is_none_or(|ext| ext != extension) {
            continue;
        }
        // hidden files such as editor scratch copies
        if path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'))
        {
            continue;
        }
        if !path.is_file() {
            warn!("Skipping non-file entry {}", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    debug!("Found {} history files in {}", paths.len(), dir.display());
    paths.iter().map(MatchHistory::load).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<MatchHistory> {
        MatchHistory::parse("data/test.txt", content)
    }

    #[test]
    fn test_parse_two_field_lines() {
        let history = parse("Rakano Warcry\nW,Stonescar Burn\nL,Combrei Midrange\n").unwrap();

        assert_eq!(&*history.deck, "Rakano Warcry");
        assert_eq!(history.games.len(), 2);
        assert_eq!(&*history.games[0].opponent_deck, "Stonescar Burn");
        assert_eq!(history.games[0].outcome, Outcome::Win);
        assert_eq!(history.games[0].turn_order, TurnOrder::Unknown);
        assert_eq!(history.games[1].outcome, Outcome::Loss);
        assert_eq!(&*history.games[1].player_deck, "Rakano Warcry");
    }

    #[test]
    fn test_parse_three_field_lines() {
        let history = parse("Feln Control\nP,W,Rakano Warcry\nD,L,Rakano Warcry\nU,W,Xenan\n").unwrap();

        let orders: Vec<TurnOrder> = history.games.iter().map(|g| g.turn_order).collect();
        assert_eq!(
            orders,
            vec![TurnOrder::Play, TurnOrder::Draw, TurnOrder::Unknown]
        );
    }

    #[test]
    fn test_parse_skips_empty_lines_and_crlf() {
        let history = parse("Deck\r\n\r\nW,Feln\r\n\nL,Xenan").unwrap();
        assert_eq!(&*history.deck, "Deck");
        assert_eq!(history.games.len(), 2);
        assert_eq!(&*history.games[1].opponent_deck, "Xenan");
    }

    #[test]
    fn test_parse_empty_content() {
        let history = parse("").unwrap();
        assert!(history.deck.is_empty());
        assert!(history.games.is_empty());
    }

    #[test]
    fn test_invalid_field_count() {
        let err = parse("Deck\nW\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLine { .. }));
        assert_eq!(
            err.to_string(),
            "Found invalid line in file \"data/test.txt\": W"
        );

        let err = parse("Deck\nP,W,Feln,extra\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLine { .. }));
    }

    #[test]
    fn test_invalid_outcome() {
        let err = parse("Deck\nX,Feln\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Found invalid win/loss in file \"data/test.txt\": X,Feln"
        );
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = MatchHistory::load("no/such/history.txt").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("no/such/history.txt"));
    }

    #[test]
    fn test_outcome_checked_before_turn_order() {
        let err = parse("Deck\nQ,X,Feln\n").unwrap_err();
        assert!(matches!(err, Error::InvalidOutcome { .. }));

        let err = parse("Deck\nQ,W,Feln\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Found invalid play/draw in file \"data/test.txt\": Q,W,Feln"
        );
    }
}
