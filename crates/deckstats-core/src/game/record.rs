use std::sync::Arc;

use super::{Outcome, TurnOrder};

/// A single recorded game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub player_deck: Arc<str>,
    pub opponent_deck: Arc<str>,
    pub outcome: Outcome,
    pub turn_order: TurnOrder,
}

impl Game {
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }
}

/// Win/loss record between a player deck and an opponent deck.
///
/// Records in the meta table hold games from every player deck; there
/// `player_deck` is the deck that first faced the opponent.
#[derive(Debug, Clone)]
pub struct Record {
    pub player_deck: Arc<str>,
    pub opponent_deck: Arc<str>,
    pub games: Vec<Game>,
}

impl Record {
    pub fn new(player_deck: Arc<str>, opponent_deck: Arc<str>) -> Self {
        Self {
            player_deck,
            opponent_deck,
            games: Vec::new(),
        }
    }

    pub fn push(&mut self, game: Game) {
        self.games.push(game);
    }

    fn tally(&self, win: bool, order: Option<TurnOrder>) -> u32 {
        self.games
            .iter()
            .filter(|g| g.is_win() == win && order.is_none_or(|o| g.turn_order == o))
            .count() as u32
    }

    pub fn wins(&self) -> u32 {
        self.tally(true, None)
    }

    pub fn losses(&self) -> u32 {
        self.tally(false, None)
    }

    pub fn play_wins(&self) -> u32 {
        self.tally(true, Some(TurnOrder::Play))
    }

    pub fn play_losses(&self) -> u32 {
        self.tally(false, Some(TurnOrder::Play))
    }

    pub fn draw_wins(&self) -> u32 {
        self.tally(true, Some(TurnOrder::Draw))
    }

    pub fn draw_losses(&self) -> u32 {
        self.tally(false, Some(TurnOrder::Draw))
    }

    pub fn count(&self) -> u32 {
        self.games.len() as u32
    }

    /// Player winrate in percent (0.0 when no games are recorded)
    pub fn player_percentage(&self) -> f64 {
        percentage(self.wins(), self.count())
    }

    /// Opponent winrate in percent (0.0 when no games are recorded)
    pub fn opponent_percentage(&self) -> f64 {
        percentage(self.losses(), self.count())
    }
}

/// `part * 100 / total`, or 0.0 for an empty total.
pub fn percentage(part: impl Into<f64>, total: impl Into<f64>) -> f64 {
    let total = total.into();
    if total == 0.0 {
        0.0
    } else {
        part.into() * 100.0 / total
    }
}
