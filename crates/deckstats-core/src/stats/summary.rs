use crate::game::{Record, percentage};

use super::StatsOptions;

/// Win/loss tally with derived losses and winrate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub games: u32,
}

impl WinLoss {
    pub fn losses(&self) -> u32 {
        self.games - self.wins
    }

    pub fn winrate(&self) -> f64 {
        percentage(self.wins, self.games)
    }

    fn add(&mut self, wins: u32, losses: u32) {
        self.wins += wins;
        self.games += wins + losses;
    }
}

/// Everything the report shows for one of the player's decks.
#[derive(Debug, Clone)]
pub struct DeckSummary<'a> {
    pub deck: &'a str,
    pub total: WinLoss,
    pub play: WinLoss,
    pub draw: WinLoss,
    /// Best matchup first
    pub matchups: Vec<&'a Record>,
}

impl<'a> DeckSummary<'a> {
    /// Summarise a deck's matchups, or `None` if none survive filtering.
    pub fn build<I>(deck: &'a str, opponents: I, options: &StatsOptions) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut total = WinLoss::default();
        let mut play = WinLoss::default();
        let mut draw = WinLoss::default();
        let mut matchups = Vec::new();

        for record in opponents {
            if !options.include_mirror && &*record.opponent_deck == deck {
                continue;
            }
            if record.count() < options.min_meta_count {
                continue;
            }
            total.add(record.wins(), record.losses());
            play.add(record.play_wins(), record.play_losses());
            draw.add(record.draw_wins(), record.draw_losses());
            matchups.push(record);
        }

        if total.games == 0 {
            return None;
        }

        matchups.sort_by(|a, b| {
            b.player_percentage()
                .total_cmp(&a.player_percentage())
                .then_with(|| b.wins().cmp(&a.wins()))
                .then_with(|| a.opponent_deck.cmp(&b.opponent_deck))
        });

        Some(Self {
            deck,
            total,
            play,
            draw,
            matchups,
        })
    }
}
