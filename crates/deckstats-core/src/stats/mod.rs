//! Aggregation of match histories into meta, faction and per-deck statistics.

mod summary;

pub use summary::*;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::info;

use crate::faction::FactionClassifier;
use crate::game::{Game, Record};
use crate::history::MatchHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    /// Matchups with fewer games than this are left out of the report
    pub min_meta_count: u32,
    /// Count games where the opponent played the same deck
    pub include_mirror: bool,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            min_meta_count: 1,
            include_mirror: true,
        }
    }
}

/// One row of the opponent meta table.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaEntry<'a> {
    pub deck: &'a str,
    pub count: u32,
    /// Share of all counted games, in percent
    pub representation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactionCount<'a> {
    pub faction: &'a str,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct Statistics {
    options: StatsOptions,
    classifier: FactionClassifier,
    faction_counts: Vec<u32>,
    meta: HashMap<Arc<str>, Record>,
    records: BTreeMap<Arc<str>, HashMap<Arc<str>, Record>>,
}

impl Statistics {
    pub fn new(classifier: FactionClassifier, options: StatsOptions) -> Self {
        Self {
            options,
            faction_counts: vec![0; classifier.factions().len()],
            classifier,
            meta: HashMap::new(),
            records: BTreeMap::new(),
        }
    }

    pub fn from_histories<'a, I>(
        histories: I,
        classifier: FactionClassifier,
        options: StatsOptions,
    ) -> Self
    where
        I: IntoIterator<Item = &'a MatchHistory>,
    {
        let mut stats = Self::new(classifier, options);
        for history in histories {
            stats.add_history(history);
        }
        info!(
            "Aggregated {} games across {} player decks and {} opponent decks",
            stats.meta.values().map(Record::count).sum::<u32>(),
            stats.records.len(),
            stats.meta.len()
        );
        stats
    }

    pub fn add_history(&mut self, history: &MatchHistory) {
        for game in &history.games {
            self.add_game(game.clone());
        }
    }

    pub fn add_game(&mut self, game: Game) {
        let player = Arc::clone(&game.player_deck);
        let opponent = Arc::clone(&game.opponent_deck);

        if let Some(index) = self.classifier.classify(&opponent) {
            self.faction_counts[index] += 1;
        }

        self.meta
            .entry(Arc::clone(&opponent))
            .or_insert_with(|| Record::new(Arc::clone(&player), Arc::clone(&opponent)))
            .push(game.clone());

        self.records
            .entry(Arc::clone(&player))
            .or_default()
            .entry(Arc::clone(&opponent))
            .or_insert_with(|| Record::new(player, opponent))
            .push(game);
    }

    pub fn options(&self) -> &StatsOptions {
        &self.options
    }

    fn counted_meta(&self) -> impl Iterator<Item = &Record> {
        self.meta
            .values()
            .filter(|r| r.count() >= self.options.min_meta_count)
    }

    /// Games against opponent decks that meet `min_meta_count`
    pub fn total_games(&self) -> u32 {
        self.counted_meta().map(Record::count).sum()
    }

    /// Longest counted opponent deck name, in characters
    pub fn max_deck_length(&self) -> usize {
        self.counted_meta()
            .map(|r| r.opponent_deck.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn meta_record(&self, opponent: &str) -> Option<&Record> {
        self.meta.get(opponent)
    }

    pub fn matchup(&self, player: &str, opponent: &str) -> Option<&Record> {
        self.records.get(player)?.get(opponent)
    }

    /// Counted opponent decks, most played first, ties by name.
    pub fn sorted_meta(&self) -> Vec<MetaEntry<'_>> {
        let total = self.total_games();
        let mut entries: Vec<MetaEntry<'_>> = self
            .counted_meta()
            .map(|r| MetaEntry {
                deck: &r.opponent_deck,
                count: r.count(),
                representation: crate::game::percentage(r.count(), total),
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.deck.cmp(b.deck)));
        entries
    }

    /// Factions by game count descending, ties in configured order.
    pub fn sorted_factions(&self) -> Vec<FactionCount<'_>> {
        let mut counts: Vec<FactionCount<'_>> = self
            .classifier
            .factions()
            .iter()
            .zip(&self.faction_counts)
            .map(|(faction, &count)| FactionCount {
                faction: faction.as_str(),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Counted games not attributed to any faction.
    ///
    /// Faction counters include every game, so this goes negative when
    /// `min_meta_count` drops games from the total.
    pub fn other_count(&self) -> i64 {
        let classified: i64 = self.faction_counts.iter().map(|&c| i64::from(c)).sum();
        i64::from(self.total_games()) - classified
    }

    /// Per player deck summaries, sorted by deck name.
    ///
    /// Decks left with no counted games after filtering are omitted.
    pub fn deck_summaries(&self) -> Vec<DeckSummary<'_>> {
        self.records
            .iter()
            .filter_map(|(deck, opponents)| {
                DeckSummary::build(deck, opponents.values(), &self.options)
            })
            .collect()
    }
}
