//! Plain-text report with optional colour

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::game::percentage;
use crate::stats::{DeckSummary, Statistics, WinLoss};

/// Rendering options for the console report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStyle {
    /// Emit ANSI colours for headings and winrates
    pub colored: bool,
}

impl ReportStyle {
    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colour an already padded winrate cell by which side is ahead
    fn winrate(&self, cell: String, value: f64) -> String {
        if !self.colored {
            return cell;
        }
        if value > 50.0 {
            cell.green().to_string()
        } else if value < 50.0 {
            cell.red().to_string()
        } else {
            cell.yellow().to_string()
        }
    }
}

/// Render the full report: meta table, faction breakdown and deck winrates.
pub fn format_report(stats: &Statistics, style: ReportStyle) -> String {
    let mut output = String::new();
    output.push_str(&format_meta(stats, style));
    output.push('\n');
    output.push_str(&format_factions(stats, style));
    for summary in stats.deck_summaries() {
        output.push('\n');
        output.push_str(&format_deck_summary(
            &summary,
            stats.max_deck_length(),
            style,
        ));
    }
    output
}

/// Total games and opponent decks by frequency
pub fn format_meta(stats: &Statistics, style: ReportStyle) -> String {
    let mut output = String::new();
    let total = stats.total_games();
    let justify = stats.max_deck_length();
    let meta = stats.sorted_meta();
    let count_justify = meta.first().map(|m| count_width(m.count.into())).unwrap_or(0);

    let _ = writeln!(output, "Total games played: {}", total);
    let _ = writeln!(output, "{}", style.heading("Opponent decks:"));
    let _ = writeln!(output);
    for entry in &meta {
        let _ = writeln!(
            output,
            "{:<justify$} {:>5} {:>count_justify$}",
            entry.deck,
            format_percent(entry.representation),
            format!("({})", entry.count),
        );
    }

    output
}

/// Games per faction, plus everything unclassified as "Other"
pub fn format_factions(stats: &Statistics, style: ReportStyle) -> String {
    let mut output = String::new();
    let total = stats.total_games();
    let factions = stats.sorted_factions();
    let justify = factions
        .iter()
        .map(|f| f.faction.chars().count())
        .max()
        .unwrap_or(0);
    let count_justify = factions
        .first()
        .map(|f| count_width(f.count.into()))
        .unwrap_or(0);

    let _ = writeln!(output, "{}", style.heading("Faction breakdown"));
    for faction in &factions {
        let _ = writeln!(
            output,
            "{:<justify$}: {:>5} {:>count_justify$}",
            faction.faction,
            format_percent(percentage(faction.count, total)),
            format!("({})", faction.count),
        );
    }

    let other = stats.other_count();
    let _ = writeln!(
        output,
        "{:<justify$}: {:>5} {:>count_justify$}",
        "Other",
        format_percent(percentage(other as f64, total)),
        format!("({})", other),
    );

    output
}

/// Overall, play and draw winrates followed by every matchup
pub fn format_deck_summary(
    summary: &DeckSummary<'_>,
    max_deck_length: usize,
    style: ReportStyle,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", style.heading(summary.deck));
    let _ = writeln!(
        output,
        "  Total winrate: {}",
        format_win_loss(&summary.total, style)
    );
    if summary.play.games > 0 {
        let _ = writeln!(
            output,
            "  Play winrate:  {}",
            format_win_loss(&summary.play, style)
        );
    }
    if summary.draw.games > 0 {
        let _ = writeln!(
            output,
            "  Draw winrate:  {}",
            format_win_loss(&summary.draw, style)
        );
    }

    let _ = writeln!(output, "{}", style.heading("Matchups:"));
    for record in &summary.matchups {
        let value = record.player_percentage();
        let _ = writeln!(
            output,
            "  {:<max_deck_length$} {} - ({}-{})",
            record.opponent_deck,
            style.winrate(format!("{:>6}", format_percent(value)), value),
            record.wins(),
            record.losses(),
        );
    }

    output
}

fn format_win_loss(tally: &WinLoss, style: ReportStyle) -> String {
    let value = tally.winrate();
    format!(
        "{} ({}-{})",
        style.winrate(format_percent(value), value),
        tally.wins,
        tally.losses()
    )
}

/// One decimal place with a percent sign, e.g. `42.9%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Width of a `(count)` column sized for `count`.
///
/// Counts below one are sized as a single digit.
pub fn count_width(count: i64) -> usize {
    let digits = count.max(1).ilog10() as usize + 1;
    digits + 2
}
