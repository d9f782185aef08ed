//! Faction classification of opponent deck names.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_FACTIONS: [&str; 10] = [
    "Rakano",
    "Combrei",
    "Elysian",
    "Feln",
    "Stonescar",
    "Xenan",
    "Hooru",
    "Argenport",
    "Praxis",
    "Skykrag",
];

/// Deck names that identify a faction without containing its name.
pub const DEFAULT_KEYWORDS: [(&str, &str); 5] = [
    ("Queen", "Stonescar"),
    ("Jito", "Stonescar"),
    ("Icaria", "Rakano"),
    ("Shimmerpack", "Elysian"),
    ("Reanimator", "Feln"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionKeyword {
    pub keyword: String,
    pub faction: String,
}

impl FactionKeyword {
    pub fn new(keyword: &str, faction: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            faction: faction.to_string(),
        }
    }
}

/// Maps opponent deck names to factions by substring match.
#[derive(Debug, Clone)]
pub struct FactionClassifier {
    factions: Vec<String>,
    keywords: Vec<FactionKeyword>,
}

impl Default for FactionClassifier {
    fn default() -> Self {
        Self {
            factions: DEFAULT_FACTIONS.iter().map(|f| f.to_string()).collect(),
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|(k, f)| FactionKeyword::new(k, f))
                .collect(),
        }
    }
}

impl FactionClassifier {
    /// Build a classifier, rejecting keywords that point at an unlisted faction.
    pub fn new(factions: Vec<String>, keywords: Vec<FactionKeyword>) -> Result<Self> {
        if let Some(bad) = keywords.iter().find(|k| !factions.contains(&k.faction)) {
            return Err(Error::UnknownFaction {
                keyword: bad.keyword.clone(),
                faction: bad.faction.clone(),
            });
        }
        Ok(Self { factions, keywords })
    }

    pub fn factions(&self) -> &[String] {
        &self.factions
    }

    /// Index into `factions()` for a deck name, or `None` for "Other".
    ///
    /// A faction name earlier in the list wins over a keyword, but any
    /// keyword wins over faction names after the first.
    pub fn classify(&self, deck: &str) -> Option<usize> {
        for (index, faction) in self.factions.iter().enumerate() {
            if deck.contains(faction.as_str()) {
                return Some(index);
            }
            if let Some(keyword) = self.keywords.iter().find(|k| deck.contains(&k.keyword)) {
                return self.factions.iter().position(|f| *f == keyword.faction);
            }
        }
        None
    }

    pub fn classify_name(&self, deck: &str) -> Option<&str> {
        self.classify(deck).map(|i| self.factions[i].as_str())
    }
}
