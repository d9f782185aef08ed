use strum::{EnumString, IntoStaticStr};

/// Result of a single game from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum Outcome {
    #[strum(serialize = "W")]
    Win,
    #[strum(serialize = "L")]
    Loss,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Whether the player went first, second, or didn't record it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumString,
    IntoStaticStr,
)]
pub enum TurnOrder {
    #[strum(serialize = "P")]
    Play,
    #[strum(serialize = "D")]
    Draw,
    #[default]
    #[strum(serialize = "U")]
    Unknown,
}

impl TurnOrder {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl std::fmt::Display for TurnOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_parse() {
        assert_eq!("W".parse::<Outcome>().unwrap(), Outcome::Win);
        assert_eq!("L".parse::<Outcome>().unwrap(), Outcome::Loss);
        assert!("w".parse::<Outcome>().is_err());
        assert!("".parse::<Outcome>().is_err());
        assert!(" W".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_turn_order_parse() {
        assert_eq!("P".parse::<TurnOrder>().unwrap(), TurnOrder::Play);
        assert_eq!("D".parse::<TurnOrder>().unwrap(), TurnOrder::Draw);
        assert_eq!("U".parse::<TurnOrder>().unwrap(), TurnOrder::Unknown);
        assert!("X".parse::<TurnOrder>().is_err());
    }

    #[test]
    fn test_short_names() {
        assert_eq!(Outcome::Loss.to_string(), "L");
        assert_eq!(TurnOrder::default().to_string(), "U");
    }
}
