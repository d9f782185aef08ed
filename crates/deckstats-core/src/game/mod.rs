//! Match-history domain types.
//!
//! - `Outcome` - win or loss
//! - `TurnOrder` - on the play, on the draw, or unknown
//! - `Game`, `Record` - individual games and per-matchup records

mod enums;
mod record;

pub use enums::*;
pub use record::*;
