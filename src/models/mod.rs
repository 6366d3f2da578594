pub mod cricket_match;
pub mod match_detail;

pub use cricket_match::CricketMatch;
pub use match_detail::{MatchDetail, ScoreLine};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MatchState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    Live,
    Upcoming,
    Completed,
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchState::Live => write!(f, "live"),
            MatchState::Upcoming => write!(f, "upcoming"),
            MatchState::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_display_matches_wire_name() {
        for state in [MatchState::Live, MatchState::Upcoming, MatchState::Completed] {
            let wire = serde_json::to_value(state).unwrap();
            assert_eq!(wire, state.to_string());
        }
    }
}
