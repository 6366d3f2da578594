use serde::{Deserialize, Serialize};

/// Display-ready score lines, e.g. `"120/3 (15.2)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub team_a: String,
    pub team_b: String,
}

/// Descriptive record for a single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub match_id: String,
    pub series: String,
    pub team_a: String,
    pub team_b: String,
    pub status: String,
    pub score: ScoreLine,
    pub message: String,
}
