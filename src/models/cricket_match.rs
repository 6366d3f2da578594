use serde::{Deserialize, Serialize};

use super::MatchState;

/// A single match in the shape the sports UI consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CricketMatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub team_a: String,
    pub team_b: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    pub state: MatchState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wickets_a: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wickets_b: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_probability_a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_probability_b: Option<f64>,
}

impl CricketMatch {
    /// A match with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        start_time: i64,
        state: MatchState,
    ) -> Self {
        Self {
            id: id.into(),
            series: None,
            team_a: team_a.into(),
            team_b: team_b.into(),
            start_time,
            state,
            score_a: None,
            score_b: None,
            overs: None,
            wickets_a: None,
            wickets_b: None,
            win_probability_a: None,
            win_probability_b: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optionals_are_not_serialized() {
        let m = CricketMatch::new("m1", "India", "Australia", 1_700_000_000_000, MatchState::Upcoming);
        let json = serde_json::to_value(&m).unwrap();

        assert_eq!(json["teamA"], "India");
        assert_eq!(json["startTime"], 1_700_000_000_000i64);
        assert_eq!(json["state"], "upcoming");
        assert!(json.get("series").is_none());
        assert!(json.get("wicketsA").is_none());
        assert!(json.get("winProbabilityB").is_none());
    }

    #[test]
    fn deserializes_ui_shape() {
        let raw = r#"{
            "id": "m2",
            "series": "Ashes",
            "teamA": "England",
            "teamB": "Australia",
            "startTime": 1700000000000,
            "state": "completed",
            "scoreA": "301/7",
            "wicketsA": 7
        }"#;
        let m: CricketMatch = serde_json::from_str(raw).unwrap();

        assert_eq!(m.state, MatchState::Completed);
        assert_eq!(m.series.as_deref(), Some("Ashes"));
        assert_eq!(m.wickets_a, Some(7));
        assert_eq!(m.score_b, None);
    }

    #[test]
    fn rejects_unknown_state() {
        let raw = r#"{"id":"x","teamA":"A","teamB":"B","startTime":0,"state":"abandoned"}"#;
        assert!(serde_json::from_str::<CricketMatch>(raw).is_err());
    }
}
