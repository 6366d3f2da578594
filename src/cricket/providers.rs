use chrono::Utc;

use crate::models::{CricketMatch, MatchDetail, MatchState, ScoreLine};

const DEMO_SERIES: &str = "Demo Series";
const HOUR_MS: i64 = 60 * 60 * 1000;

pub const DEFAULT_UPCOMING_DAYS: u32 = 10;

// The live RapidAPI feed is disabled; these providers serve fixed demo data
// in the shape the UI expects.

/// Matches currently in progress.
pub async fn fetch_live_matches() -> Vec<CricketMatch> {
    let mut m = CricketMatch::new("mock-1", "Team A", "Team B", now_ms(), MatchState::Live);
    m.series = Some(DEMO_SERIES.into());
    m.score_a = Some("120/3".into());
    m.score_b = Some("95/2".into());
    m.overs = Some("15.2".into());
    m.wickets_a = Some(3);
    m.wickets_b = Some(2);
    vec![m]
}

/// Matches scheduled within the next `days` days (default 10). The window is
/// accepted for API compatibility but does not filter the demo data.
pub async fn fetch_upcoming_matches(days: Option<u32>) -> Vec<CricketMatch> {
    let days = days.unwrap_or(DEFAULT_UPCOMING_DAYS);
    tracing::debug!(days, "Serving demo upcoming matches");

    let now = now_ms();
    let upcoming = |id: &str, team_a: &str, team_b: &str, start_time: i64| {
        let mut m = CricketMatch::new(id, team_a, team_b, start_time, MatchState::Upcoming);
        m.series = Some(DEMO_SERIES.into());
        m
    };

    vec![
        upcoming("mock-upcoming-1", "Team C", "Team D", now + 2 * HOUR_MS),
        upcoming("mock-upcoming-2", "Team E", "Team F", now + 24 * HOUR_MS),
    ]
}

/// Descriptive record for `match_id`. The id is echoed back verbatim.
pub async fn fetch_match_detail(match_id: &str) -> MatchDetail {
    MatchDetail {
        match_id: match_id.to_string(),
        series: DEMO_SERIES.into(),
        team_a: "Team A".into(),
        team_b: "Team B".into(),
        status: "Live".into(),
        score: ScoreLine {
            team_a: "120/3 (15.2)".into(),
            team_b: "95/2 (12.0)".into(),
        },
        message: "Live cricket API disabled - showing demo data".into(),
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn live_returns_single_live_match() {
        let matches = fetch_live_matches().await;

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.state, MatchState::Live);
        assert_eq!(m.score_a.as_deref(), Some("120/3"));
        assert_eq!(m.overs.as_deref(), Some("15.2"));
        assert_eq!((m.wickets_a, m.wickets_b), (Some(3), Some(2)));
    }

    #[tokio::test]
    async fn upcoming_returns_two_future_matches() {
        let called_at = Utc::now().timestamp_millis();
        let matches = fetch_upcoming_matches(None).await;

        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert_eq!(m.state, MatchState::Upcoming);
            assert!(m.start_time > called_at);
            assert!(m.score_a.is_none());
        }
    }

    #[tokio::test]
    async fn upcoming_ignores_day_window() {
        let narrow = fetch_upcoming_matches(Some(0)).await;
        let wide = fetch_upcoming_matches(Some(365)).await;

        let ids = |v: &[CricketMatch]| v.iter().map(|m| m.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&narrow), ids(&wide));
    }

    #[tokio::test]
    async fn detail_echoes_match_id() {
        for id in ["12345", "", "weird id/with?chars"] {
            let detail = fetch_match_detail(id).await;
            assert_eq!(detail.match_id, id);
        }
    }

    #[tokio::test]
    async fn detail_serializes_camel_case() {
        let json = serde_json::to_value(fetch_match_detail("42").await).unwrap();

        assert_eq!(json["matchId"], "42");
        assert_eq!(json["score"]["teamA"], "120/3 (15.2)");
        assert_eq!(json["status"], "Live");
    }
}
