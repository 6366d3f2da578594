use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use metrics::counter;
use serde::{Deserialize, Serialize};

use crate::cricket::{self, TimeFormatter};
use crate::errors::AppError;
use crate::models::{CricketMatch, MatchDetail};
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// A match plus its start time rendered in the configured timezone.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    #[serde(flatten)]
    pub inner: CricketMatch,
    pub start_time_display: String,
}

fn to_views(matches: Vec<CricketMatch>, formatter: &TimeFormatter) -> Vec<MatchView> {
    matches
        .into_iter()
        .map(|m| MatchView {
            start_time_display: formatter.format(m.start_time),
            inner: m,
        })
        .collect()
}

pub async fn live(State(state): State<AppState>) -> Json<ApiResponse<Vec<MatchView>>> {
    counter!("feed_requests_total", "endpoint" => "live").increment(1);
    let matches = cricket::fetch_live_matches().await;
    ApiResponse::ok(to_views(matches, &state.formatter))
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub days: Option<u32>,
}

pub async fn upcoming(
    State(state): State<AppState>,
    query: Result<Query<UpcomingQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<MatchView>>>, AppError> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    counter!("feed_requests_total", "endpoint" => "upcoming").increment(1);

    let matches = cricket::fetch_upcoming_matches(params.days).await;
    Ok(ApiResponse::ok(to_views(matches, &state.formatter)))
}

pub async fn detail(Path(id): Path<String>) -> Json<ApiResponse<MatchDetail>> {
    counter!("feed_requests_total", "endpoint" => "detail").increment(1);
    tracing::debug!(match_id = %id, "Match detail requested");
    ApiResponse::ok(cricket::fetch_match_detail(&id).await)
}
