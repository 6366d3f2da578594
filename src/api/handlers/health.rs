use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "upstream_configured": state.config.has_rapidapi_auth(),
        "timezone": state.formatter.timezone().name(),
    }))
}
