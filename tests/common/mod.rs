use metrics_exporter_prometheus::PrometheusBuilder;

use cricket_feed::config::{AppConfig, DEFAULT_TZ};
use cricket_feed::AppState;

/// Minimal config for tests; no credentials, auth disabled unless a token is given.
#[allow(dead_code)]
pub fn test_config(api_token: Option<&str>) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        rapidapi_key: None,
        cricket_host: None,
        timezone: DEFAULT_TZ,
        api_token: api_token.map(Into::into),
    }
}

/// App state backed by a Prometheus recorder that is not installed globally,
/// so tests can build as many as they like.
#[allow(dead_code)]
pub fn test_state(config: AppConfig) -> AppState {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    AppState::new(config, handle)
}
