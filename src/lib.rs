pub mod api;
pub mod config;
pub mod cricket;
pub mod errors;
pub mod metrics;
pub mod models;

use crate::config::AppConfig;
use crate::cricket::TimeFormatter;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub formatter: TimeFormatter,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let formatter = TimeFormatter::new(config.timezone);
        Self {
            config,
            formatter,
            metrics_handle,
        }
    }
}
