use cricket_feed::api::router::create_router;
use cricket_feed::config::AppConfig;
use cricket_feed::metrics::init_metrics;
use cricket_feed::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        timezone = %config.timezone,
        upstream_configured = config.has_rapidapi_auth(),
        auth_enabled = config.api_token.is_some(),
        "Cricket feed starting (live API disabled, serving demo data)"
    );

    let metrics_handle = init_metrics()?;
    let state = AppState::new(config, metrics_handle);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
