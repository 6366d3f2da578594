//! One-off authenticated GET against the configured cricket host.
//!
//! Usage: `cricket-probe <path> [name=value ...]`
//!
//! Prints the JSON body, or exits non-zero on a failed request.

use anyhow::Context;

use cricket_feed::config::AppConfig;
use cricket_feed::cricket::{QueryValue, RapidApiClient, RapidRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: cricket-probe <path> [name=value ...]")?;

    let mut req = RapidRequest::new(path);
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("query argument must be name=value, got {arg:?}"))?;
        req = req.param(name, Some(parse_value(value)));
    }

    let config = AppConfig::from_env()?;
    if !config.has_rapidapi_auth() {
        anyhow::bail!("RAPIDAPI_KEY and CRICKET_HOST must be set to probe the API");
    }

    let client = RapidApiClient::new(reqwest::Client::new(), config.rapidapi_key, config.cricket_host);
    tracing::info!(host = client.host(), url = %client.build_url(&req), "Probing cricket API");

    let body: serde_json::Value = client.get(&req).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

fn parse_value(raw: &str) -> QueryValue {
    if let Ok(n) = raw.parse::<i64>() {
        QueryValue::Int(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        QueryValue::Float(f)
    } else {
        QueryValue::Str(raw.to_string())
    }
}
