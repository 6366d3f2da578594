use chrono_tz::Tz;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_TZ: Tz = chrono_tz::Asia::Kolkata;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // RapidAPI credentials (optional — only the probe and live endpoints need them)
    pub rapidapi_key: Option<String>,
    pub cricket_host: Option<String>,

    // Display timezone for formatted start times
    pub timezone: Tz,

    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let rapidapi_key = non_empty(env::var("RAPIDAPI_KEY").ok());
        let cricket_host = non_empty(env::var("CRICKET_HOST").ok());

        if rapidapi_key.is_none() || cricket_host.is_none() {
            tracing::warn!("Cricket API env not configured: RAPIDAPI_KEY / CRICKET_HOST");
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            rapidapi_key,
            cricket_host,
            timezone: configured_timezone(),
            api_token: non_empty(env::var("API_TOKEN").ok()),
        })
    }

    /// Returns true if both RapidAPI credentials are configured.
    pub fn has_rapidapi_auth(&self) -> bool {
        self.rapidapi_key.is_some() && self.cricket_host.is_some()
    }
}

/// Display timezone from `CRICKET_TZ`, read once per process.
pub fn configured_timezone() -> Tz {
    static TZ: OnceLock<Tz> = OnceLock::new();
    *TZ.get_or_init(|| parse_timezone(env::var("CRICKET_TZ").ok().as_deref()))
}

/// Resolve an IANA timezone name, falling back to `DEFAULT_TZ` when the
/// value is unset or unknown.
pub fn parse_timezone(raw: Option<&str>) -> Tz {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => DEFAULT_TZ,
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            tracing::warn!(timezone = %name, "Unknown CRICKET_TZ, using {DEFAULT_TZ}");
            DEFAULT_TZ
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timezone_defaults_to_kolkata() {
        assert_eq!(parse_timezone(None), chrono_tz::Asia::Kolkata);
        assert_eq!(parse_timezone(Some("  ")), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn timezone_accepts_iana_names() {
        assert_eq!(parse_timezone(Some("Europe/London")), chrono_tz::Europe::London);
    }

    #[test]
    fn unknown_timezone_falls_back() {
        assert_eq!(parse_timezone(Some("Mars/Olympus")), DEFAULT_TZ);
    }
}
