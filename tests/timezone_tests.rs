// Kept in its own test binary: the display timezone is read from the
// environment once per process.

use cricket_feed::config::AppConfig;
use cricket_feed::cricket::format_time;

#[test]
fn test_format_time_uses_configured_timezone() {
    std::env::set_var("CRICKET_TZ", "UTC");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.timezone, chrono_tz::UTC);

    // 2024-01-15T10:00:00Z
    assert_eq!(format_time(1_705_312_800_000), "Jan 15, 2024, 10:00 AM");
}
