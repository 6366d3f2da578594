use chrono::DateTime;
use chrono_tz::Tz;

use crate::config::{configured_timezone, DEFAULT_TZ};

/// Renders epoch-millisecond timestamps for display in a fixed timezone,
/// medium date plus short time: `Oct 19, 2026, 3:30 PM`.
#[derive(Debug, Clone, Copy)]
pub struct TimeFormatter {
    tz: Tz,
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TZ)
    }
}

impl TimeFormatter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn format(&self, epoch_ms: i64) -> String {
        match DateTime::from_timestamp_millis(epoch_ms) {
            Some(utc) => utc
                .with_timezone(&self.tz)
                .format("%b %-d, %Y, %-I:%M %p")
                .to_string(),
            None => "Invalid Date".into(),
        }
    }
}

/// Format `epoch_ms` in the configured display timezone (`CRICKET_TZ`,
/// default `Asia/Kolkata`).
pub fn format_time(epoch_ms: i64) -> String {
    TimeFormatter::new(configured_timezone()).format(epoch_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15T10:00:00Z
    const TS: i64 = 1_705_312_800_000;

    #[test]
    fn formats_in_kolkata_by_default() {
        assert_eq!(TimeFormatter::default().format(TS), "Jan 15, 2024, 3:30 PM");
    }

    #[test]
    fn format_is_deterministic() {
        assert_eq!(format_time(TS), format_time(TS));
    }

    #[test]
    fn respects_configured_timezone() {
        let utc = TimeFormatter::new(chrono_tz::UTC);
        assert_eq!(utc.format(TS), "Jan 15, 2024, 10:00 AM");

        let sydney = TimeFormatter::new(chrono_tz::Australia::Sydney);
        assert_eq!(sydney.format(TS), "Jan 15, 2024, 9:00 PM");
    }

    #[test]
    fn midnight_renders_as_twelve() {
        // 2024-01-15T18:30:00Z is 00:00 on the 16th in Kolkata
        let kolkata = TimeFormatter::default();
        assert_eq!(kolkata.format(1_705_343_400_000), "Jan 16, 2024, 12:00 AM");
    }

    #[test]
    fn out_of_range_timestamp() {
        assert_eq!(format_time(i64::MAX), "Invalid Date");
    }
}
