//! Shared formatting helpers for the dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// The accent color used for a source's panel and log lines.
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Weather => Color::Cyan,
        Source::Crypto => Color::Yellow,
        Source::News => Color::Green,
    }
}

/// Shorten a "YYYY-MM-DD HH:MM:SS" timestamp to "MM-DD HH:MM" for log lines.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let mut parts = timestamp.split(' ');
    if let (Some(date), Some(time)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date.get(5..10), time.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Anything that does not parse passes through unchanged
    timestamp.to_string()
}

/// Collapse verbose transport errors into short, readable log messages.
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") {
        if msg.contains("ConnectTimeout") {
            return "Connection timeout".to_string();
        }
        if msg.contains("TimedOut") {
            return "Request timed out".to_string();
        }
        return "Network error".to_string();
    }
    msg.to_string()
}

/// Format a USD price with two decimals, e.g. `$60000.00`.
pub fn format_price_usd(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a signed 24h change percentage with two decimals, e.g. `+1.25%`.
pub fn format_change_percent(change: f64) -> String {
    format!("{:+.2}%", change)
}

/// Format a USD market cap with digit grouping, e.g. `$1,180,243,521,111`.
///
/// The value is rounded to whole dollars; at market-cap magnitudes the
/// fraction is noise.
pub fn format_market_cap_usd(cap: f64) -> String {
    let rounded = cap.round();
    let digits = format!("{}", rounded.abs() as u128);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format an optional reading with a unit suffix, or a dash when absent.
pub fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => "--".to_string(),
    }
}

/// Format an uptime duration, dropping units that have not accumulated yet.
pub fn format_uptime(uptime: std::time::Duration) -> String {
    if uptime.as_secs() >= 86400 {
        format!(
            "{}d {}h {}m",
            uptime.as_secs() / 86400,
            (uptime.as_secs() % 86400) / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else if uptime.as_secs() >= 3600 {
        format!(
            "{}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!("{}m {}s", uptime.as_secs() / 60, uptime.as_secs() % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-25 14:30:52"),
            "08-25 14:30"
        );
        // Unparseable input falls through unchanged
        assert_eq!(format_compact_timestamp("bogus"), "bogus");
    }

    #[test]
    fn test_format_price_usd_two_decimals() {
        assert_eq!(format_price_usd(60000.0), "$60000.00");
        assert_eq!(format_price_usd(0.1234), "$0.12");
    }

    #[test]
    fn test_format_change_percent_is_signed() {
        assert_eq!(format_change_percent(1.25), "+1.25%");
        assert_eq!(format_change_percent(-2.5), "-2.50%");
        assert_eq!(format_change_percent(0.0), "+0.00%");
    }

    #[test]
    fn test_format_market_cap_groups_digits() {
        assert_eq!(format_market_cap_usd(0.0), "$0");
        assert_eq!(format_market_cap_usd(999.0), "$999");
        assert_eq!(format_market_cap_usd(1000.0), "$1,000");
        assert_eq!(
            format_market_cap_usd(1_180_243_521_110.55),
            "$1,180,243,521,111"
        );
    }

    #[test]
    fn test_format_reading_handles_absent_values() {
        assert_eq!(format_reading(Some(21.5), "°C"), "21.5°C");
        assert_eq!(format_reading(None, "°C"), "--");
        assert_eq!(format_reading(Some(60.0), "%"), "60%");
    }

    #[test]
    fn test_format_uptime_drops_leading_zero_units() {
        use std::time::Duration;
        assert_eq!(format_uptime(Duration::from_secs(42)), "0m 42s");
        assert_eq!(format_uptime(Duration::from_secs(3 * 60 + 5)), "3m 5s");
        assert_eq!(format_uptime(Duration::from_secs(2 * 3600 + 61)), "2h 1m 1s");
        assert_eq!(
            format_uptime(Duration::from_secs(86400 + 3600 + 60)),
            "1d 1h 1m"
        );
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Reqwest error: ... ConnectTimeout ..."),
            "Connection timeout"
        );
        assert_eq!(
            clean_http_error_message("Got 3 weather reports"),
            "Got 3 weather reports"
        );
    }
}
