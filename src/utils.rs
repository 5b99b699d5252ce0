// src/utils.rs
use chrono::{DateTime, NaiveDateTime};

/// "$12.5K" for 12500.0. Annual savings figures are shown in thousands.
pub fn dollars_in_thousands(amount: f64) -> String {
    format!("${:.1}K", amount / 1000.0)
}

/// "$1235" for 1234.56. The monthly-spend card shows whole dollars.
pub fn whole_dollars(amount: f64) -> String {
    format!("${:.0}", amount)
}

/// "$84.68" for 84.68. Per-item costs keep cents.
pub fn dollars_cents(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn cpu_percent(avg: f64) -> String {
    format!("{:.1}%", avg)
}

/// Render the endpoint's timestamp for display. The endpoint emits naive
/// ISO-8601 timestamps without an offset; RFC 3339 is accepted too, and
/// anything unparseable is shown as-is.
pub fn friendly_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_in_thousands() {
        assert_eq!(dollars_in_thousands(12500.0), "$12.5K");
        assert_eq!(dollars_in_thousands(900.0), "$0.9K");
        assert_eq!(dollars_in_thousands(0.0), "$0.0K");
    }

    #[test]
    fn test_whole_dollars_rounds() {
        assert_eq!(whole_dollars(1234.56), "$1235");
        assert_eq!(whole_dollars(0.4), "$0");
    }

    #[test]
    fn test_dollars_cents() {
        assert_eq!(dollars_cents(84.68), "$84.68");
        assert_eq!(dollars_cents(70.0), "$70.00");
    }

    #[test]
    fn test_cpu_percent() {
        assert_eq!(cpu_percent(3.5), "3.5%");
        assert_eq!(cpu_percent(12.0), "12.0%");
    }

    #[test]
    fn test_friendly_timestamp_accepts_naive_isoformat() {
        assert_eq!(
            friendly_timestamp("2024-03-01T09:30:00.123456"),
            "2024-03-01 09:30:00"
        );
        assert_eq!(friendly_timestamp("2024-03-01T09:30:00"), "2024-03-01 09:30:00");
    }

    #[test]
    fn test_friendly_timestamp_accepts_rfc3339() {
        assert_eq!(
            friendly_timestamp("2024-03-01T09:30:00+00:00"),
            "2024-03-01 09:30:00"
        );
    }

    #[test]
    fn test_friendly_timestamp_passes_through_unparseable() {
        assert_eq!(friendly_timestamp("soon"), "soon");
    }
}
