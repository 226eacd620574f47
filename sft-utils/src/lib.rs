//! Shared utility functions for the freight tracker crates.

/// Label normalization for free-text tracking fields (flag, destination, type).
pub mod text {
    /// Placeholder shown for missing or empty fields.
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Normalize a free-text field for display.
    ///
    /// Underscores become spaces and surrounding whitespace is trimmed.
    /// Missing or empty input yields [`NOT_AVAILABLE`].
    pub fn normalize_label(value: Option<&str>) -> String {
        match value {
            Some(s) if !s.is_empty() => s.replace('_', " ").trim().to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Lowercase form of [`normalize_label`], used when comparing against a
    /// selected filter option.
    pub fn comparable_label(value: Option<&str>) -> String {
        normalize_label(value).to_lowercase()
    }

    /// Replace underscores with spaces without trimming or placeholders.
    pub fn spaced(value: &str) -> String {
        value.replace('_', " ")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_normalize_label() {
            assert_eq!(normalize_label(Some("PANAMA")), "PANAMA");
            assert_eq!(normalize_label(Some("  US_GULF_PORT ")), "US GULF PORT");
            assert_eq!(normalize_label(Some("_Rotterdam_")), "Rotterdam");
        }

        #[test]
        fn test_normalize_label_missing() {
            assert_eq!(normalize_label(None), "N/A");
            assert_eq!(normalize_label(Some("")), "N/A");
        }

        #[test]
        fn test_whitespace_only_is_trimmed_not_placeholder() {
            // Only null/empty input falls back; blank text trims to "".
            assert_eq!(normalize_label(Some("   ")), "");
        }

        #[test]
        fn test_comparable_label() {
            assert_eq!(comparable_label(Some("Marshall_Islands")), "marshall islands");
            assert_eq!(comparable_label(None), "n/a");
        }
    }
}

/// Timestamp parsing and display for ETA / last AIS fields.
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    /// Display format used for ETA and last AIS columns.
    pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

    /// Parse an ISO-8601 timestamp as produced by the tracking API.
    ///
    /// Accepts RFC 3339 (`2024-05-01T10:00:00.000Z`), a naive date-time
    /// (`2024-05-01T10:00:00`, assumed UTC) or a bare date.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc());
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
    }

    /// Format an optional raw timestamp for display.
    ///
    /// Missing values become "N/A"; text that does not parse is shown as-is.
    pub fn display_timestamp(raw: Option<&str>) -> String {
        match raw {
            None => super::text::NOT_AVAILABLE.to_string(),
            Some(s) if s.trim().is_empty() => super::text::NOT_AVAILABLE.to_string(),
            Some(s) => match parse_timestamp(s) {
                Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
                Err(_) => s.to_string(),
            },
        }
    }

}

/// Numeric display helpers.
pub mod numbers {
    /// Format a speed in knots with one decimal, or "N/A".
    pub fn display_speed(speed: Option<f64>) -> String {
        match speed {
            Some(v) => format!("{:.1}", v),
            None => super::text::NOT_AVAILABLE.to_string(),
        }
    }

}
