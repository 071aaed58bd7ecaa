//! Shared utility functions for water quality crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

    /// Timestamp formats without an offset, tried in order.
    /// Socrata "floating timestamps" look like `2019-12-31T00:00:00.000`.
    const FLOATING_FORMATS: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    /// ISO calendar date; read as midnight UTC.
    const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Slash-separated calendar date; read as local midnight.
    const LOCAL_DATE_FORMAT: &str = "%Y/%m/%d";

    /// A measurement timestamp as published by the API.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MeasuredAt {
        /// Wall-clock time with no offset; read in whatever zone the caller uses.
        Floating(NaiveDateTime),
        /// An instant with an explicit UTC offset.
        Zoned(DateTime<FixedOffset>),
    }

    impl MeasuredAt {
        /// Calendar year of this timestamp as seen from `tz`.
        ///
        /// Zoned instants (including bare ISO dates, which mean midnight
        /// UTC) are converted first; floating timestamps already are local
        /// wall-clock values, so their literal year is used.
        pub fn year_in<Tz: TimeZone>(&self, tz: &Tz) -> i32 {
            match self {
                MeasuredAt::Floating(naive) => naive.year(),
                MeasuredAt::Zoned(instant) => instant.with_timezone(tz).year(),
            }
        }
    }

    /// Parse a measurement timestamp in any of the formats the dataset uses.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<MeasuredAt> {
        let s = s.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Ok(MeasuredAt::Zoned(instant));
        }
        if let Ok(instant) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Ok(MeasuredAt::Zoned(instant));
        }
        for format in FLOATING_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(MeasuredAt::Floating(naive));
            }
        }
        if let Some(midnight) = midnight_of(s, ISO_DATE_FORMAT) {
            return Ok(MeasuredAt::Zoned(midnight.and_utc().fixed_offset()));
        }
        if let Some(midnight) = midnight_of(s, LOCAL_DATE_FORMAT) {
            return Ok(MeasuredAt::Floating(midnight));
        }
        Err(DateError(s.to_string()).into())
    }

    fn midnight_of(s: &str, format: &str) -> Option<NaiveDateTime> {
        NaiveDate::parse_from_str(s, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }

    /// Calendar year of a raw timestamp string, seen from `tz`.
    pub fn calendar_year_in<Tz: TimeZone>(s: &str, tz: &Tz) -> anyhow::Result<i32> {
        Ok(parse_timestamp(s)?.year_in(tz))
    }

}

/// Number parsing and formatting
pub mod numbers {
    /// Parse the longest numeric prefix of `s`, the way a browser's
    /// `parseFloat` does: `" 7.5 mg/L"` is 7.5, `"abc"` is nothing.
    ///
    /// Non-finite results are rejected.
    pub fn parse_leading_float(s: &str) -> Option<f64> {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end = 1;
        }

        let mut digits = 0;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return None;
        }

        // An exponent only counts when it has at least one digit.
        if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
                exp_end += 1;
            }
            let exp_digits = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits {
                end = exp_end;
            }
        }

        s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Round to two decimal places; the value `format_hundredths` prints.
    pub fn round_to_hundredths(value: f64) -> f64 {
        format_hundredths(value).parse().unwrap_or(value)
    }

    /// Render with exactly two decimals, e.g. `7.00`, like JS `toFixed(2)`.
    ///
    /// Rounds the exact binary value once, so `2.675` (stored just below
    /// 2.675) prints `2.67`. Exact ties such as `2.125` go away from zero.
    pub fn format_hundredths(value: f64) -> String {
        // Every exact tie at the third decimal is a multiple of 1/8.
        let scaled = value * 100.0;
        if (value * 8.0).fract() == 0.0 && scaled.fract() != 0.0 {
            return format!("{:.2}", scaled.round() / 100.0);
        }
        format!("{:.2}", value)
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A timestamp string that matches none of the known formats.
    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: unrecognized timestamp {:?}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
