use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Milliseconds in one day.
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The application's fixed display locale.
const DISPLAY_LOCALE: Locale = Locale::fr_FR;

/// Anything that can resolve to a local timestamp: chrono values, or text in
/// one of the accepted shapes (RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DD`).
pub trait DateInput {
    /// Resolves to a local timestamp, or `None` when the value cannot be
    /// interpreted as one.
    fn resolve(self) -> Option<DateTime<Local>>;
}

impl DateInput for DateTime<Local> {
    fn resolve(self) -> Option<DateTime<Local>> {
        Some(self)
    }
}

impl DateInput for DateTime<Utc> {
    fn resolve(self) -> Option<DateTime<Local>> {
        Some(self.with_timezone(&Local))
    }
}

impl DateInput for NaiveDateTime {
    fn resolve(self) -> Option<DateTime<Local>> {
        Local.from_local_datetime(&self).earliest()
    }
}

impl DateInput for NaiveDate {
    fn resolve(self) -> Option<DateTime<Local>> {
        self.and_hms_opt(0, 0, 0).and_then(DateInput::resolve)
    }
}

impl DateInput for &str {
    fn resolve(self) -> Option<DateTime<Local>> {
        parse_date(self)
    }
}

impl DateInput for &String {
    fn resolve(self) -> Option<DateTime<Local>> {
        parse_date(self)
    }
}

/// Parses text into a local timestamp.
///
/// Offset-carrying input (RFC 3339) is converted to local time; naive input is
/// interpreted as local wall-clock time, and date-only input as local
/// midnight.
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
    {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(text, fmt) {
            return ndt.resolve();
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().and_then(DateInput::resolve)
}

/// `true` iff the text parses to a valid timestamp.
#[must_use]
pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Long-form localized date: `1 janvier 2024`. Unparseable input yields `""`.
#[must_use]
pub fn format_date(value: impl DateInput) -> String {
    value
        .resolve()
        .map_or_else(String::new, |d| d.format_localized("%-d %B %Y", DISPLAY_LOCALE).to_string())
}

/// Long-form localized date with time: `1 janvier 2024 à 14:30`.
#[must_use]
pub fn format_date_time(value: impl DateInput) -> String {
    value.resolve().map_or_else(String::new, |d| {
        d.format_localized("%-d %B %Y à %H:%M", DISPLAY_LOCALE).to_string()
    })
}

/// `true` iff the instant lies strictly before now. Unparseable input is
/// neither past nor future.
#[must_use]
pub fn is_past(value: impl DateInput) -> bool {
    value.resolve().is_some_and(|d| d < Local::now())
}

/// `true` iff the instant lies strictly after now.
#[must_use]
pub fn is_future(value: impl DateInput) -> bool {
    value.resolve().is_some_and(|d| d > Local::now())
}

/// Whole days between two instants: symmetric, non-negative, rounding up on a
/// partial day. Unresolvable input yields 0.
#[must_use]
pub fn days_difference(a: impl DateInput, b: impl DateInput) -> i64 {
    match (a.resolve(), b.resolve()) {
        (Some(a), Some(b)) => {
            let ms = (b - a).num_milliseconds().abs();
            (ms + DAY_MS - 1) / DAY_MS
        }
        _ => 0,
    }
}

/// `true` iff the instant falls on the current local calendar day.
#[must_use]
pub fn is_today(value: impl DateInput) -> bool {
    value.resolve().is_some_and(|d| d.date_naive() == Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parses_the_accepted_shapes() {
        assert!(parse_date("2024-01-01").is_some());
        assert!(parse_date("2024-01-01T12:30:00").is_some());
        assert!(parse_date("2024-01-01 12:30:00").is_some());
        assert!(parse_date("2024-01-01T12:30:00.250").is_some());
        assert!(parse_date("2024-01-01T12:30:00Z").is_some());
        assert!(parse_date("2024-01-01T12:30:00+02:00").is_some());
        assert!(parse_date("  2024-01-01  ").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("").is_none());
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(!is_valid_date("31/12/2024"));
        assert!(is_valid_date("2024-12-31"));
    }

    #[test]
    fn formats_french_long_dates() {
        assert_eq!(format_date("2024-01-01"), "1 janvier 2024");
        assert_eq!(format_date("2024-12-25"), "25 décembre 2024");
        assert_eq!(format_date("garbage"), "");
    }

    #[test]
    fn formats_date_time_with_minutes() {
        assert_eq!(format_date_time("2024-03-08T14:30:00"), "8 mars 2024 à 14:30");
        assert_eq!(format_date_time(""), "");
    }

    #[test]
    fn past_and_future_are_strict() {
        let now = Local::now();
        assert!(is_past(now - Duration::hours(1)));
        assert!(is_future(now + Duration::hours(1)));
        assert!(!is_past("garbage"));
        assert!(!is_future("garbage"));
    }

    #[test]
    fn day_difference_is_symmetric_and_ceiled() {
        assert_eq!(days_difference("2024-01-01", "2024-01-11"), 10);
        assert_eq!(days_difference("2024-01-11", "2024-01-01"), 10);
        // 36 hours round up to 2 days.
        assert_eq!(days_difference("2024-01-01T00:00:00", "2024-01-02T12:00:00"), 2);
        assert_eq!(days_difference("2024-01-01", "2024-01-01"), 0);
        assert_eq!(days_difference("garbage", "2024-01-01"), 0);
    }

    #[test]
    fn today_matches_the_local_calendar_day() {
        assert!(is_today(Local::now()));
        assert!(!is_today("2000-01-01"));
        assert!(!is_today("garbage"));
    }
}
