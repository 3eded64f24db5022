//! Date parsing and formatting for scraped transaction dates.
//!
//! Dates are handled as local, locale-naive calendar date-times. Scraped
//! pages render dates in a handful of shapes, so parsing tries a list of
//! known formats and treats anything else as "no date".

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Text used in the export for transactions with no date yet.
pub const PENDING_LABEL: &str = "Pending";

/// Date-time shapes, tried before date-only ones.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
];

/// Date-only shapes, parsed as local midnight.
///
/// `%B`/`%A` accept both short and long names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%A, %B %d, %Y",
    "%d %B %Y",
    "%B %d %Y",
];

/// Parses free-form date text into a local calendar instant.
///
/// Blank text and text in no recognised shape both yield `None`; neither
/// is an error.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    let parsed = if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        Some(dt.with_timezone(&Local).naive_local())
    } else {
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    };

    parsed.and_then(widen_short_year)
}

/// Moves years below 100 into 2000-2049 or 1950-1999.
///
/// `%Y` reads "24" as the year 24, so `1/5/24`, `1/5/24 10:30` and
/// `1-5-24` all come out of chrono in the first century.
fn widen_short_year(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    let year = dt.year();
    if !(0..100).contains(&year) {
        return Some(dt);
    }

    dt.with_year(if year < 50 { 2000 + year } else { 1900 + year })
}

/// Formats a raw date for the export's date column.
///
/// Blank input becomes [`PENDING_LABEL`], unparseable input is passed
/// through untouched, anything else is rendered `M/D/YYYY`.
#[must_use]
pub fn format_export_date(text: &str) -> String {
    if text.trim().is_empty() {
        return PENDING_LABEL.to_string();
    }

    parse_date(text).map_or_else(
        || text.to_string(),
        |dt| format!("{}/{}/{}", dt.month(), dt.day(), dt.format("%Y")),
    )
}

/// Inclusive export window, widened to whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// Builds the window from two boundary texts.
    ///
    /// The start is moved to 00:00:00.000 and the end to 23:59:59.999 of
    /// their days. Returns `None` if either boundary fails to parse.
    /// Inverted boundaries are kept as given and match nothing.
    #[must_use]
    pub fn from_boundaries(start: &str, end: &str) -> Option<Self> {
        let start = parse_date(start)?.date().and_time(NaiveTime::MIN);
        let end = parse_date(end)?.date().and_hms_milli_opt(23, 59, 59, 999)?;

        Some(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether an instant falls inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   \t"), None);
    }

    #[test]
    fn test_parse_slash_dates() {
        assert_eq!(parse_date("1/5/2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("01/05/2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date(" 12/31/2023 "), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn test_parse_short_year() {
        assert_eq!(parse_date("1/5/24"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("1/5/99"), Some(ymd(1999, 1, 5)));
    }

    #[test]
    fn test_short_year_with_time_or_dashes() {
        let morning = parse_date("1/5/24 10:30").unwrap();
        assert_eq!(morning.date(), ymd(2024, 1, 5).date());
        assert_eq!(morning.format("%H:%M").to_string(), "10:30");

        let afternoon = parse_date("1/5/24 2:30 PM").unwrap();
        assert_eq!(afternoon.date(), ymd(2024, 1, 5).date());
        assert_eq!(afternoon.format("%H:%M").to_string(), "14:30");

        assert_eq!(parse_date("1-5-24"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("2/29/24"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("12-31-75"), Some(ymd(1975, 12, 31)));
    }

    #[test]
    fn test_short_year_exports_and_filters_as_full_year() {
        assert_eq!(format_export_date("1/5/24 10:30"), "1/5/2024");
        assert_eq!(format_export_date("1-5-24"), "1/5/2024");

        let range = DateRange::from_boundaries("1/1/2024", "1/31/2024").unwrap();
        assert!(range.contains(parse_date("1/5/24 2:30 PM").unwrap()));
    }

    #[test]
    fn test_parse_other_shapes() {
        assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("Jan 5, 2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("January 5, 2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("5 Jan 2024"), Some(ymd(2024, 1, 5)));

        let with_time = parse_date("2024-01-05T14:30:00").unwrap();
        assert_eq!(with_time.date(), ymd(2024, 1, 5).date());
        assert_eq!(with_time.format("%H:%M").to_string(), "14:30");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2/30/2024"), None);
        assert_eq!(parse_date("13/1/2024"), None);
        assert_eq!(parse_date("1/5"), None);
    }

    #[test]
    fn test_format_export_date() {
        assert_eq!(format_export_date("2024-01-05"), "1/5/2024");
        assert_eq!(format_export_date("12/31/2023"), "12/31/2023");
        assert_eq!(format_export_date("Feb 9, 2024"), "2/9/2024");
    }

    #[test]
    fn test_format_pending_only_when_blank() {
        assert_eq!(format_export_date(""), "Pending");
        assert_eq!(format_export_date("  "), "Pending");
        assert_eq!(format_export_date("Processing"), "Processing");
    }

    #[test]
    fn test_range_covers_whole_days() {
        let range = DateRange::from_boundaries("1/1/2024", "1/31/2024").unwrap();

        assert!(range.contains(ymd(2024, 1, 1)));
        assert!(range.contains(parse_date("1/31/2024 23:59:59").unwrap()));
        assert!(!range.contains(ymd(2024, 2, 1)));
        assert!(!range.contains(parse_date("12/31/2023 23:59:59").unwrap()));
        assert_eq!(range.end().format("%H:%M:%S%.3f").to_string(), "23:59:59.999");
    }

    #[test]
    fn test_range_ignores_boundary_time_of_day() {
        let range =
            DateRange::from_boundaries("2024-01-05T18:00:00", "2024-01-05T06:00:00").unwrap();
        assert_eq!(range.start(), ymd(2024, 1, 5));
        assert!(range.contains(parse_date("1/5/2024 12:00").unwrap()));
    }

    #[test]
    fn test_range_invalid_boundary() {
        assert!(DateRange::from_boundaries("", "1/31/2024").is_none());
        assert!(DateRange::from_boundaries("1/1/2024", "soon").is_none());
    }

    #[test]
    fn test_range_inverted_matches_nothing() {
        let range = DateRange::from_boundaries("2/1/2024", "1/1/2024").unwrap();
        assert!(!range.contains(ymd(2024, 1, 1)));
        assert!(!range.contains(ymd(2024, 1, 15)));
        assert!(!range.contains(ymd(2024, 2, 1)));
    }
}
