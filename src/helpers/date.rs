//! Date formatting for pages.
//!
//! Renders a page's publication timestamp with a PHP `date()`-style pattern,
//! always in UTC. The pattern is translated to chrono specifiers before
//! formatting:
//!
//! | Pattern | Meaning                      | Example    |
//! |---------|------------------------------|------------|
//! | `d`/`j` | day, padded / unpadded       | `05` / `5` |
//! | `D`/`l` | weekday, short / full        | `Fri` / `Friday` |
//! | `N`/`w` | weekday number, ISO / sunday-based | `5` / `5` |
//! | `F`/`M` | month name, full / short     | `January` / `Jan` |
//! | `m`/`n` | month, padded / unpadded     | `01` / `1` |
//! | `Y`/`y` | year, full / two-digit       | `2024` / `24` |
//! | `a`/`A` | am/pm, lower / upper         | `pm` / `PM` |
//! | `g`/`h` | 12-hour, unpadded / padded   | `1` / `01` |
//! | `G`/`H` | 24-hour, unpadded / padded   | `13` / `13` |
//! | `i`/`s` | minute / second, padded      | `33` / `26` |
//! | `U`     | Unix timestamp               | `1704461606` |
//!
//! A backslash escapes the next character; anything not listed above is
//! copied through unchanged.

use crate::page::{Page, PageError};
use chrono::{TimeZone, Utc};

/// Default date pattern, rendering like "Jan 5, 2024".
pub const DEFAULT_DATE_FORMAT: &str = "M j, Y";

/// Format the page's publication date with a PHP-style pattern.
pub fn pretty_date(page: &Page, format: &str) -> Result<String, PageError> {
    let timestamp = page.date.ok_or(PageError::MissingField("date"))?;
    let datetime = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or(PageError::InvalidDate(timestamp))?;

    Ok(datetime.format(&to_strftime(format)).to_string())
}

/// Format the page's publication date with [`DEFAULT_DATE_FORMAT`].
pub fn pretty_date_default(page: &Page) -> Result<String, PageError> {
    pretty_date(page, DEFAULT_DATE_FORMAT)
}

/// Translate a PHP `date()` pattern into a chrono strftime pattern.
///
/// Only whitelisted chrono specifiers are emitted, so formatting the result
/// cannot fail at render time.
fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => push_literal(&mut out, escaped),
                None => out.push('\\'),
            },
            'd' => out.push_str("%d"),
            'j' => out.push_str("%-d"),
            'D' => out.push_str("%a"),
            'l' => out.push_str("%A"),
            'N' => out.push_str("%u"),
            'w' => out.push_str("%w"),
            'F' => out.push_str("%B"),
            'M' => out.push_str("%b"),
            'm' => out.push_str("%m"),
            'n' => out.push_str("%-m"),
            'Y' => out.push_str("%Y"),
            'y' => out.push_str("%y"),
            'a' => out.push_str("%P"),
            'A' => out.push_str("%p"),
            'g' => out.push_str("%-I"),
            'h' => out.push_str("%I"),
            'G' => out.push_str("%-H"),
            'H' => out.push_str("%H"),
            'i' => out.push_str("%M"),
            's' => out.push_str("%S"),
            'U' => out.push_str("%s"),
            other => push_literal(&mut out, other),
        }
    }

    out
}

/// Append a literal character, escaping `%` for chrono.
#[inline]
fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-05T13:33:26Z, a Friday
    const EPOCH: i64 = 1704461606;

    fn page_at(timestamp: i64) -> Page {
        Page {
            date: Some(timestamp),
            ..Page::default()
        }
    }

    #[test]
    fn test_pretty_date_default_format() {
        assert_eq!(pretty_date(&page_at(EPOCH), "M j, Y").unwrap(), "Jan 5, 2024");
        assert_eq!(pretty_date_default(&page_at(EPOCH)).unwrap(), "Jan 5, 2024");
    }

    #[test]
    fn test_pretty_date_iso_pattern() {
        assert_eq!(pretty_date(&page_at(EPOCH), "Y-m-d").unwrap(), "2024-01-05");
    }

    #[test]
    fn test_pretty_date_day_specifiers() {
        let page = page_at(EPOCH);

        assert_eq!(pretty_date(&page, "d").unwrap(), "05");
        assert_eq!(pretty_date(&page, "j").unwrap(), "5");
        assert_eq!(pretty_date(&page, "D").unwrap(), "Fri");
        assert_eq!(pretty_date(&page, "l").unwrap(), "Friday");
        assert_eq!(pretty_date(&page, "N").unwrap(), "5");
        assert_eq!(pretty_date(&page, "w").unwrap(), "5");
    }

    #[test]
    fn test_pretty_date_month_specifiers() {
        let page = page_at(EPOCH);

        assert_eq!(pretty_date(&page, "F").unwrap(), "January");
        assert_eq!(pretty_date(&page, "M").unwrap(), "Jan");
        assert_eq!(pretty_date(&page, "m").unwrap(), "01");
        assert_eq!(pretty_date(&page, "n").unwrap(), "1");
    }

    #[test]
    fn test_pretty_date_year_specifiers() {
        let page = page_at(EPOCH);

        assert_eq!(pretty_date(&page, "Y").unwrap(), "2024");
        assert_eq!(pretty_date(&page, "y").unwrap(), "24");
    }

    #[test]
    fn test_pretty_date_time_specifiers() {
        let page = page_at(EPOCH);

        assert_eq!(pretty_date(&page, "H:i:s").unwrap(), "13:33:26");
        assert_eq!(pretty_date(&page, "G").unwrap(), "13");
        assert_eq!(pretty_date(&page, "g").unwrap(), "1");
        assert_eq!(pretty_date(&page, "h").unwrap(), "01");
        assert_eq!(pretty_date(&page, "a").unwrap(), "pm");
        assert_eq!(pretty_date(&page, "A").unwrap(), "PM");
    }

    #[test]
    fn test_pretty_date_unix_timestamp() {
        assert_eq!(pretty_date(&page_at(EPOCH), "U").unwrap(), "1704461606");
    }

    #[test]
    fn test_pretty_date_escaped_literals() {
        let page = page_at(EPOCH);

        // A backslash turns a specifier into a literal
        assert_eq!(pretty_date(&page, r"\M \j").unwrap(), "M j");
        assert_eq!(pretty_date(&page, r"j \o\f M").unwrap(), "5 of Jan");

        // Trailing backslash stays a backslash
        assert_eq!(pretty_date(&page, r"\").unwrap(), "\\");
    }

    #[test]
    fn test_pretty_date_literal_passthrough() {
        let page = page_at(EPOCH);

        // Characters outside the specifier set are copied through
        assert_eq!(pretty_date(&page, "Q").unwrap(), "Q");
        assert_eq!(pretty_date(&page, "j, ok").unwrap(), "5, ok");

        // Percent signs must not leak into the chrono pattern
        assert_eq!(pretty_date(&page, "j%").unwrap(), "5%");
    }

    #[test]
    fn test_pretty_date_all_months() {
        let months = [
            (1, "Jan"),
            (2, "Feb"),
            (3, "Mar"),
            (4, "Apr"),
            (5, "May"),
            (6, "Jun"),
            (7, "Jul"),
            (8, "Aug"),
            (9, "Sep"),
            (10, "Oct"),
            (11, "Nov"),
            (12, "Dec"),
        ];

        for (month_num, month_name) in months {
            let timestamp = Utc
                .with_ymd_and_hms(2024, month_num, 15, 12, 0, 0)
                .unwrap()
                .timestamp();
            assert_eq!(
                pretty_date(&page_at(timestamp), "M").unwrap(),
                month_name,
                "month {} should render as {}",
                month_num,
                month_name
            );
        }
    }

    #[test]
    fn test_pretty_date_before_epoch() {
        assert_eq!(pretty_date(&page_at(-1), "Y-m-d").unwrap(), "1969-12-31");
    }

    #[test]
    fn test_pretty_date_missing_date() {
        let result = pretty_date(&Page::default(), "Y-m-d");

        assert!(matches!(result, Err(PageError::MissingField("date"))));
    }

    #[test]
    fn test_pretty_date_out_of_range() {
        let result = pretty_date(&page_at(i64::MAX), "Y-m-d");

        assert!(matches!(result, Err(PageError::InvalidDate(ts)) if ts == i64::MAX));
    }
}
