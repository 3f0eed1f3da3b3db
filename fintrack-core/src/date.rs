//! Bank-specific date extraction with a delivery-time fallback.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;

/// Spanish month abbreviations as banks print them, mapped to the English
/// tokens chrono's `%b` understands.
const SPANISH_MONTHS: [(&str, &str); 12] = [
    ("ene", "Jan"),
    ("feb", "Feb"),
    ("mar", "Mar"),
    ("abr", "Apr"),
    ("may", "May"),
    ("jun", "Jun"),
    ("jul", "Jul"),
    ("ago", "Aug"),
    ("sep", "Sep"),
    ("oct", "Oct"),
    ("nov", "Nov"),
    ("dic", "Dec"),
];

/// A regex whose capture groups, joined by single spaces and stripped of
/// commas, parse with `format`.
#[derive(Debug, Clone, Copy)]
pub struct DatePattern {
    pub regex: &'static str,
    pub format: &'static str,
}

/// How one bank writes transaction dates.
#[derive(Debug, Clone, Copy)]
pub struct DateFormat {
    pub datetime: Option<DatePattern>,
    pub date: Option<DatePattern>,
    pub spanish_months: bool,
    pub tz: Tz,
}

/// Translate a Spanish month abbreviation (`Ene`, `ago`, ...) to English.
pub fn english_month(token: &str) -> Option<&'static str> {
    let token = token.to_lowercase();
    SPANISH_MONTHS
        .iter()
        .find(|(es, _)| *es == token)
        .map(|(_, en)| *en)
}

pub fn parse_time_zone(name: &str) -> Option<Tz> {
    name.parse().ok()
}

/// Find the transaction time in `text`.
///
/// The date+time pattern is tried first, then the date-only one (midnight
/// local time). Anything that does not match or does not parse yields
/// `fallback`, normally the email's own delivery time.
pub fn normalize_date(
    text: &str,
    format: &DateFormat,
    fallback: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    if let Some(pattern) = &format.datetime {
        match extract(text, pattern, format.spanish_months) {
            Ok(Some(joined)) => match NaiveDateTime::parse_from_str(&joined, pattern.format) {
                Ok(naive) => {
                    if let Some(dt) = localize(naive, format.tz) {
                        return dt;
                    }
                }
                Err(e) => debug!(value = %joined, error = %e, "date+time did not parse"),
            },
            Ok(None) => {}
            Err(e) => debug!(error = %e, "bad date+time pattern"),
        }
    }

    if let Some(pattern) = &format.date {
        match extract(text, pattern, format.spanish_months) {
            Ok(Some(joined)) => match NaiveDate::parse_from_str(&joined, pattern.format) {
                Ok(day) => {
                    if let Some(dt) = day.and_hms_opt(0, 0, 0).and_then(|n| localize(n, format.tz)) {
                        return dt;
                    }
                }
                Err(e) => debug!(value = %joined, error = %e, "date did not parse"),
            },
            Ok(None) => {}
            Err(e) => debug!(error = %e, "bad date pattern"),
        }
    }

    debug!(%fallback, "using delivery timestamp");
    fallback
}

fn extract(
    text: &str,
    pattern: &DatePattern,
    spanish_months: bool,
) -> Result<Option<String>, regex::Error> {
    let re = Regex::new(pattern.regex)?;
    let Some(caps) = re.captures(text) else {
        return Ok(None);
    };

    let joined = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().replace(',', ""))
        .collect::<Vec<_>>()
        .join(" ");

    let tokens = joined.split_whitespace().map(|tok| {
        if spanish_months {
            english_month(tok).unwrap_or(tok)
        } else {
            tok
        }
    });
    Ok(Some(tokens.collect::<Vec<_>>().join(" ")))
}

fn localize(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<FixedOffset>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}
