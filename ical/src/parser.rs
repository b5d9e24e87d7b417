// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::event::FeedEvent;

/// Summary used when a `VEVENT` carries no `SUMMARY` property.
const SUMMARY_FALLBACK: &str = "Reserva";

/// Errors from [`parse_date`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// Fewer than 8 usable characters.
    #[error("date value too short: {0:?}")]
    TooShort(String),

    /// A `YYYY`/`MM`/`DD` field is not numeric.
    #[error("date value not numeric: {0:?}")]
    NotNumeric(String),

    /// The digits do not name a calendar day.
    #[error("no such calendar day: {0:?}")]
    NoSuchDay(String),
}

/// Scans a calendar feed and collects its well-formed reservation events.
///
/// One pass over trimmed lines. `BEGIN:VEVENT` opens a block and
/// `END:VEVENT` closes it; a block contributes an event only when both
/// `DTSTART` and `DTEND` held parseable dates. Everything else degrades
/// silently: malformed blocks are dropped, stray `END:VEVENT` lines are
/// ignored, and a nested `BEGIN:VEVENT` restarts the current block. This
/// function never fails.
#[must_use]
pub fn parse_events(feed: &str) -> Vec<FeedEvent> {
    let mut events = Vec::new();
    let mut current: Option<PartialEvent> = None;

    for line in feed.lines() {
        let line = line.trim();

        if line == "BEGIN:VEVENT" {
            current = Some(PartialEvent::default());
        } else if line == "END:VEVENT" {
            if let Some(event) = current.take().and_then(PartialEvent::finish) {
                events.push(event);
            }
        } else if let Some(partial) = current.as_mut() {
            if let Some(value) = property_value(line, "DTSTART") {
                partial.start = parse_date(value).ok();
            } else if let Some(value) = property_value(line, "DTEND") {
                partial.end = parse_date(value).ok();
            } else if let Some(value) = property_value(line, "SUMMARY")
                && !value.is_empty()
            {
                partial.summary = Some(value.to_string());
            }
        }
    }

    events
}

/// Parses a date in the feed's `YYYYMMDD` shape.
///
/// Time and UTC markers (`T`, `Z`) are stripped and the remainder truncated
/// to its first 8 characters, so `20240117`, `20240117T140000Z` and other
/// datetime spellings all collapse to the same civil day.
///
/// # Errors
///
/// Returns a [`DateParseError`] when the truncated value is short,
/// non-numeric, or names no calendar day.
pub fn parse_date(value: &str) -> Result<Date, DateParseError> {
    let digits: String = value
        .chars()
        .filter(|c| *c != 'T' && *c != 'Z')
        .take(8)
        .collect();

    if digits.len() < 8 {
        return Err(DateParseError::TooShort(value.to_string()));
    }

    let year: i16 = numeric_field(&digits, 0..4, value)?;
    let month: i8 = numeric_field(&digits, 4..6, value)?;
    let day: i8 = numeric_field(&digits, 6..8, value)?;

    Date::new(year, month, day).map_err(|_| DateParseError::NoSuchDay(value.to_string()))
}

fn numeric_field<T: std::str::FromStr>(
    digits: &str,
    range: std::ops::Range<usize>,
    original: &str,
) -> Result<T, DateParseError> {
    digits
        .get(range)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| DateParseError::NotNumeric(original.to_string()))
}

/// Returns the value of a named property line, honoring parameterized forms
/// such as `DTSTART;VALUE=DATE:20240117`.
fn property_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    if !line.starts_with(name) {
        return None;
    }
    line.split_once(':').map(|(_, value)| value)
}

#[derive(Debug, Default)]
struct PartialEvent {
    start: Option<Date>,
    end: Option<Date>,
    summary: Option<String>,
}

impl PartialEvent {
    fn finish(self) -> Option<FeedEvent> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(FeedEvent {
                start,
                end,
                summary: self
                    .summary
                    .unwrap_or_else(|| SUMMARY_FALLBACK.to_string()),
            }),
            _ => None,
        }
    }
}
