//! Date handling for listing order and metadata.
//!
//! Front matter dates stay strings everywhere except here: they are parsed
//! with `[build.date_format]` only to order posts. A date that does not
//! parse sorts as the earliest possible moment and is reported, never fatal.

use crate::{
    diagnostics::{DiagnosticKind, Diagnostics},
    document::Document,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse `raw` with a strftime `format`.
///
/// Formats with an offset are normalized to UTC. Date-only formats resolve
/// to midnight.
pub fn parse_date(raw: &str, format: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_str(raw, format) {
        return Some(datetime.naive_utc());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(raw, format)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Posts ordered newest first.
///
/// The sort is stable: posts with equal dates, including every post whose
/// date failed to parse, keep their load order.
pub fn sort_by_date<'a>(
    documents: &'a [Document],
    format: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<&'a Document> {
    let mut dated: Vec<(NaiveDateTime, &Document)> = documents
        .iter()
        .map(|document| {
            let date = parse_date(document.date(), format).unwrap_or_else(|| {
                diagnostics.warn(
                    DiagnosticKind::DateFallback,
                    document.slug(),
                    format!(
                        "cannot parse date `{}` with format `{format}`, sorting it last",
                        document.date()
                    ),
                );
                NaiveDateTime::MIN
            });
            (date, document)
        })
        .collect();

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, document)| document).collect()
}

/// Specifier to human readable pattern, longest match first.
const READABLE_SPECIFIERS: &[(&str, &str)] = &[
    ("%:z", "±hh:mm"),
    ("%-m", "m"),
    ("%-d", "d"),
    ("%-H", "H"),
    ("%-I", "h"),
    ("%Y", "yyyy"),
    ("%y", "yy"),
    ("%m", "mm"),
    ("%d", "dd"),
    ("%e", "d"),
    ("%b", "mmm"),
    ("%h", "mmm"),
    ("%B", "mmmm"),
    ("%H", "HH"),
    ("%I", "hh"),
    ("%M", "MM"),
    ("%S", "SS"),
    ("%p", "AM/PM"),
    ("%P", "am/pm"),
    ("%Z", "tz"),
    ("%z", "±hhmm"),
    ("%%", "%"),
];

/// Convert a strftime format into a pattern like `yyyy-mm-dd`.
///
/// Unknown specifiers are copied through unchanged.
pub fn readable_date_format(format: &str) -> String {
    let mut readable = String::with_capacity(format.len() + 4);
    let mut rest = format;

    while !rest.is_empty() {
        if let Some((specifier, replacement)) = READABLE_SPECIFIERS
            .iter()
            .find(|(specifier, _)| rest.starts_with(specifier))
        {
            readable.push_str(replacement);
            rest = &rest[specifier.len()..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            readable.push(c);
        }
        rest = chars.as_str();
    }

    readable
}
