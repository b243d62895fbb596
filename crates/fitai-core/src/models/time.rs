// ABOUTME: Lenient ISO-8601 parsing for log timestamps and dates
// ABOUTME: Accepts RFC 3339, naive date-times with or without seconds, and bare dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Naive date-time layouts accepted after RFC 3339 fails
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a log timestamp
///
/// Offsets are normalized to UTC so entries from different zones order
/// correctly. A bare date maps to midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a nutrition log date, dropping any time component
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .ok()
        .or_else(|| parse_timestamp(raw).map(|timestamp| timestamp.date()))
}
