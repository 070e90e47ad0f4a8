// src/application/datetime.rs
//! Conversions between `datetime-local` form values (no offset) and
//! UTC-qualified storage strings for a named IANA timezone.
//!
//! The naive form has minute precision, so a round trip through it
//! truncates seconds.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// `yyyy-MM-ddTHH:mm`, as produced by `<input type="datetime-local">`.
pub const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const NAIVE_FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
/// `yyyy-MM-dd HH:mm:ss+00:00`; always UTC.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S+00:00";
const STORAGE_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";

#[derive(Debug, Error)]
pub enum DateTimeConversionError {
    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),
    #[error("invalid datetime '{input}': {source}")]
    InvalidInstant {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid local datetime '{input}': {source}")]
    InvalidLocalDateTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("local time '{input}' does not exist in {timezone}")]
    NonexistentLocalTime { input: String, timezone: String },
}

pub type ConversionResult<T> = Result<T, DateTimeConversionError>;

pub fn parse_timezone(name: &str) -> ConversionResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DateTimeConversionError::InvalidTimezone(name.to_string()))
}

/// Accepts RFC 3339 (`2025-06-15T17:30:00Z`) and the storage form
/// (`2025-06-15 17:30:00+00:00`, optional fraction, `+00` shorthand).
pub fn parse_instant(iso: &str) -> ConversionResult<DateTime<FixedOffset>> {
    let input = iso.trim();
    DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::parse_from_str(input, STORAGE_PARSE_FORMAT))
        .map_err(|source| DateTimeConversionError::InvalidInstant {
            input: iso.to_string(),
            source,
        })
}

pub fn iso_string_to_timezone_date(iso: &str, timezone: &str) -> ConversionResult<DateTime<Tz>> {
    let tz = parse_timezone(timezone)?;
    Ok(parse_instant(iso)?.with_timezone(&tz))
}

pub fn tz_date_string_to_naive_string(iso: &str, timezone: &str) -> ConversionResult<String> {
    let tz = parse_timezone(timezone)?;
    let instant = parse_instant(iso)?.with_timezone(&Utc);
    Ok(utc_to_local_input(instant, &tz))
}

pub fn naive_string_to_tz_date_string(naive: &str, timezone: &str) -> ConversionResult<String> {
    let tz = parse_timezone(timezone)?;
    let instant = local_input_to_utc(naive, &tz)?;
    Ok(format_storage(instant))
}

/// Interprets `naive` as wall-clock time in `tz`. A time inside an
/// autumn fold resolves to the earlier instant; a time inside a spring
/// gap is rejected.
pub fn local_input_to_utc(naive: &str, tz: &Tz) -> ConversionResult<DateTime<Utc>> {
    let input = naive.trim();
    let wall_clock = NaiveDateTime::parse_from_str(input, NAIVE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, NAIVE_FORMAT_WITH_SECONDS))
        .map_err(|source| DateTimeConversionError::InvalidLocalDateTime {
            input: naive.to_string(),
            source,
        })?;

    let local = match tz.from_local_datetime(&wall_clock) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            return Err(DateTimeConversionError::NonexistentLocalTime {
                input: naive.to_string(),
                timezone: tz.name().to_string(),
            });
        }
    };

    Ok(local.with_timezone(&Utc))
}

pub fn utc_to_local_input(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format(NAIVE_FORMAT).to_string()
}

pub fn format_storage(instant: DateTime<Utc>) -> String {
    instant.format(STORAGE_FORMAT).to_string()
}
