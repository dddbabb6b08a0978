//! UTC timestamp parsing and viewer-local rendering for table tooltips.
//!
//! The jobs table prints instants as `YYYY-MM-DD HH:MM[:SS] ZONE`. The zone
//! token is informational only: the backend always emits UTC, so the captured
//! label never changes interpretation.

use thiserror::Error;
use time::{macros::format_description, Date, Month, PrimitiveDateTime, Time, UtcOffset};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("timestamp does not match `YYYY-MM-DD HH:MM[:SS] ZONE`")]
    Pattern,
    #[error("timestamp is not a valid calendar date/time")]
    InvalidDate,
}

/// One tooltip's worth of rendered time, produced fresh per hover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedTime {
    pub utc_text: String,
    pub local_text: String,
    pub zone_name: String,
}

/// Parses the table's timestamp format into a UTC wall-clock value.
///
/// Components may be separated by runs of mixed whitespace. Seconds default
/// to `:00` when absent.
pub fn parse_utc(text: &str) -> Result<PrimitiveDateTime, TimeParseError> {
    let mut tokens = text.split_whitespace();
    let date_token = tokens.next().ok_or(TimeParseError::Pattern)?;
    let time_token = tokens.next().ok_or(TimeParseError::Pattern)?;
    let zone_token = tokens.next().ok_or(TimeParseError::Pattern)?;
    if tokens.next().is_some() {
        return Err(TimeParseError::Pattern);
    }
    if !zone_token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(TimeParseError::Pattern);
    }

    let date = parse_date(date_token)?;
    let time = parse_time(time_token)?;
    Ok(PrimitiveDateTime::new(date, time))
}

/// Localizes `text` against the given offset. The local line is labelled
/// with `zone_short` (e.g. `EST`), the zone line with the full `zone_name`.
///
/// Pure given its inputs; callers obtain the viewer's live offset and zone
/// labels from [`crate::core::platform`] so each hover reflects the current
/// clock.
pub fn localize(
    text: &str,
    offset: UtcOffset,
    zone_short: &str,
    zone_name: &str,
) -> Result<LocalizedTime, TimeParseError> {
    let parsed = parse_utc(text)?;
    let local = parsed.assume_utc().to_offset(offset);

    let wall = local
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute]"
        ))
        .map_err(|_| TimeParseError::InvalidDate)?;

    Ok(LocalizedTime {
        utc_text: text.trim().to_string(),
        local_text: format!("{wall} {zone_short}"),
        zone_name: zone_name.to_string(),
    })
}

/// Short label for a UTC offset, e.g. `UTC`, `UTC+2`, `UTC-5:30`. Used as
/// the `zone_short` fallback when the runtime cannot name its zone.
pub fn offset_label(offset: UtcOffset) -> String {
    let (hours, minutes, _) = offset.as_hms();
    if hours == 0 && minutes == 0 {
        "UTC".to_string()
    } else if minutes == 0 {
        format!("UTC{hours:+}")
    } else {
        format!("UTC{hours:+}:{:02}", minutes.abs())
    }
}

fn parse_date(token: &str) -> Result<Date, TimeParseError> {
    let bytes = token.as_bytes();
    if !token.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(TimeParseError::Pattern);
    }
    let year = digits(&token[0..4])?;
    let month = digits(&token[5..7])?;
    let day = digits(&token[8..10])?;

    let month = Month::try_from(month as u8).map_err(|_| TimeParseError::InvalidDate)?;
    Date::from_calendar_date(year, month, day as u8).map_err(|_| TimeParseError::InvalidDate)
}

fn parse_time(token: &str) -> Result<Time, TimeParseError> {
    if !token.is_ascii() {
        return Err(TimeParseError::Pattern);
    }
    let bytes = token.as_bytes();
    let seconds = match bytes.len() {
        5 => 0,
        8 => {
            if bytes[5] != b':' {
                return Err(TimeParseError::Pattern);
            }
            digits(&token[6..8])?
        }
        _ => return Err(TimeParseError::Pattern),
    };
    if bytes[2] != b':' {
        return Err(TimeParseError::Pattern);
    }
    let hours = digits(&token[0..2])?;
    let minutes = digits(&token[3..5])?;

    Time::from_hms(hours as u8, minutes as u8, seconds as u8)
        .map_err(|_| TimeParseError::InvalidDate)
}

fn digits(segment: &str) -> Result<i32, TimeParseError> {
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::Pattern);
    }
    segment.parse().map_err(|_| TimeParseError::Pattern)
}
