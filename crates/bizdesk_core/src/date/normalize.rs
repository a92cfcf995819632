//! Lenient date-text normalization.
//!
//! # Responsibility
//! - Accept every date encoding the backend has used for scheduled jobs.
//! - Reduce each encoding to a calendar day in the caller's zone.
//!
//! # Invariants
//! - Attempts run in a fixed order and the first success wins:
//!   calendar date, local date-time, offset date-time, epoch millis.
//! - Local encodings keep their written date; instant encodings are
//!   converted to the target zone first.
//! - Only strictly positive epoch millis are accepted.
//! - Textual encodings are strict ISO shapes: four-digit year, two-digit
//!   fields, `-` date separators and an uppercase `T` before the time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Year/month/day value used for calendar placement.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CalendarDate = NaiveDate;

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";
const CALENDAR_DATE_LEN: usize = 10;
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
// `%#z` also accepts `Z`, `+01` and `+0100`.
const OFFSET_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

/// Normalizes `text` to a calendar day in `zone`.
///
/// Returns `None` ("no date") for blank text, non-date text, non-positive
/// integers and out-of-range values.
pub fn normalize_date<Tz: TimeZone>(text: &str, zone: &Tz) -> Option<CalendarDate> {
    let raw = text.trim();
    if raw.is_empty() {
        return None;
    }

    parse_calendar_date(raw)
        .or_else(|| parse_local_date_time(raw))
        .or_else(|| parse_offset_date_time(raw, zone))
        .or_else(|| parse_epoch_millis(raw, zone))
}

/// Returns epoch milliseconds of local midnight of `date` in `zone`.
///
/// When midnight is skipped by a DST transition, returns `None`.
pub fn epoch_millis_at_start_of_day<Tz: TimeZone>(date: CalendarDate, zone: &Tz) -> Option<i64> {
    zone.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|instant| instant.timestamp_millis())
}

fn parse_calendar_date(raw: &str) -> Option<CalendarDate> {
    if raw.len() != CALENDAR_DATE_LEN || !has_date_shape(raw.as_bytes()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, CALENDAR_DATE_FORMAT).ok()
}

fn parse_local_date_time(raw: &str) -> Option<CalendarDate> {
    if !has_date_time_shape(raw) {
        return None;
    }
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|local| local.date())
}

fn parse_offset_date_time<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<CalendarDate> {
    if !has_date_time_shape(raw) {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, OFFSET_DATE_TIME_FORMAT))
        .ok()
        .map(|instant| instant.with_timezone(zone).date_naive())
}

fn parse_epoch_millis<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<CalendarDate> {
    let millis = raw.parse::<i64>().ok().filter(|millis| *millis > 0)?;
    zone.timestamp_millis_opt(millis)
        .single()
        .map(|instant| instant.date_naive())
}

/// `YYYY-MM-DD` prefix, ASCII digits only.
fn has_date_shape(bytes: &[u8]) -> bool {
    bytes.len() >= CALENDAR_DATE_LEN
        && bytes[..CALENDAR_DATE_LEN]
            .iter()
            .enumerate()
            .all(|(index, byte)| match index {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}

/// `YYYY-MM-DDTHH:MM` prefix, with `:SS` when seconds follow.
fn has_date_time_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if !has_date_shape(bytes) {
        return false;
    }
    let time = &bytes[CALENDAR_DATE_LEN..];
    let hours_minutes = time.len() >= 6
        && time[0] == b'T'
        && is_two_digits(&time[1..3])
        && time[3] == b':'
        && is_two_digits(&time[4..6]);
    match time.get(6) {
        Some(b':') => hours_minutes && time.len() >= 9 && is_two_digits(&time[7..9]),
        _ => hours_minutes,
    }
}

fn is_two_digits(bytes: &[u8]) -> bool {
    bytes.len() == 2 && bytes.iter().all(u8::is_ascii_digit)
}
