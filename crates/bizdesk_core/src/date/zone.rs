//! Time-zone setting for calendar placement.

use crate::date::normalize::{normalize_date, CalendarDate};
use chrono::{FixedOffset, Local, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MAX_OFFSET_HOURS: i32 = 18;

/// Zone in which instants are placed on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneChoice {
    /// System zone of the running process.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl ZoneChoice {
    /// Normalizes `text` in this zone. See [`normalize_date`].
    pub fn normalize(&self, text: &str) -> Option<CalendarDate> {
        match self {
            Self::Local => normalize_date(text, &Local),
            Self::Utc => normalize_date(text, &Utc),
            Self::Fixed(offset) => normalize_date(text, offset),
        }
    }

    /// Returns the current calendar day in this zone.
    pub fn today(&self) -> CalendarDate {
        let now = Utc::now();
        match self {
            Self::Local => now.with_timezone(&Local).date_naive(),
            Self::Utc => now.date_naive(),
            Self::Fixed(offset) => now.with_timezone(offset).date_naive(),
        }
    }
}

impl Display for ZoneChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Rejected zone setting text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneParseError {
    pub input: String,
}

impl Display for ZoneParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported zone `{}`; expected local|utc|+HH:MM|-HH:MM",
            self.input
        )
    }
}

impl Error for ZoneParseError {}

impl FromStr for ZoneChoice {
    type Err = ZoneParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::Utc),
            _ => {}
        }

        parse_fixed_offset(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| ZoneParseError {
                input: trimmed.to_string(),
            })
    }
}

fn parse_fixed_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some(parts) => parts,
        None if rest.len() == 4 => (rest.get(..2)?, rest.get(2..)?),
        None => (rest, "0"),
    };
    if !is_digits(hours) || !is_digits(minutes) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > MAX_OFFSET_HOURS || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.len() <= 2 && value.bytes().all(|byte| byte.is_ascii_digit())
}
