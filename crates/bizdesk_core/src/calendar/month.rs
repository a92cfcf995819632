//! Calendar month and its week grid.
//!
//! # Invariants
//! - Weeks start on Monday.
//! - A grid has exactly `ceil((leading_blanks + day_count) / 7)` rows.

use crate::date::normalize::CalendarDate;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::fmt::{Display, Formatter};

/// First column of every grid row.
pub const WEEK_START: Weekday = Weekday::Mon;

const DAYS_PER_WEEK: u32 = 7;

/// One grid row; `None` cells are padding outside the month.
pub type Week = [Option<CalendarDate>; DAYS_PER_WEEK as usize];

/// Year/month pair shown by the calendar header.
///
/// Always holds a valid first day, so month arithmetic stops at chrono's
/// date range instead of producing an invalid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first_day: CalendarDate,
}

impl CalendarMonth {
    /// Returns `None` for months outside `1..=12` or chrono's year range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::containing)
    }

    /// Returns the month `date` belongs to.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(self) -> CalendarDate {
        self.first_day
    }

    /// `None` past the last month chrono can represent.
    pub fn next(self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(Self::containing)
    }

    /// `None` before the first month chrono can represent.
    pub fn previous(self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
    }

    /// Number of days in this month (28..=31).
    pub fn day_count(self) -> u32 {
        (29..=31)
            .rev()
            .find(|day| self.first_day.with_day(*day).is_some())
            .unwrap_or(28)
    }

    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl Display for CalendarMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Week rows for one month, padded to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: CalendarMonth,
    leading_blanks: u32,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn build(month: CalendarMonth) -> Self {
        let leading_blanks = leading_blanks(month.first_day().weekday());
        let day_count = month.day_count();
        let rows = (leading_blanks + day_count).div_ceil(DAYS_PER_WEEK);

        let mut days = (1..=day_count).filter_map(|day| month.first_day().with_day(day));
        let mut weeks = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let mut week: Week = [None; DAYS_PER_WEEK as usize];
            for (column, cell) in (0_u32..).zip(week.iter_mut()) {
                if row * DAYS_PER_WEEK + column >= leading_blanks {
                    *cell = days.next();
                }
            }
            weeks.push(week);
        }

        Self {
            month,
            leading_blanks,
            weeks,
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Padding cells before day 1.
    pub fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    /// Column headers, starting at [`WEEK_START`].
    pub fn weekday_headers() -> [Weekday; DAYS_PER_WEEK as usize] {
        let mut headers = [WEEK_START; DAYS_PER_WEEK as usize];
        let mut day = WEEK_START;
        for header in headers.iter_mut() {
            *header = day;
            day = day.succ();
        }
        headers
    }
}

fn leading_blanks(first_weekday: Weekday) -> u32 {
    (first_weekday.num_days_from_monday() + DAYS_PER_WEEK - WEEK_START.num_days_from_monday())
        % DAYS_PER_WEEK
}
