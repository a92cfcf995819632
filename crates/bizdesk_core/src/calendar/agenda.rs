//! Job placement queries for the month calendar.
//!
//! # Invariants
//! - Day lookups normalize each job's date text in the caller's zone.
//! - Jobs listed for a day are ordered by raw date text; ties keep input order.

use crate::calendar::month::CalendarMonth;
use crate::date::normalize::{normalize_date, CalendarDate};
use crate::model::job::Job;
use chrono::TimeZone;
use std::collections::BTreeSet;

/// Returns the days of `month` that have at least one job.
pub fn marked_days<Tz: TimeZone>(
    jobs: &[Job],
    month: CalendarMonth,
    zone: &Tz,
) -> BTreeSet<CalendarDate> {
    jobs.iter()
        .filter_map(|job| normalize_date(&job.scheduled_for, zone))
        .filter(|day| month.contains(*day))
        .collect()
}

/// Returns the jobs scheduled on `day`.
pub fn jobs_on<'a, Tz: TimeZone>(jobs: &'a [Job], day: CalendarDate, zone: &Tz) -> Vec<&'a Job> {
    let mut matching = jobs
        .iter()
        .filter(|job| normalize_date(&job.scheduled_for, zone) == Some(day))
        .collect::<Vec<_>>();
    matching.sort_by(|left, right| left.scheduled_for.cmp(&right.scheduled_for));
    matching
}

/// Applies a tap on `tapped`: the selected day toggles off, any other day
/// becomes the selection.
pub fn toggle_selection(selected: Option<CalendarDate>, tapped: CalendarDate) -> Option<CalendarDate> {
    if selected == Some(tapped) {
        None
    } else {
        Some(tapped)
    }
}
