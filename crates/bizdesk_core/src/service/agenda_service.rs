//! Calendar screen use-case service.
//!
//! # Responsibility
//! - Own the calendar screen state: jobs snapshot, visible month, selection.
//! - Answer grid/marker/day-list queries for the current state.
//!
//! # Invariants
//! - Paging months never changes the selected day.
//! - `selected_jobs` is empty whenever no day is selected.

use crate::calendar::agenda::{jobs_on, marked_days, toggle_selection};
use crate::calendar::month::{CalendarMonth, MonthGrid};
use crate::date::normalize::{normalize_date, CalendarDate};
use crate::model::job::Job;
use crate::repo::source::{RecordSource, RemoteResult};
use chrono::{TimeZone, Utc};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Month calendar state over a jobs snapshot.
pub struct AgendaService<Tz: TimeZone> {
    zone: Tz,
    jobs: Vec<Job>,
    visible_month: CalendarMonth,
    selected: Option<CalendarDate>,
}

impl<Tz: TimeZone> AgendaService<Tz> {
    /// Opens the calendar on `today`'s month with `today` selected.
    pub fn new(zone: Tz, today: CalendarDate) -> Self {
        Self {
            zone,
            jobs: Vec::new(),
            visible_month: CalendarMonth::containing(today),
            selected: Some(today),
        }
    }

    /// Same as [`Self::new`] using the current day in `zone`.
    pub fn starting_today(zone: Tz) -> Self {
        let today = Utc::now().with_timezone(&zone).date_naive();
        Self::new(zone, today)
    }

    /// Replaces the jobs snapshot.
    pub fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        debug!(
            "event=agenda_jobs module=service count={} undated={}",
            self.jobs.len(),
            self.undated_count()
        );
    }

    /// Fetches jobs from `source`; on failure the snapshot is emptied.
    pub fn load_from<S: RecordSource<Job>>(&mut self, source: &S) -> RemoteResult<usize> {
        match source.list() {
            Ok(jobs) => {
                self.replace_jobs(jobs);
                Ok(self.jobs.len())
            }
            Err(err) => {
                warn!("event=agenda_load module=service status=error");
                self.jobs.clear();
                Err(err)
            }
        }
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn visible_month(&self) -> CalendarMonth {
        self.visible_month
    }

    pub fn selected_day(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Stays on the current month at the start of the date range.
    pub fn show_previous_month(&mut self) -> CalendarMonth {
        if let Some(month) = self.visible_month.previous() {
            self.visible_month = month;
        }
        self.visible_month
    }

    /// Stays on the current month at the end of the date range.
    pub fn show_next_month(&mut self) -> CalendarMonth {
        if let Some(month) = self.visible_month.next() {
            self.visible_month = month;
        }
        self.visible_month
    }

    /// Jumps straight to `month`; the selection is kept.
    pub fn show_month(&mut self, month: CalendarMonth) {
        self.visible_month = month;
    }

    /// Toggles selection of `day`; returns the new selection.
    pub fn tap_day(&mut self, day: CalendarDate) -> Option<CalendarDate> {
        self.selected = toggle_selection(self.selected, day);
        self.selected
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.visible_month)
    }

    /// Days of the visible month that carry a job marker.
    pub fn marked_days(&self) -> BTreeSet<CalendarDate> {
        marked_days(&self.jobs, self.visible_month, &self.zone)
    }

    /// Jobs on the selected day, ordered by date text.
    pub fn selected_jobs(&self) -> Vec<&Job> {
        match self.selected {
            Some(day) => jobs_on(&self.jobs, day, &self.zone),
            None => Vec::new(),
        }
    }

    /// Jobs whose date text cannot be placed on the calendar.
    pub fn undated_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|job| normalize_date(&job.scheduled_for, &self.zone).is_none())
            .count()
    }
}
