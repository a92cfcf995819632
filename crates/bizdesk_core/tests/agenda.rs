use bizdesk_core::{
    jobs_on, marked_days, toggle_selection, AgendaService, CalendarMonth, Client, InMemorySource,
    Job, RemoteError, RecordSource,
};
use chrono::{FixedOffset, NaiveDate, Utc};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn job(title: &str, scheduled_for: &str) -> Job {
    Job::new(title, scheduled_for, Client::new("Ana", "ana@x.es", "600"))
}

fn sample_jobs() -> Vec<Job> {
    vec![
        job("caldera", "2026-02-23T16:00:00"),
        job("ventana", "2026-02-23"),
        job("tejado", "2026-02-23T23:30:00-02:00"),
        job("pintura", "2026-03-02"),
        job("sin fecha", ""),
        job("basura", "pronto"),
        job("alarma", "1771804800000"),
    ]
}

fn titles(jobs: &[&Job]) -> Vec<String> {
    jobs.iter().map(|job| job.title.clone()).collect()
}

#[test]
fn marked_days_cover_only_the_requested_month() {
    let jobs = sample_jobs();
    let february = CalendarMonth::new(2026, 2).unwrap();

    let days = marked_days(&jobs, february, &Utc);
    // 1771804800000 is 2026-02-23T00:00:00Z.
    assert_eq!(
        days.into_iter().collect::<Vec<_>>(),
        vec![date(2026, 2, 23), date(2026, 2, 24)]
    );

    let march = CalendarMonth::new(2026, 3).unwrap();
    assert_eq!(marked_days(&jobs, march, &Utc).len(), 1);
}

#[test]
fn jobs_on_day_are_sorted_by_date_text() {
    let jobs = sample_jobs();
    let hits = jobs_on(&jobs, date(2026, 2, 23), &Utc);
    assert_eq!(titles(&hits), vec!["alarma", "ventana", "caldera"]);
}

#[test]
fn jobs_on_day_depend_on_zone() {
    let jobs = sample_jobs();
    let minus_two = FixedOffset::west_opt(2 * 3600).unwrap();

    let hits = jobs_on(&jobs, date(2026, 2, 23), &minus_two);
    assert_eq!(titles(&hits), vec!["ventana", "caldera", "tejado"]);
}

#[test]
fn tapping_toggles_selection() {
    let day = date(2026, 2, 23);
    let other = date(2026, 2, 24);
    assert_eq!(toggle_selection(None, day), Some(day));
    assert_eq!(toggle_selection(Some(day), day), None);
    assert_eq!(toggle_selection(Some(day), other), Some(other));
}

#[test]
fn service_opens_on_today_and_pages_months() {
    let today = date(2026, 2, 23);
    let mut agenda = AgendaService::new(Utc, today);
    assert_eq!(agenda.visible_month(), CalendarMonth::containing(today));
    assert_eq!(agenda.selected_day(), Some(today));

    assert_eq!(agenda.show_next_month(), CalendarMonth::new(2026, 3).unwrap());
    assert_eq!(agenda.show_previous_month(), CalendarMonth::new(2026, 2).unwrap());
    assert_eq!(agenda.show_previous_month(), CalendarMonth::new(2026, 1).unwrap());
    assert_eq!(agenda.selected_day(), Some(today));
    assert_eq!(agenda.grid().month(), CalendarMonth::new(2026, 1).unwrap());
}

#[test]
fn service_lists_jobs_for_the_selected_day() {
    let today = date(2026, 2, 23);
    let mut agenda = AgendaService::new(Utc, today);
    agenda.replace_jobs(sample_jobs());

    assert_eq!(agenda.undated_count(), 2);
    assert_eq!(agenda.marked_days().len(), 2);
    assert_eq!(titles(&agenda.selected_jobs()), vec!["alarma", "ventana", "caldera"]);

    assert_eq!(agenda.tap_day(today), None);
    assert!(agenda.selected_jobs().is_empty());

    assert_eq!(agenda.tap_day(date(2026, 3, 2)), Some(date(2026, 3, 2)));
    assert_eq!(titles(&agenda.selected_jobs()), vec!["pintura"]);
}

#[test]
fn service_loads_from_a_source_and_clears_on_failure() {
    let source = InMemorySource::with_records(sample_jobs());
    let mut agenda = AgendaService::new(Utc, date(2026, 2, 23));

    assert_eq!(agenda.load_from(&source).unwrap(), 7);
    assert!(agenda.jobs().iter().all(|job| job.id.is_some()));

    source
        .set_failure(Some(RemoteError::status(503, "maintenance")))
        .unwrap();
    let err = agenda.load_from(&source).unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(agenda.jobs().is_empty());
    assert!(source.list().is_err());
}
