//! Core logic for the bizdesk business-management client.
//! Screens hold fetched record snapshots; this crate searches them and places
//! jobs on the calendar.

pub mod calendar;
pub mod date;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use calendar::agenda::{jobs_on, marked_days, toggle_selection};
pub use calendar::month::{CalendarMonth, MonthGrid, Week, WEEK_START};
pub use date::normalize::{epoch_millis_at_start_of_day, normalize_date, CalendarDate};
pub use date::zone::{ZoneChoice, ZoneParseError};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::client::Client;
pub use model::job::{Job, JobPriority, JobStatus, NewJobRequest};
pub use model::product::Product;
pub use model::record::{Record, RecordId, RecordKey};
pub use model::worker::Worker;
pub use repo::memory::InMemorySource;
pub use repo::source::{RecordSource, RemoteError, RemoteResult};
pub use search::job_board::JobBoardFilter;
pub use search::text_filter::{filter_records, filter_refs, FieldAccessor, Searchable, TextQuery};
pub use service::agenda_service::AgendaService;
pub use service::catalog_service::RecordCatalog;
pub use service::draft::{ClientDraft, DraftError, JobDraft, ProductDraft};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
