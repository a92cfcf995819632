//! Command-line probe for `bizdesk_core`.
//!
//! # Responsibility
//! - Run core search/date/calendar operations over JSON record snapshots.
//! - Keep output deterministic for quick local sanity checks.

use anyhow::{anyhow, Context, Result};
use bizdesk_core::{
    default_log_level, init_logging, AgendaService, CalendarDate, CalendarMonth, Client,
    InMemorySource, Job, JobBoardFilter, MonthGrid, Product, Record, RecordCatalog, Searchable,
    Worker, ZoneChoice,
};
use chrono::{Datelike, Local, TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when absent.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[arg(long, global = true, default_value_t = default_log_level().to_string())]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints core linkage info.
    Ping,
    /// Filters a JSON record list by free-text query.
    Filter {
        #[arg(long, value_enum)]
        kind: RecordKind,
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Normalizes date texts to calendar days.
    Normalize {
        #[arg(long, default_value = "local")]
        zone: ZoneChoice,
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },
    /// Prints a month grid with job markers and the jobs of one day.
    Agenda {
        #[arg(long)]
        file: PathBuf,
        /// `YYYY-MM`; defaults to the month of the selected day.
        #[arg(long)]
        month: Option<String>,
        /// `YYYY-MM-DD`; defaults to today in `--zone`.
        #[arg(long)]
        day: Option<CalendarDate>,
        #[arg(long, default_value = "local")]
        zone: ZoneChoice,
    },
    /// Lists pending or completed jobs.
    Board {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        completed: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RecordKind {
    Clients,
    Workers,
    Products,
    Jobs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        start_logging(&cli.log_level, log_dir)?;
    }

    match cli.command {
        Command::Ping => {
            println!("bizdesk_core ping={}", bizdesk_core::ping());
            println!("bizdesk_core version={}", bizdesk_core::core_version());
        }
        Command::Filter { kind, file, query } => {
            info!("event=cli_command module=cli command=filter kind={kind:?}");
            match kind {
                RecordKind::Clients => run_filter::<Client>(&file, &query, client_line)?,
                RecordKind::Workers => run_filter::<Worker>(&file, &query, worker_line)?,
                RecordKind::Products => run_filter::<Product>(&file, &query, product_line)?,
                RecordKind::Jobs => run_filter::<Job>(&file, &query, job_line)?,
            }
        }
        Command::Normalize { zone, texts } => {
            info!("event=cli_command module=cli command=normalize zone={zone}");
            for text in texts {
                match zone.normalize(&text) {
                    Some(day) => println!("{text}\t{day}"),
                    None => println!("{text}\t-"),
                }
            }
        }
        Command::Agenda {
            file,
            month,
            day,
            zone,
        } => {
            info!("event=cli_command module=cli command=agenda zone={zone}");
            let jobs = read_snapshot::<Job>(&file)?;
            let month = month
                .as_deref()
                .map(|value| {
                    CalendarMonth::parse(value).ok_or_else(|| anyhow!("invalid month `{value}`"))
                })
                .transpose()?;
            let day = day.unwrap_or_else(|| zone.today());
            match zone {
                ZoneChoice::Local => print_agenda(Local, jobs, day, month),
                ZoneChoice::Utc => print_agenda(Utc, jobs, day, month),
                ZoneChoice::Fixed(offset) => print_agenda(offset, jobs, day, month),
            }
        }
        Command::Board { file, completed } => {
            info!("event=cli_command module=cli command=board");
            let jobs = read_snapshot::<Job>(&file)?;
            let board = if completed {
                JobBoardFilter::Completed
            } else {
                JobBoardFilter::Pending
            };
            for job in board.apply(&jobs) {
                println!("{}", job_line(job));
            }
        }
    }

    Ok(())
}

fn start_logging(level: &str, log_dir: &str) -> Result<()> {
    init_logging(level, log_dir).context("failed to start logging")
}

fn read_snapshot<T: DeserializeOwned>(file: &Path) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read `{}`", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid record list in `{}`", file.display()))
}

fn run_filter<T>(file: &Path, query: &str, line: fn(&T) -> String) -> Result<()>
where
    T: Record + Searchable + Clone + DeserializeOwned,
{
    let source = InMemorySource::with_records(read_snapshot::<T>(file)?);
    let mut catalog: RecordCatalog<T, _> = RecordCatalog::new(source);
    catalog.load()?;

    let hits = catalog.search(query);
    for record in &hits {
        println!("{}\t{}", record.key(), line(record));
    }
    println!("results: {}", hits.len());
    Ok(())
}

fn print_agenda<Tz: TimeZone>(
    zone: Tz,
    jobs: Vec<Job>,
    day: CalendarDate,
    month: Option<CalendarMonth>,
) {
    let mut agenda = AgendaService::new(zone, day);
    agenda.replace_jobs(jobs);
    if let Some(month) = month {
        agenda.show_month(month);
    }

    let marked = agenda.marked_days();
    let grid = agenda.grid();
    println!("{}", grid.month());
    let headers = MonthGrid::weekday_headers()
        .iter()
        .map(|weekday| format!("{:>3}", &weekday.to_string()[..2]))
        .collect::<String>();
    println!("{headers}");
    for week in grid.weeks() {
        let row = week
            .iter()
            .map(|cell| match cell {
                Some(date) if marked.contains(date) => format!("{:>2}*", date.day()),
                Some(date) => format!("{:>2} ", date.day()),
                None => "   ".to_string(),
            })
            .collect::<String>();
        println!("{}", row.trim_end());
    }

    println!();
    println!("jobs on {day}:");
    for job in agenda.selected_jobs() {
        println!("{}", job_line(job));
    }
    let undated = agenda.undated_count();
    if undated > 0 {
        println!("undated jobs: {undated}");
    }
}

fn client_line(client: &Client) -> String {
    format!("{}\t{}\t{}", client.name, client.email, client.phone)
}

fn worker_line(worker: &Worker) -> String {
    worker.name.clone()
}

fn product_line(product: &Product) -> String {
    format!("{}\t{}", product.name, product.unit)
}

fn job_line(job: &Job) -> String {
    format!(
        "{}\t{}\t{}",
        job.scheduled_for,
        job.priority.as_wire(),
        if job.title.trim().is_empty() {
            "(untitled)"
        } else {
            job.title.as_str()
        }
    )
}

#[cfg(test)]
mod tests {
    use super::start_logging;
    use bizdesk_core::LoggingError;

    #[test]
    fn logging_failure_keeps_its_cause_chain() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let log_dir = blocker.join("logs");

        let err = start_logging("info", log_dir.to_str().unwrap()).unwrap_err();

        assert_eq!(err.to_string(), "failed to start logging");
        assert!(matches!(
            err.downcast_ref::<LoggingError>(),
            Some(LoggingError::CreateDirectory { .. })
        ));
        assert!(err
            .chain()
            .any(|cause| cause.downcast_ref::<std::io::Error>().is_some()));
    }
}
