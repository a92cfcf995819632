//! Screen-level use-case services.
//!
//! # Responsibility
//! - Orchestrate record sources into the snapshots screens render.
//! - Keep screen state transitions (month paging, day selection) in core.
//! - Turn raw form input into validated records and requests.

pub mod agenda_service;
pub mod catalog_service;
pub mod draft;
