//! Month calendar model for the scheduling screen.
//!
//! # Responsibility
//! - Month arithmetic and Monday-first grid layout.
//! - Place jobs on days via date normalization.
//!
//! # Invariants
//! - Jobs whose date text cannot be normalized never appear on the calendar.

pub mod agenda;
pub mod month;
