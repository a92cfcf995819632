//! In-memory search over fetched record snapshots.
//!
//! # Responsibility
//! - Filter record lists by free-text query on designated fields.
//! - Split the job list into pending/completed boards.
//!
//! # Invariants
//! - Filtering never reorders or mutates the input snapshot.

pub mod fields;
pub mod job_board;
pub mod text_filter;
