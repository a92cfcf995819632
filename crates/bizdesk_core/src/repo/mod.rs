//! Remote data source contracts.
//!
//! # Responsibility
//! - Define the per-kind CRUD contract the screens fetch records through.
//! - Provide an in-memory source for tests and offline snapshots.
//!
//! # Invariants
//! - Failures carry an HTTP-style status and a display message.
//! - Transport (HTTP client, auth headers) stays outside this crate.

pub mod memory;
pub mod source;
