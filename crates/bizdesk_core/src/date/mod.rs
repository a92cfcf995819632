//! Date normalization for loosely encoded scheduled dates.
//!
//! # Responsibility
//! - Turn backend date text into a calendar day relative to a time zone.
//! - Parse the time-zone setting used by configuration surfaces.
//!
//! # Invariants
//! - Unparseable text is an expected `None`, never an error or a panic.

pub mod normalize;
pub mod zone;
