//! Record models fetched from the business backend.
//!
//! # Responsibility
//! - Define the client/worker/product/job shapes the screens hold in memory.
//! - Keep wire field names identical to the backend DTOs.
//!
//! # Invariants
//! - Records are immutable snapshots once fetched.
//! - Identity is the backend id when present, otherwise a natural key.

pub mod client;
pub mod job;
pub mod product;
pub mod record;
pub mod worker;
