//! Record identity shared by every model.
//!
//! # Responsibility
//! - Give each record kind a stable list key for rendering and lookups.
//!
//! # Invariants
//! - `RecordKey::Id` wins whenever the backend assigned an id.
//! - Natural keys are derived from fields only; they are never persisted.

use std::fmt::{Display, Formatter};

/// Backend-assigned numeric identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// List identity for a record: backend id, or a natural key fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKey {
    Id(RecordId),
    Natural(String),
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Natural(key) => write!(f, "{key}"),
        }
    }
}

/// Common contract for records served by the backend.
pub trait Record {
    /// Short kind label used in log events (`kind=client`).
    const KIND: &'static str;

    /// Backend id, `None` for records that were never saved.
    fn id(&self) -> Option<RecordId>;

    /// Replaces the backend id. Used by sources that assign ids on create.
    fn set_id(&mut self, id: Option<RecordId>);

    /// Field-derived fallback identity.
    fn natural_key(&self) -> String;

    /// Returns the list key: id when assigned, otherwise the natural key.
    fn key(&self) -> RecordKey {
        match self.id() {
            Some(id) => RecordKey::Id(id),
            None => RecordKey::Natural(self.natural_key()),
        }
    }
}
