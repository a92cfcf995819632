//! Record source contract and its error type.

use crate::model::record::{Record, RecordId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure reported by a record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Backend answered with a non-success status.
    Status { status: u16, message: String },
    /// Request did not complete or the body could not be decoded.
    Transport(String),
}

impl RemoteError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// 404 for a record id unknown to the source.
    pub fn not_found(kind: &str, id: RecordId) -> Self {
        Self::status(404, format!("{kind} {id} not found"))
    }

    /// HTTP-style status, `None` for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status, message } if message.trim().is_empty() => {
                write!(f, "HTTP {status}")
            }
            Self::Status { status, message } => write!(f, "HTTP {status}: {}", message.trim()),
            Self::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl Error for RemoteError {}

/// CRUD access to one record kind on the backend.
pub trait RecordSource<T: Record> {
    fn list(&self) -> RemoteResult<Vec<T>>;
    fn get(&self, id: RecordId) -> RemoteResult<T>;
    /// Creates `record`; the returned copy carries the assigned id.
    fn create(&self, record: &T) -> RemoteResult<T>;
    fn update(&self, id: RecordId, record: &T) -> RemoteResult<T>;
    fn delete(&self, id: RecordId) -> RemoteResult<()>;
}

impl<T: Record, S: RecordSource<T> + ?Sized> RecordSource<T> for &S {
    fn list(&self) -> RemoteResult<Vec<T>> {
        (**self).list()
    }

    fn get(&self, id: RecordId) -> RemoteResult<T> {
        (**self).get(id)
    }

    fn create(&self, record: &T) -> RemoteResult<T> {
        (**self).create(record)
    }

    fn update(&self, id: RecordId, record: &T) -> RemoteResult<T> {
        (**self).update(id, record)
    }

    fn delete(&self, id: RecordId) -> RemoteResult<()> {
        (**self).delete(id)
    }
}
