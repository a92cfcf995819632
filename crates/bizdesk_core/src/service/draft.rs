//! Form input validation for new records.
//!
//! # Responsibility
//! - Convert raw form text into records and create requests.
//!
//! # Invariants
//! - Required fields are trimmed and must be non-empty.
//! - Optional fields are trimmed; blank values become `None`.

use crate::model::client::Client;
use crate::model::job::{JobPriority, JobStatus, NewJobRequest};
use crate::model::product::Product;
use crate::model::record::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for form drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// Required field is empty after trimming.
    MissingField(&'static str),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
        }
    }
}

impl Error for DraftError {}

/// Raw input of the new-client form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ClientDraft {
    pub fn validate(&self) -> Result<Client, DraftError> {
        Ok(Client {
            id: None,
            name: required(&self.name, "name")?,
            email: required(&self.email, "email")?,
            phone: required(&self.phone, "phone")?,
            address: optional(&self.address),
        })
    }
}

/// Raw input of the new-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub unit: String,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<Product, DraftError> {
        Ok(Product {
            id: None,
            name: required(&self.name, "name")?,
            description: optional(&self.description),
            unit: required(&self.unit, "unit")?,
        })
    }
}

/// Raw input of the new-job form.
///
/// The date text is sent as typed; the backend owns its format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub scheduled_for: String,
    pub status: JobStatus,
    pub priority: JobPriority,
    pub client_id: Option<RecordId>,
    pub worker_id: Option<RecordId>,
}

impl JobDraft {
    pub fn validate(&self) -> Result<NewJobRequest, DraftError> {
        Ok(NewJobRequest {
            title: required(&self.title, "title")?,
            description: optional(&self.description),
            scheduled_for: required(&self.scheduled_for, "scheduled_for")?,
            status: self.status,
            priority: self.priority,
            client_id: self.client_id.ok_or(DraftError::MissingField("client"))?,
            worker_id: self.worker_id,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
