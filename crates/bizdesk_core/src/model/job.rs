//! Job (scheduled task) record.
//!
//! # Responsibility
//! - Define the job shape rendered by the task list and the calendar.
//! - Define the create payload, which references client/worker by id.
//!
//! # Invariants
//! - `scheduled_for` is kept as raw backend text; callers normalize it with
//!   [`crate::date::normalize_date`] when they need a calendar day.
//! - Status/priority wire values are the backend enum names.

use crate::model::client::Client;
use crate::model::record::{Record, RecordId};
use crate::model::worker::Worker;
use serde::{Deserialize, Deserializer, Serialize};

/// Job lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "EN_PROCESO")]
    InProgress,
    #[serde(rename = "COMPLETADO")]
    Completed,
    #[serde(rename = "CANCELADO")]
    Cancelled,
}

impl JobStatus {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

/// Job urgency as chosen in the create form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobPriority {
    #[serde(rename = "BAJA")]
    Low,
    #[default]
    #[serde(rename = "MEDIA")]
    Medium,
    #[serde(rename = "ALTA")]
    High,
    #[serde(rename = "URGENTE")]
    Urgent,
}

impl JobPriority {
    /// Backend enum name, used as the priority badge text.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Low => "BAJA",
            Self::Medium => "MEDIA",
            Self::High => "ALTA",
            Self::Urgent => "URGENTE",
        }
    }
}

/// Job as returned by `api/trabajos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// Raw scheduled date text. Encoding varies by backend version.
    #[serde(
        rename = "fechaProgramada",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub scheduled_for: String,
    #[serde(rename = "estado", default)]
    pub status: JobStatus,
    #[serde(rename = "prioridad", default)]
    pub priority: JobPriority,
    #[serde(rename = "cliente")]
    pub client: Client,
    #[serde(rename = "trabajador", default)]
    pub worker: Option<Worker>,
}

impl Job {
    /// Creates an unsaved pending job for `client` with medium priority.
    pub fn new(title: impl Into<String>, scheduled_for: impl Into<String>, client: Client) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            scheduled_for: scheduled_for.into(),
            status: JobStatus::Pending,
            priority: JobPriority::Medium,
            client,
            worker: None,
        }
    }
}

impl Record for Job {
    const KIND: &'static str = "job";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }

    fn natural_key(&self) -> String {
        format!("{}{}", self.title, self.scheduled_for)
    }
}

/// Create payload for `POST api/trabajos`.
///
/// The backend expects ids, not nested client/worker objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "fechaProgramada")]
    pub scheduled_for: String,
    #[serde(rename = "estado")]
    pub status: JobStatus,
    #[serde(rename = "prioridad")]
    pub priority: JobPriority,
    #[serde(rename = "clienteId")]
    pub client_id: RecordId,
    #[serde(rename = "trabajadorId", default)]
    pub worker_id: Option<RecordId>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
