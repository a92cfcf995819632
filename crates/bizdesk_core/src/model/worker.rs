//! Worker record.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Employee that can be assigned to jobs (`api/trabajadores`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correoElectronico", default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}

impl Worker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            phone: None,
        }
    }
}

impl Record for Worker {
    const KIND: &'static str = "worker";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }

    fn natural_key(&self) -> String {
        self.name.clone()
    }
}
