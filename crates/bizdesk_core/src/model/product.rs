//! Product (inventory item) record.
//!
//! # Invariants
//! - `name` and `unit` are required; `description` is optional.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Product as returned by `api/productos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// Unit of measure shown next to the name (`kg`, `ud`, `m`...).
    #[serde(rename = "unidadMedida")]
    pub unit: String,
}

impl Product {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            unit: unit.into(),
        }
    }
}

impl Record for Product {
    const KIND: &'static str = "product";

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
