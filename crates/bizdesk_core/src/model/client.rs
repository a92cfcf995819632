//! Client (customer) record.
//!
//! # Invariants
//! - `name`, `email` and `phone` are required by the backend.
//! - `email` is the natural key when `id` is absent.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Customer as returned by `api/clientes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Backend id; `None` before the first save.
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correoElectronico")]
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
}

impl Client {
    /// Creates an unsaved client without address.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: None,
        }
    }
}

impl Record for Client {
    const KIND: &'static str = "client";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }

    fn natural_key(&self) -> String {
        self.email.clone()
    }
}
