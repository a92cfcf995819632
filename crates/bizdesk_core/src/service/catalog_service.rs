//! Record list use-case service.
//!
//! # Responsibility
//! - Load a record snapshot from a [`RecordSource`] and serve searches on it.
//! - Keep the last load failure for display instead of failing the screen.
//!
//! # Invariants
//! - A failed load clears the snapshot; screens never show stale rows next to
//!   an error message.
//! - Searches run on the snapshot only; they never hit the source.
//! - A create the source accepted is reported as created, even when the
//!   follow-up reload fails.
//! - Log events carry kind/count/status only, never record content or queries.

use crate::model::record::{Record, RecordId, RecordKey};
use crate::repo::source::{RecordSource, RemoteError, RemoteResult};
use crate::search::text_filter::{filter_refs, Searchable};
use log::{info, warn};

/// Snapshot-holding list service for one record kind.
pub struct RecordCatalog<T, S> {
    source: S,
    snapshot: Vec<T>,
    last_error: Option<RemoteError>,
}

impl<T, S> RecordCatalog<T, S>
where
    T: Record + Searchable + Clone,
    S: RecordSource<T>,
{
    /// Creates an empty catalog; call [`Self::load`] to fetch.
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: Vec::new(),
            last_error: None,
        }
    }

    /// Replaces the snapshot with a fresh fetch.
    ///
    /// Returns the number of loaded records. On failure the snapshot is
    /// cleared and the error is kept for [`Self::error_message`].
    pub fn load(&mut self) -> RemoteResult<usize> {
        match self.source.list() {
            Ok(records) => {
                info!(
                    "event=catalog_load module=service status=ok kind={} count={}",
                    T::KIND,
                    records.len()
                );
                self.snapshot = records;
                self.last_error = None;
                Ok(self.snapshot.len())
            }
            Err(err) => {
                warn!(
                    "event=catalog_load module=service status=error kind={} http_status={}",
                    T::KIND,
                    status_label(&err)
                );
                self.snapshot.clear();
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn records(&self) -> &[T] {
        &self.snapshot
    }

    /// Returns snapshot records matching `query`, in snapshot order.
    pub fn search(&self, query: &str) -> Vec<&T> {
        filter_refs(&self.snapshot, query)
    }

    /// Finds a snapshot record by list key.
    pub fn find(&self, key: &RecordKey) -> Option<&T> {
        self.snapshot.iter().find(|record| record.key() == *key)
    }

    /// Creates `record` on the source and reloads the snapshot.
    ///
    /// Returns the created record once the source accepted it. A failed
    /// reload does not undo that; it is kept in [`Self::last_error`] like any
    /// other load failure.
    pub fn create(&mut self, record: &T) -> RemoteResult<T> {
        let created = self.source.create(record)?;
        info!(
            "event=record_create module=service status=ok kind={}",
            T::KIND
        );
        // Reload failures are already logged and stored by `load`.
        let _ = self.load();
        Ok(created)
    }

    /// Deletes `id` on the source and drops it from the snapshot.
    pub fn delete(&mut self, id: RecordId) -> RemoteResult<()> {
        if let Err(err) = self.source.delete(id) {
            warn!(
                "event=record_delete module=service status=error kind={} http_status={}",
                T::KIND,
                status_label(&err)
            );
            return Err(err);
        }
        self.snapshot.retain(|record| record.id() != Some(id));
        info!(
            "event=record_delete module=service status=ok kind={}",
            T::KIND
        );
        Ok(())
    }

    pub fn last_error(&self) -> Option<&RemoteError> {
        self.last_error.as_ref()
    }

    /// Display text for the last load failure.
    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

fn status_label(err: &RemoteError) -> String {
    err.status_code()
        .map_or_else(|| "none".to_string(), |status| status.to_string())
}
