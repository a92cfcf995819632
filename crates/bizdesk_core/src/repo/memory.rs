//! In-memory record source.
//!
//! # Responsibility
//! - Serve a fixed snapshot with backend-like id assignment.
//! - Let tests inject a failure that every call returns.
//!
//! # Invariants
//! - Ids are unique and increase monotonically; deleted ids are not reused.
//! - Seeded records keep their ids; records without one get the next id.

use crate::model::record::{Record, RecordId};
use crate::repo::source::{RecordSource, RemoteError, RemoteResult};
use std::sync::{Mutex, MutexGuard};

struct MemoryState<T> {
    records: Vec<T>,
    next_id: RecordId,
    failure: Option<RemoteError>,
}

/// Thread-safe in-memory [`RecordSource`].
pub struct InMemorySource<T> {
    state: Mutex<MemoryState<T>>,
}

impl<T: Record + Clone> InMemorySource<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seeds the source with `records`, assigning ids where missing.
    pub fn with_records(records: Vec<T>) -> Self {
        let mut next_id = records
            .iter()
            .filter_map(|record| record.id())
            .max()
            .map_or(1, |max| max + 1);

        let records = records
            .into_iter()
            .map(|mut record| {
                if record.id().is_none() {
                    record.set_id(Some(next_id));
                    next_id += 1;
                }
                record
            })
            .collect();

        Self {
            state: Mutex::new(MemoryState {
                records,
                next_id,
                failure: None,
            }),
        }
    }

    /// Makes every following call fail with `failure` (`None` clears it).
    pub fn set_failure(&self, failure: Option<RemoteError>) -> RemoteResult<()> {
        self.lock()?.failure = failure;
        Ok(())
    }

    fn lock(&self) -> RemoteResult<MutexGuard<'_, MemoryState<T>>> {
        self.state
            .lock()
            .map_err(|_| RemoteError::Transport("in-memory source lock poisoned".to_string()))
    }

    fn lock_healthy(&self) -> RemoteResult<MutexGuard<'_, MemoryState<T>>> {
        let state = self.lock()?;
        if let Some(failure) = state.failure.clone() {
            return Err(failure);
        }
        Ok(state)
    }
}

impl<T: Record + Clone> Default for InMemorySource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone> RecordSource<T> for InMemorySource<T> {
    fn list(&self) -> RemoteResult<Vec<T>> {
        Ok(self.lock_healthy()?.records.clone())
    }

    fn get(&self, id: RecordId) -> RemoteResult<T> {
        self.lock_healthy()?
            .records
            .iter()
            .find(|record| record.id() == Some(id))
            .cloned()
            .ok_or_else(|| RemoteError::not_found(T::KIND, id))
    }

    fn create(&self, record: &T) -> RemoteResult<T> {
        let mut state = self.lock_healthy()?;
        let mut created = record.clone();
        created.set_id(Some(state.next_id));
        state.next_id += 1;
        state.records.push(created.clone());
        Ok(created)
    }

    fn update(&self, id: RecordId, record: &T) -> RemoteResult<T> {
        let mut state = self.lock_healthy()?;
        let slot = state
            .records
            .iter_mut()
            .find(|existing| existing.id() == Some(id))
            .ok_or_else(|| RemoteError::not_found(T::KIND, id))?;
        let mut updated = record.clone();
        updated.set_id(Some(id));
        *slot = updated.clone();
        Ok(updated)
    }

    fn delete(&self, id: RecordId) -> RemoteResult<()> {
        let mut state = self.lock_healthy()?;
        let before = state.records.len();
        state.records.retain(|record| record.id() != Some(id));
        if state.records.len() == before {
            return Err(RemoteError::not_found(T::KIND, id));
        }
        Ok(())
    }
}
