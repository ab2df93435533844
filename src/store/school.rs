//! School collection slice and its async store façade.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::FetchStatus;
use crate::api;
use crate::errors::ApiError;
use crate::models::{NewSchool, School, SchoolPatch};
use crate::remote::{collections, DocumentRef, RemoteStore};

/// Cached state of the `schools` collection.
///
/// `data` is absent until the first successful fetch; an empty vector means
/// "fetched, no schools", which is a different state than "never fetched"
/// and does not re-trigger the fetch guard.
#[derive(Debug)]
pub struct SchoolSlice {
    data: Option<Vec<School>>,
    status: FetchStatus,
    error: Option<String>,
    fetch_in_flight: bool,
}

impl Default for SchoolSlice {
    fn default() -> Self {
        Self::new()
    }
}

impl SchoolSlice {
    pub fn new() -> Self {
        Self {
            data: None,
            status: FetchStatus::Loading,
            error: None,
            fetch_in_flight: false,
        }
    }

    /// Cached records in store order, absent before the first fetch.
    pub fn data(&self) -> Option<&[School]> {
        self.data.as_deref()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch guard. Returns `true` and marks the fetch in flight when a
    /// remote query should be issued; `false` when data is already cached
    /// (even an empty list) or another fetch is pending.
    pub fn begin_fetch(&mut self) -> bool {
        if self.data.is_some() || self.fetch_in_flight {
            return false;
        }
        self.fetch_in_flight = true;
        self.status = FetchStatus::Loading;
        true
    }

    /// Apply the outcome of the remote query started by [`begin_fetch`].
    ///
    /// [`begin_fetch`]: SchoolSlice::begin_fetch
    pub fn finish_fetch(&mut self, result: Result<Vec<School>, String>) {
        self.fetch_in_flight = false;
        match result {
            Ok(schools) => {
                self.status = FetchStatus::Idle;
                self.error = None;
                self.data = Some(schools);
            }
            Err(message) => {
                self.status = FetchStatus::Error;
                self.error = Some(message);
            }
        }
    }

    /// Append one record to the end of the cache. A no-op before the first
    /// successful fetch.
    pub fn add_school(&mut self, school: School) {
        match &mut self.data {
            Some(data) => data.push(school),
            None => {
                tracing::warn!("add_school called before the school cache was populated");
            }
        }
    }

    /// Shallow-merge the patch into the record with the given id, preserving
    /// its position. Silently no-ops when the id is not cached.
    pub fn update_school(&mut self, id: &str, patch: &SchoolPatch) {
        if let Some(data) = &mut self.data {
            if let Some(school) = data.iter_mut().find(|s| s.id == id) {
                patch.apply_to(school);
            }
        }
    }

    /// Remove the record with the given id. A no-op when it is not cached.
    pub fn delete_school(&mut self, id: &str) {
        if let Some(data) = &mut self.data {
            data.retain(|s| s.id != id);
        }
    }

    /// Reset to the initial state so the next fetch hits the remote again.
    pub fn clear(&mut self) {
        self.data = None;
        self.status = FetchStatus::Loading;
        self.error = None;
    }
}

/// Async façade over [`SchoolSlice`] plus the remote client.
///
/// Every write awaits the remote acknowledgment before mutating the cache,
/// so a failed write leaves the cache in its pre-operation state.
#[derive(Debug)]
pub struct SchoolStore {
    remote: RemoteStore,
    state: Mutex<SchoolSlice>,
}

impl SchoolStore {
    pub fn new(remote: RemoteStore) -> Self {
        Self {
            remote,
            state: Mutex::new(SchoolSlice::new()),
        }
    }

    // A poisoned lock only means another caller panicked mid-mutation;
    // the slice itself is still usable.
    fn lock(&self) -> MutexGuard<'_, SchoolSlice> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Guarded fetch of the whole collection: the remote query is only
    /// issued when nothing is cached and no fetch is already in flight, so
    /// two calls in succession produce exactly one query.
    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        if !self.lock().begin_fetch() {
            return Ok(());
        }

        match self.remote.list::<School>(collections::SCHOOLS).await {
            Ok(schools) => {
                tracing::debug!(count = schools.len(), "fetched school collection");
                self.lock().finish_fetch(Ok(schools));
                Ok(())
            }
            Err(e) => {
                self.lock().finish_fetch(Err(e.message()));
                Err(e)
            }
        }
    }

    /// Insert remotely, then append the acknowledged record to the cache.
    pub async fn add_school(&self, school: NewSchool) -> Result<School, ApiError> {
        let DocumentRef { id } = api::add_school(&self.remote, &school).await?;
        let school = school.into_school(id);
        self.lock().add_school(school.clone());
        Ok(school)
    }

    /// Merge-update remotely, then mirror the merge into the cache.
    pub async fn update_school(&self, id: &str, patch: SchoolPatch) -> Result<(), ApiError> {
        api::update_school(&self.remote, &patch, id).await?;
        self.lock().update_school(id, &patch);
        Ok(())
    }

    /// Delete remotely, then drop the record from the cache.
    pub async fn delete_school(&self, id: &str) -> Result<(), ApiError> {
        api::delete_school(&self.remote, id).await?;
        self.lock().delete_school(id);
        Ok(())
    }

    /// Snapshot of the cached records, absent before the first fetch.
    pub fn schools(&self) -> Option<Vec<School>> {
        self.lock().data.clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.lock().status()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Reset on sign-out. The next fetch hits the remote again.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Name sort direction offered by the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort a view-level copy of the schools by name. The sort is stable, so
/// equal-name entries keep their relative store order, and the cache itself
/// is never reordered.
pub fn sort_schools(schools: &mut [School], order: SortOrder) {
    match order {
        SortOrder::Ascending => schools.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Descending => schools.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}
