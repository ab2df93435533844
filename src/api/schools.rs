//! School operations against the `schools` collection.

use crate::errors::ApiError;
use crate::models::{NewSchool, SchoolPatch};
use crate::remote::{collections, DocumentRef, RemoteStore};

/// Insert a new school document and return the assigned identifier.
pub async fn add_school(store: &RemoteStore, school: &NewSchool) -> Result<DocumentRef, ApiError> {
    store.insert(collections::SCHOOLS, school).await
}

/// Merge the given fields into the school identified by `id`. Fields not
/// present in the patch are left untouched.
pub async fn update_school(
    store: &RemoteStore,
    patch: &SchoolPatch,
    id: &str,
) -> Result<(), ApiError> {
    store.merge(collections::SCHOOLS, id, patch).await
}

/// Delete a school document. Deleting a non-existent id is not a hard
/// failure beyond whatever the remote store reports.
pub async fn delete_school(store: &RemoteStore, id: &str) -> Result<(), ApiError> {
    store.delete(collections::SCHOOLS, id).await
}
