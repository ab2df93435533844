//! Syllabus operations against the `syllabus` collection.

use crate::errors::ApiError;
use crate::models::CreateSyllabus;
use crate::remote::{collections, DocumentRef, RemoteStore};

/// Append a new syllabus document. Assumed already validated upstream; the
/// write handle is returned but nothing is cached client-side.
pub async fn create_syllabus(
    store: &RemoteStore,
    syllabus: &CreateSyllabus,
) -> Result<DocumentRef, ApiError> {
    store.insert(collections::SYLLABUS, syllabus).await
}
