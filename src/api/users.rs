//! Profile operations against the `users` collection.
//!
//! Documents are keyed by the auth identity's uid. The email never passes
//! through here, and the image URL is only written by the upload flow.

use serde_json::json;

use crate::errors::ApiError;
use crate::models::{ProfilePatch, UserDoc};
use crate::remote::{collections, RemoteStore};

/// Fetch the signed-in user's profile document, `None` when it was never
/// created.
pub async fn get_profile(store: &RemoteStore, uid: &str) -> Result<Option<UserDoc>, ApiError> {
    store.get(collections::USERS, uid).await
}

/// Merge the account-form fields into the profile document.
pub async fn save_profile(
    store: &RemoteStore,
    uid: &str,
    patch: &ProfilePatch,
) -> Result<(), ApiError> {
    store.merge(collections::USERS, uid, patch).await
}

/// Merge only the image URL into the profile document. Used by the upload
/// flow so a later full profile save cannot blank it out.
pub async fn save_profile_image(
    store: &RemoteStore,
    uid: &str,
    img_url: &str,
) -> Result<(), ApiError> {
    store
        .merge(collections::USERS, uid, &json!({ "imgUrl": img_url }))
        .await
}
