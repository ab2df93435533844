//! User profile models.
//!
//! The cached profile combines the `users/{uid}` document with the email
//! from the authentication identity; the document itself never stores the
//! email and the profile-save path never writes it.

use serde::{Deserialize, Serialize};

/// The signed-in user's profile as held by the synchronization store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Always sourced from the auth identity, never from the document.
    pub email: String,
    pub phone: i64,
    pub username: String,
    /// Download URL of the profile image; empty when none was uploaded.
    #[serde(default)]
    pub img_url: String,
    pub updated_at: String,
}

/// The `users/{uid}` document as stored remotely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub name: String,
    pub phone: i64,
    pub username: String,
    #[serde(default)]
    pub img_url: Option<String>,
    pub updated_at: String,
}

impl UserDoc {
    /// Overlay the identity email to produce the store-facing profile.
    pub fn into_profile(self, email: String) -> UserProfile {
        UserProfile {
            name: self.name,
            email,
            phone: self.phone,
            username: self.username,
            img_url: self.img_url.unwrap_or_default(),
            updated_at: self.updated_at,
        }
    }
}

/// Merge-update body for the account form. Deliberately omits email (owned
/// by the auth identity) and the image URL (owned by the upload flow).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: String,
    pub phone: i64,
    pub username: String,
    pub updated_at: String,
}

impl ProfilePatch {
    /// Build a patch with the update timestamp stamped now.
    pub fn new(name: String, phone: i64, username: String) -> Self {
        Self {
            name,
            phone,
            username,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
