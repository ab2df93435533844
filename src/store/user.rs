//! Signed-in user profile slice and its async store façade.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api;
use crate::auth::AuthUser;
use crate::errors::ApiError;
use crate::models::{ProfilePatch, UserProfile};
use crate::remote::RemoteStore;

/// Cached state of the signed-in user's profile.
#[derive(Debug, Default)]
pub struct UserSlice {
    user: Option<UserProfile>,
}

impl UserSlice {
    pub fn new() -> Self {
        Self { user: None }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Replace the stored profile wholesale, except the image URL: once a
    /// non-empty URL is stored it wins over whatever the incoming profile
    /// carries. The image belongs to the upload flow, and [`update_profile`]
    /// is the only path that replaces it.
    ///
    /// [`update_profile`]: UserSlice::update_profile
    pub fn update_user(&mut self, mut profile: UserProfile) {
        if let Some(current) = &self.user {
            if !current.img_url.is_empty() {
                profile.img_url = current.img_url.clone();
            }
        }
        self.user = Some(profile);
    }

    /// Replace only the image URL on the current profile. A no-op before a
    /// profile is present.
    pub fn update_profile(&mut self, img_url: String) {
        match &mut self.user {
            Some(user) => user.img_url = img_url,
            None => {
                tracing::warn!("update_profile called before a profile was loaded");
            }
        }
    }

    /// Reset on sign-out.
    pub fn clear(&mut self) {
        self.user = None;
    }
}

/// Async façade over [`UserSlice`] plus the remote client.
#[derive(Debug)]
pub struct UserStore {
    remote: RemoteStore,
    state: Mutex<UserSlice>,
}

impl UserStore {
    pub fn new(remote: RemoteStore) -> Self {
        Self {
            remote,
            state: Mutex::new(UserSlice::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, UserSlice> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Profile bootstrap: fetch `users/{uid}` for the signed-in identity and
    /// apply it with the identity's email overlaid. Nothing changes when the
    /// profile document was never created.
    pub async fn load_self(&self, identity: &AuthUser) -> Result<(), ApiError> {
        if let Some(doc) = api::get_profile(&self.remote, &identity.uid).await? {
            self.lock()
                .update_user(doc.into_profile(identity.email.clone()));
        }
        Ok(())
    }

    /// Save the account form remotely, then replace the cached profile with
    /// the saved fields and the identity email re-attached. The image URL is
    /// left empty here so the slice keeps whatever the upload flow set.
    pub async fn save_profile(
        &self,
        identity: &AuthUser,
        patch: ProfilePatch,
    ) -> Result<(), ApiError> {
        api::save_profile(&self.remote, &identity.uid, &patch).await?;
        self.lock().update_user(UserProfile {
            name: patch.name,
            email: identity.email.clone(),
            phone: patch.phone,
            username: patch.username,
            img_url: String::new(),
            updated_at: patch.updated_at,
        });
        Ok(())
    }

    /// Apply a freshly uploaded image URL to the cached profile.
    pub fn update_profile_image(&self, img_url: String) {
        self.lock().update_profile(img_url);
    }

    /// Snapshot of the cached profile.
    pub fn user(&self) -> Option<UserProfile> {
        self.lock().user.clone()
    }

    /// Reset on sign-out.
    pub fn clear(&self) {
        self.lock().clear();
    }
}
