//! EduDash Client
//!
//! Client-side data layer for the EduDash school administration dashboard:
//! typed models, a thin API boundary over the hosted document store, and an
//! in-memory synchronization store with fetch-once and
//! remote-call-then-local-mutation semantics. The view layer reads the
//! stores and calls the operations here; rendering, routing and styling are
//! out of scope.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod remote;
pub mod storage;
pub mod store;

use auth::{AuthClient, AuthUser};
use config::Config;
use errors::ApiError;
use models::{CreateSyllabus, ProfilePatch};
use remote::{DocumentRef, RemoteStore};
use storage::StorageClient;
use store::{SchoolStore, UserStore};

/// Top-level client wiring the collaborators and stores together.
///
/// One instance lives for the whole dashboard session. All methods take
/// `&self`; the stores serialize their own state internally.
pub struct Client {
    remote: RemoteStore,
    auth: AuthClient,
    storage: StorageClient,
    schools: SchoolStore,
    user: UserStore,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        let remote = RemoteStore::new(config);
        Self {
            auth: AuthClient::new(config),
            storage: StorageClient::new(config),
            schools: SchoolStore::new(remote.clone()),
            user: UserStore::new(remote.clone()),
            remote,
        }
    }

    /// Build a client from `EDUDASH_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(&Config::from_env())
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn storage(&self) -> &StorageClient {
        &self.storage
    }

    pub fn schools(&self) -> &SchoolStore {
        &self.schools
    }

    pub fn user(&self) -> &UserStore {
        &self.user
    }

    pub fn remote(&self) -> &RemoteStore {
        &self.remote
    }

    /// Sign in and bootstrap the profile for the new identity.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        let identity = self.auth.sign_in_with_password(email, password).await?;
        self.user.load_self(&identity).await?;
        Ok(identity)
    }

    /// Sign out and reset both cache slices, so nothing from the previous
    /// session leaks into the next one.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.auth.sign_out().await?;
        self.schools.clear();
        self.user.clear();
        Ok(())
    }

    /// Create a syllabus document. Fire-and-forget: the write handle is
    /// returned for feedback but nothing is cached.
    pub async fn create_syllabus(&self, syllabus: &CreateSyllabus) -> Result<DocumentRef, ApiError> {
        api::create_syllabus(&self.remote, syllabus).await
    }

    /// Save the account form for the signed-in user.
    pub async fn save_profile(&self, patch: ProfilePatch) -> Result<(), ApiError> {
        let identity = self.signed_in_identity()?;
        self.user.save_profile(&identity, patch).await
    }

    /// Upload a profile image, persist its URL on the user document, then
    /// apply it to the cached profile. Returns the download URL.
    pub async fn upload_profile_image(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let identity = self.signed_in_identity()?;
        let img_url = self.storage.upload_profile_image(bytes, content_type).await?;
        api::save_profile_image(&self.remote, &identity.uid, &img_url).await?;
        self.user.update_profile_image(img_url.clone());
        Ok(img_url)
    }

    fn signed_in_identity(&self) -> Result<AuthUser, ApiError> {
        self.auth
            .current_user()
            .ok_or_else(|| ApiError::Unauthorized("Not signed in".to_string()))
    }
}
