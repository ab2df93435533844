//! Authentication collaborator client.
//!
//! Wraps the hosted identity endpoints (password sign-in, sign-out) and
//! publishes identity transitions on a watch channel so the profile
//! bootstrap and any view-layer observer can react to them.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::config::Config;
use crate::errors::ApiError;
use crate::remote::response_error;

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The signed-in identity as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub id_token: String,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the hosted authentication service.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    identity: watch::Sender<Option<AuthUser>>,
}

impl AuthClient {
    pub fn new(config: &Config) -> Self {
        let (identity, _) = watch::channel(None);
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            identity,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key.as_str());
        }
        builder
    }

    /// Sign in with email and password. On success the identity channel
    /// switches to the new user.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, "/auth/v1/sign-in")
            .json(&SignInRequest { email, password })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        let user: AuthUser = resp.json().await?;
        tracing::info!(uid = %user.uid, "signed in");
        self.identity.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Sign out. The identity channel switches to `None` only after the
    /// remote call succeeds, matching the dashboard's sign-out ordering.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let resp = self
            .request(reqwest::Method::POST, "/auth/v1/sign-out")
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        tracing::info!("signed out");
        self.identity.send_replace(None);
        Ok(())
    }

    /// The currently signed-in identity, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.identity.borrow().clone()
    }

    /// Subscribe to identity transitions (sign-in and sign-out).
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.identity.subscribe()
    }
}
