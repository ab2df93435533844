//! Remote collection store client.
//!
//! The hosted backend exposes named collections of JSON documents. This
//! client is a thin translation layer over that contract:
//!
//! ```text
//! GET    /data/v1/{collection}        list all documents
//! GET    /data/v1/{collection}/{id}   get one document (404 when absent)
//! POST   /data/v1/{collection}        insert, server assigns the id
//! PATCH  /data/v1/{collection}/{id}   merge-update (absent fields untouched)
//! DELETE /data/v1/{collection}/{id}   delete, idempotent
//! ```
//!
//! No retries and no error translation happen here; remote failures
//! propagate to the caller unmodified.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::API_KEY_HEADER;
use crate::config::Config;
use crate::errors::{ApiError, RemoteErrorBody};

/// Collection names as constants to avoid stringly-typed lookups.
pub mod collections {
    pub const SCHOOLS: &str = "schools";
    pub const SYLLABUS: &str = "syllabus";
    pub const USERS: &str = "users";
}

/// Write acknowledgment for an insert: the identifier the store assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
}

/// HTTP client for the remote document store.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RemoteStore {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/data/v1/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/data/v1/{}/{}", self.base_url, collection, id)
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key.as_str());
        }
        builder
    }

    /// List every document in a collection, in store order.
    pub async fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, ApiError> {
        let resp = self
            .request(Method::GET, self.collection_url(collection))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Get a single document by id, `None` when it does not exist.
    pub async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, ApiError> {
        let resp = self
            .request(Method::GET, self.document_url(collection, id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(Some(resp.json().await?))
    }

    /// Insert a new document; the store assigns and returns the identifier.
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        document: &T,
    ) -> Result<DocumentRef, ApiError> {
        let resp = self
            .request(Method::POST, self.collection_url(collection))
            .json(document)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Merge the given fields into an existing document. Fields absent from
    /// the body are left untouched.
    pub async fn merge<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        fields: &T,
    ) -> Result<(), ApiError> {
        let resp = self
            .request(Method::PATCH, self.document_url(collection, id))
            .json(fields)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }

    /// Delete a document. Deleting an id that does not exist succeeds.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, self.document_url(collection, id))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
}

/// Decode a non-success response into an [`ApiError`], falling back to the
/// raw body text when the backend did not send its error envelope.
pub(crate) async fn response_error(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<RemoteErrorBody>(&body) {
        Ok(envelope) => envelope.into_error(status),
        Err(_) => ApiError::Remote {
            status,
            message: if body.is_empty() {
                format!("Remote error (status {})", status)
            } else {
                body
            },
        },
    }
}
