//! Blob storage collaborator client.
//!
//! Objects live under percent-encoded paths below `/storage/v1/o/`; an
//! upload returns a download URL, and deletion decodes that URL back into
//! the object path it was minted from.

use serde::Deserialize;

use crate::auth::API_KEY_HEADER;
use crate::config::Config;
use crate::errors::ApiError;
use crate::remote::response_error;

/// Folder that holds uploaded profile images.
const PROFILE_IMG_FOLDER: &str = "user-assets/profile-img";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    download_url: String,
}

/// HTTP client for the hosted blob storage service.
#[derive(Debug)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl StorageClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/o/{}",
            self.base_url,
            urlencoding::encode(path)
        )
    }

    fn object_url_prefix(&self) -> String {
        format!("{}/storage/v1/o/", self.base_url)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key.as_str());
        }
        builder
    }

    /// Upload bytes under the given object path and return the download URL.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, self.object_url(path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        let body: UploadResponse = resp.json().await?;
        Ok(body.download_url)
    }

    /// Upload a profile image under a path keyed by the upload timestamp.
    pub async fn upload_profile_image(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let path = format!(
            "{}/{}",
            PROFILE_IMG_FOLDER,
            chrono::Utc::now().timestamp_millis()
        );
        self.upload(&path, bytes, content_type).await
    }

    /// Delete the object a download URL points at, by decoding the URL back
    /// into its storage path. Empty URLs are ignored.
    pub async fn delete_by_url(&self, download_url: &str) -> Result<(), ApiError> {
        if download_url.is_empty() {
            return Ok(());
        }

        let without_query = download_url.split('?').next().unwrap_or(download_url);
        let encoded_path = without_query
            .strip_prefix(&self.object_url_prefix())
            .ok_or_else(|| {
                ApiError::Storage(format!("Not a storage download URL: {}", download_url))
            })?;
        let path = urlencoding::decode(encoded_path)
            .map_err(|e| ApiError::Storage(format!("Malformed download URL: {}", e)))?;

        let resp = self
            .request(reqwest::Method::DELETE, self.object_url(&path))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
}
