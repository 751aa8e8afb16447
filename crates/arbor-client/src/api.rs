//! HTTP client for the Arbor REST API.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use arbor_core::config::ClientConfig;
use arbor_core::error::AppError;
use arbor_core::result::AppResult;
use arbor_entity::folder::{Folder, FolderNode, FolderWithChildren};

/// The `{success, data}` / `{success, message}` wire envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

/// Typed client for the folder endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client from configuration.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::external_service(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lists root folders.
    pub async fn list_roots(&self) -> AppResult<Vec<Folder>> {
        let response = self.get(&format!("{}/folders", self.base_url)).await?;
        decode(response).await
    }

    /// Fetches a folder with its direct children.
    pub async fn get_folder(&self, id: Uuid) -> AppResult<FolderWithChildren> {
        let response = self.get(&format!("{}/folders/{id}", self.base_url)).await?;
        decode(response).await
    }

    /// Lists the direct children of a folder.
    pub async fn list_children(&self, id: Uuid) -> AppResult<Vec<Folder>> {
        let response = self
            .get(&format!("{}/folders/{id}/children", self.base_url))
            .await?;
        decode(response).await
    }

    /// Fetches the complete subtree rooted at a folder.
    pub async fn get_tree(&self, id: Uuid) -> AppResult<FolderNode> {
        let response = self
            .get(&format!("{}/folders/{id}/tree", self.base_url))
            .await?;
        decode(response).await
    }

    /// Creates a folder.
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        let response = self
            .http
            .post(format!("{}/folders", self.base_url))
            .json(&serde_json::json!({ "name": name, "parent_id": parent_id }))
            .send()
            .await
            .map_err(request_error)?;
        decode(response).await
    }

    /// Renames a folder.
    pub async fn rename_folder(&self, id: Uuid, name: &str) -> AppResult<Folder> {
        let response = self
            .http
            .put(format!("{}/folders/{id}", self.base_url))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(request_error)?;
        decode(response).await
    }

    /// Deletes a folder.
    pub async fn delete_folder(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .delete(format!("{}/folders/{id}", self.base_url))
            .send()
            .await
            .map_err(request_error)?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn get(&self, url: &str) -> AppResult<reqwest::Response> {
        self.http.get(url).send().await.map_err(request_error)
    }
}

fn request_error(err: reqwest::Error) -> AppError {
    AppError::external_service(format!("Request failed: {err}"))
}

/// Unwraps the response envelope, surfacing `{"success": false}` bodies
/// as errors.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| AppError::external_service(format!("Invalid API response: {e}")))?;

    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("API request failed with status {status}"));
        return Err(if status == reqwest::StatusCode::NOT_FOUND {
            AppError::not_found(message)
        } else {
            AppError::external_service(message)
        });
    }

    envelope
        .data
        .ok_or_else(|| AppError::external_service("API response is missing data"))
}
