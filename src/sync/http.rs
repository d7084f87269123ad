//! JSON/HTTP implementations of the store collaborators.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Menu;

use super::error::StoreError;
use super::payload::{MenuNodeDelete, MenuUpsert};
use super::store::{BlobStore, MenuStore};

/// Response envelope used by the backing store.
///
/// `success: false` with a reason is the "partial-shape failure" case:
/// the request was received but not applied. It is surfaced as
/// [`StoreError::Rejected`] and treated like any other store failure.
#[derive(Debug, Deserialize)]
struct StoreResponse<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl<T> StoreResponse<T> {
    fn into_data(self) -> Result<T, StoreError> {
        if !self.success {
            return Err(StoreError::Rejected(self.reason()));
        }
        self.data
            .ok_or_else(|| StoreError::Decode("missing data field".to_string()))
    }

    fn into_applied(self) -> Result<(), StoreError> {
        if self.success {
            Ok(())
        } else {
            Err(StoreError::Rejected(self.reason()))
        }
    }

    fn reason(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "no reason given".to_string())
    }
}

/// Relational store collaborator over authenticated JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpMenuStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpMenuStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<StoreResponse<T>, StoreError> {
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        response
            .json::<StoreResponse<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MenuStore for HttpMenuStore {
    async fn fetch_menus(&self, restaurant_id: Uuid) -> Result<Vec<Menu>, StoreError> {
        let url = self.url(&format!("/restaurants/{}/menus", restaurant_id));
        tracing::debug!("Fetching menus from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Self::decode::<Vec<Menu>>(response).await?.into_data()
    }

    async fn upsert_menu(
        &self,
        restaurant_id: Uuid,
        payload: &MenuUpsert,
    ) -> Result<(), StoreError> {
        let url = self.url(&format!("/restaurants/{}/menus", restaurant_id));
        tracing::debug!(
            "Upserting menu {:?} with {} categories",
            payload.id,
            payload.categories.len()
        );

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(payload)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Self::decode::<serde_json::Value>(response)
            .await?
            .into_applied()
    }

    async fn delete_nodes(&self, payload: &MenuNodeDelete) -> Result<(), StoreError> {
        let url = self.url(&format!("/menus/{}/nodes", payload.menu_id));
        tracing::debug!("Deleting node in menu {}", payload.menu_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(payload)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Self::decode::<serde_json::Value>(response)
            .await?
            .into_applied()
    }

    async fn delete_menu(&self, menu_id: Uuid) -> Result<(), StoreError> {
        let url = self.url(&format!("/menus/{}", menu_id));
        tracing::debug!("Deleting menu {}", menu_id);

        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Self::decode::<serde_json::Value>(response)
            .await?
            .into_applied()
    }
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// Blob store collaborator posting raw image bytes.
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
    upload_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpBlobStore {
    pub fn new(upload_url: String, api_key: String) -> Self {
        Self {
            upload_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, StoreError> {
        tracing::debug!("Uploading {} byte image", bytes.len());

        let response = self
            .client
            .post(&self.upload_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", content_type.to_string())
            .body(bytes)
            .send()
            .await
            .map_err(|e| StoreError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Upload(format!(
                "upload endpoint returned status {}",
                response.status()
            )));
        }

        let envelope: StoreResponse<UploadData> = response
            .json()
            .await
            .map_err(|e| StoreError::Upload(e.to_string()))?;

        envelope.into_data().map(|d| d.url)
    }
}
