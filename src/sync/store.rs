//! Collaborator seams consumed by the editor.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Menu;

use super::error::StoreError;
use super::payload::{MenuNodeDelete, MenuUpsert};

/// Relational store collaborator.
///
/// The store has no native understanding of trees; it accepts flat
/// category/option rows via the payload conventions in
/// [`super::payload`]: missing id means "assign one", `_delete: true`
/// means "remove this row". Menu deletion cascades store-side.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Fetches every menu of the restaurant with nested categories and
    /// options, ordered by `display_order` at each level.
    async fn fetch_menus(&self, restaurant_id: Uuid) -> Result<Vec<Menu>, StoreError>;

    /// Upserts one menu with its full category/option shape.
    async fn upsert_menu(
        &self,
        restaurant_id: Uuid,
        payload: &MenuUpsert,
    ) -> Result<(), StoreError>;

    /// Deletes (or marks deleted) a single category or option.
    async fn delete_nodes(&self, payload: &MenuNodeDelete) -> Result<(), StoreError>;

    /// Deletes one menu, cascading its categories and options.
    async fn delete_menu(&self, menu_id: Uuid) -> Result<(), StoreError>;
}

/// Blob store collaborator: stores an encoded image and returns a
/// publicly dereferenceable URL. The editor only ever keeps the URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, StoreError>;
}

/// Yes/no gate presented before every persisted-node deletion.
#[async_trait]
pub trait ConfirmGate: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that approves everything. For headless callers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmGate for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
