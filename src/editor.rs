//! The menu editor session.
//!
//! [`MenuEditor`] ties the pieces together: it owns the canonical menu
//! list (replaced wholesale by [`MenuEditor::refresh`], never patched in
//! place), the [`DraftStore`] of menus under edit, and the store
//! collaborators. All tree mutations act on drafts; the store is only
//! contacted by the eager single-node delete, the batched commit, menu
//! creation/deletion, and image upload.

use thiserror::Error;
use uuid::Uuid;

use crate::drafts::{
    CategoryField, DraftStore, EditFocus, MenuDraft, MenuField, OptionField,
};
use crate::models::{Menu, NewMenu};
use crate::node_id::NodeId;
use crate::price::parse_price;
use crate::sync::{BlobStore, ConfirmGate, MenuNodeDelete, MenuStore, MenuUpsert, StoreError};

/// Default names for freshly added nodes. Localization happens in the
/// surrounding application; the editor only receives the final strings.
#[derive(Debug, Clone)]
pub struct EditorDefaults {
    pub category_name: String,
    pub option_name: String,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self {
            category_name: "New category".to_string(),
            option_name: "New option".to_string(),
        }
    }
}

/// Errors surfaced by editor operations.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Menu name is required")]
    NameRequired,
    #[error("Menu price must be a number greater than or equal to zero")]
    InvalidPrice,
    #[error("Every category needs a name")]
    CategoryNameRequired,
    #[error("Category '{0}' needs at least one option")]
    CategoryNeedsOption(String),
    #[error("Category '{0}' must allow selecting at least one option")]
    InvalidMaxOptions(String),
    #[error("No draft is open for menu {0}")]
    NoDraft(Uuid),
    #[error("Unknown menu {0}")]
    UnknownMenu(Uuid),
    #[error("No such node in the draft")]
    UnknownNode,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The node only existed locally; it was spliced out of the draft
    /// without any store call.
    SplicedLocally,
    /// The store delete was applied and the canonical list refetched.
    Deleted,
    /// The confirmation gate declined; nothing changed.
    Declined,
}

#[derive(Debug, Clone)]
struct ImageEdit {
    menu_id: Uuid,
    /// Image reference at the time the modal opened; restored when the
    /// pending change is dropped.
    initial: Option<String>,
}

/// Editor session over one restaurant's menus.
pub struct MenuEditor<S, B, G> {
    restaurant_id: Uuid,
    store: S,
    blobs: B,
    gate: G,
    defaults: EditorDefaults,
    menus: Vec<Menu>,
    drafts: DraftStore,
    focus: EditFocus,
    image_edit: Option<ImageEdit>,
}

impl<S, B, G> MenuEditor<S, B, G>
where
    S: MenuStore,
    B: BlobStore,
    G: ConfirmGate,
{
    pub fn new(restaurant_id: Uuid, store: S, blobs: B, gate: G) -> Self {
        Self {
            restaurant_id,
            store,
            blobs,
            gate,
            defaults: EditorDefaults::default(),
            menus: Vec::new(),
            drafts: DraftStore::new(),
            focus: EditFocus::new(),
            image_edit: None,
        }
    }

    pub fn with_defaults(mut self, defaults: EditorDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The canonical list as of the last successful refresh.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn draft(&self, menu_id: Uuid) -> Option<&MenuDraft> {
        self.drafts.get(menu_id)
    }

    pub fn focus(&self) -> &EditFocus {
        &self.focus
    }

    pub fn focus_category(&mut self, id: NodeId) {
        self.focus.focus_category(id);
    }

    pub fn focus_option(&mut self, id: NodeId) {
        self.focus.focus_option(id);
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear();
    }

    /// Replaces the canonical list with the store's current state,
    /// ordered by `display_order` at each level.
    ///
    /// This is the only writer of the canonical list. On failure the
    /// previous list stays in place.
    pub async fn refresh(&mut self) -> Result<(), EditorError> {
        let menus = self.store.fetch_menus(self.restaurant_id).await?;
        self.menus = menus.into_iter().map(Menu::sorted).collect();
        tracing::debug!("Refreshed {} menu(s)", self.menus.len());
        Ok(())
    }

    /// Begins editing a menu: deep-copies its canonical state into the
    /// draft store.
    pub fn open(&mut self, menu_id: Uuid) -> Result<&MenuDraft, EditorError> {
        let menu = self
            .menus
            .iter()
            .find(|m| m.id == menu_id)
            .ok_or(EditorError::UnknownMenu(menu_id))?;
        self.focus.clear();
        Ok(self.drafts.open(menu))
    }

    /// Discards the draft unconditionally.
    pub fn cancel(&mut self, menu_id: Uuid) {
        self.drafts.close(menu_id);
        self.focus.clear();
        if self.image_edit.as_ref().is_some_and(|e| e.menu_id == menu_id) {
            self.image_edit = None;
        }
    }

    pub fn update_menu_field(&mut self, menu_id: Uuid, field: MenuField) -> Result<(), EditorError> {
        self.mutate(menu_id, |d| d.with_field(field))
    }

    pub fn add_category(&mut self, menu_id: Uuid) -> Result<(), EditorError> {
        let name = self.defaults.category_name.clone();
        self.mutate(menu_id, |d| d.with_category_added(&name))
    }

    pub fn update_category_field(
        &mut self,
        menu_id: Uuid,
        index: usize,
        field: CategoryField,
    ) -> Result<(), EditorError> {
        self.mutate(menu_id, |d| d.with_category_field(index, field))
    }

    pub fn add_option(&mut self, menu_id: Uuid, category_index: usize) -> Result<(), EditorError> {
        let name = self.defaults.option_name.clone();
        self.mutate(menu_id, |d| d.with_option_added(category_index, &name))
    }

    pub fn update_option_field(
        &mut self,
        menu_id: Uuid,
        category_index: usize,
        option_index: usize,
        field: OptionField,
    ) -> Result<(), EditorError> {
        self.mutate(menu_id, |d| d.with_option_field(category_index, option_index, field))
    }

    /// Removes the category at `index`.
    ///
    /// A local-only category is spliced out of the draft; no store call
    /// is made. A persisted category goes through the confirmation gate
    /// and an eager single-node delete; on success the draft is spliced
    /// and the canonical list refetched (the refetch, not the splice, is
    /// authoritative for what exists).
    pub async fn remove_category(
        &mut self,
        menu_id: Uuid,
        index: usize,
    ) -> Result<RemoveOutcome, EditorError> {
        let (node_id, name) = {
            let draft = self
                .drafts
                .get(menu_id)
                .ok_or(EditorError::NoDraft(menu_id))?;
            let category = draft.category(index).ok_or(EditorError::UnknownNode)?;
            (category.id.clone(), category.name.clone())
        };

        let store_id = match node_id.persisted_id() {
            None => {
                self.drafts.update(menu_id, |d| d.with_category_removed(index));
                return Ok(RemoveOutcome::SplicedLocally);
            }
            Some(id) => id.to_string(),
        };

        let prompt = format!("Delete category '{}'?", name);
        if !self.gate.confirm(&prompt).await {
            return Ok(RemoveOutcome::Declined);
        }

        let payload = MenuNodeDelete::category(menu_id, store_id);
        self.store.delete_nodes(&payload).await?;
        tracing::info!("Deleted category '{}' from menu {}", name, menu_id);

        self.drafts.update(menu_id, |d| d.with_category_removed(index));
        self.refresh().await?;
        Ok(RemoveOutcome::Deleted)
    }

    /// Removes one option; same policy as [`Self::remove_category`].
    pub async fn remove_option(
        &mut self,
        menu_id: Uuid,
        category_index: usize,
        option_index: usize,
    ) -> Result<RemoveOutcome, EditorError> {
        let (category_id, option_id, name) = {
            let draft = self
                .drafts
                .get(menu_id)
                .ok_or(EditorError::NoDraft(menu_id))?;
            let category = draft
                .category(category_index)
                .ok_or(EditorError::UnknownNode)?;
            let option = category
                .options
                .get(option_index)
                .ok_or(EditorError::UnknownNode)?;
            (category.id.clone(), option.id.clone(), option.name.clone())
        };

        let option_store_id = match option_id.persisted_id() {
            None => {
                self.drafts
                    .update(menu_id, |d| d.with_option_removed(category_index, option_index));
                return Ok(RemoveOutcome::SplicedLocally);
            }
            Some(id) => id.to_string(),
        };

        // A persisted option always lives under a persisted category.
        let category_store_id = category_id
            .persisted_id()
            .ok_or(EditorError::UnknownNode)?
            .to_string();

        let prompt = format!("Delete option '{}'?", name);
        if !self.gate.confirm(&prompt).await {
            return Ok(RemoveOutcome::Declined);
        }

        let payload = MenuNodeDelete::option(menu_id, category_store_id, option_store_id);
        self.store.delete_nodes(&payload).await?;
        tracing::info!("Deleted option '{}' from menu {}", name, menu_id);

        self.drafts
            .update(menu_id, |d| d.with_option_removed(category_index, option_index));
        self.refresh().await?;
        Ok(RemoveOutcome::Deleted)
    }

    /// Commits the whole draft in one upsert request.
    ///
    /// Local validation gates the request on the menu scalars only: name
    /// non-empty, price a finite number >= 0. Category and option shapes
    /// are not re-validated here; only the creation flow enforces them.
    /// On success the draft is cleared and the canonical list refetched;
    /// on failure the draft is left intact for retry.
    pub async fn commit(&mut self, menu_id: Uuid) -> Result<(), EditorError> {
        let payload = {
            let draft = self
                .drafts
                .get(menu_id)
                .ok_or(EditorError::NoDraft(menu_id))?;
            if draft.name.trim().is_empty() {
                return Err(EditorError::NameRequired);
            }
            let price = parse_price(&draft.price_input)
                .filter(|p| *p >= 0.0)
                .ok_or(EditorError::InvalidPrice)?;
            MenuUpsert::from_draft(draft, price)
        };

        self.store.upsert_menu(self.restaurant_id, &payload).await?;
        tracing::info!(
            "Committed menu {} with {} categories",
            menu_id,
            payload.categories.len()
        );

        self.drafts.close(menu_id);
        self.focus.clear();
        self.refresh().await?;
        Ok(())
    }

    /// Creates a menu from the creation form, committing immediately.
    ///
    /// Stricter than the edit path: every category must be named, allow
    /// at least one selection, and contain at least one option.
    pub async fn create_menu(&mut self, form: &NewMenu) -> Result<(), EditorError> {
        if form.name.trim().is_empty() {
            return Err(EditorError::NameRequired);
        }
        let price = parse_price(&form.price_input)
            .filter(|p| *p >= 0.0)
            .ok_or(EditorError::InvalidPrice)?;

        for category in &form.categories {
            if category.name.trim().is_empty() {
                return Err(EditorError::CategoryNameRequired);
            }
            if category.max_options < 1 {
                return Err(EditorError::InvalidMaxOptions(category.name.clone()));
            }
            if category.options.is_empty() {
                return Err(EditorError::CategoryNeedsOption(category.name.clone()));
            }
        }

        let payload = MenuUpsert::from_new_menu(form, price);
        self.store.upsert_menu(self.restaurant_id, &payload).await?;
        tracing::info!("Created menu '{}'", form.name);

        self.refresh().await?;
        Ok(())
    }

    /// Deletes a whole menu after confirmation. The store cascades the
    /// categories and options.
    pub async fn delete_menu(&mut self, menu_id: Uuid) -> Result<RemoveOutcome, EditorError> {
        let name = self
            .menus
            .iter()
            .find(|m| m.id == menu_id)
            .map(|m| m.name.clone())
            .ok_or(EditorError::UnknownMenu(menu_id))?;

        let prompt = format!("Delete menu '{}'?", name);
        if !self.gate.confirm(&prompt).await {
            return Ok(RemoveOutcome::Declined);
        }

        self.store.delete_menu(menu_id).await?;
        tracing::info!("Deleted menu '{}'", name);

        self.drafts.close(menu_id);
        self.refresh().await?;
        Ok(RemoveOutcome::Deleted)
    }

    /// Opens the image replacement modal: snapshots the draft's current
    /// image reference so an abandoned or failed change can restore it.
    pub fn begin_image_edit(&mut self, menu_id: Uuid) -> Result<(), EditorError> {
        let draft = self
            .drafts
            .get(menu_id)
            .ok_or(EditorError::NoDraft(menu_id))?;
        self.image_edit = Some(ImageEdit {
            menu_id,
            initial: draft.image_url.clone(),
        });
        Ok(())
    }

    /// Uploads a replacement image and stores the returned URL in the
    /// draft. On upload failure the pending change is dropped and the
    /// snapshot taken by [`Self::begin_image_edit`] is restored.
    pub async fn apply_image(
        &mut self,
        menu_id: Uuid,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, EditorError> {
        if !self.drafts.is_open(menu_id) {
            return Err(EditorError::NoDraft(menu_id));
        }

        match self.blobs.upload(bytes, content_type).await {
            Ok(url) => {
                self.drafts.update(menu_id, |d| {
                    d.with_field(MenuField::ImageUrl(Some(url.clone())))
                });
                Ok(url)
            }
            Err(e) => {
                tracing::warn!("Image upload failed: {}", e);
                let initial = self
                    .image_edit
                    .as_ref()
                    .filter(|edit| edit.menu_id == menu_id)
                    .map(|edit| edit.initial.clone());
                if let Some(initial) = initial {
                    self.drafts
                        .update(menu_id, |d| d.with_field(MenuField::ImageUrl(initial)));
                }
                Err(EditorError::Store(e))
            }
        }
    }

    /// Closes the image modal keeping whatever the draft holds now.
    pub fn finish_image_edit(&mut self) {
        self.image_edit = None;
    }

    /// Closes the image modal and restores the snapshot.
    pub fn cancel_image_edit(&mut self) {
        if let Some(edit) = self.image_edit.take() {
            self.drafts.update(edit.menu_id, |d| {
                d.with_field(MenuField::ImageUrl(edit.initial.clone()))
            });
        }
    }

    fn mutate<F>(&mut self, menu_id: Uuid, f: F) -> Result<(), EditorError>
    where
        F: FnOnce(&MenuDraft) -> MenuDraft,
    {
        if self.drafts.update(menu_id, f) {
            Ok(())
        } else {
            Err(EditorError::NoDraft(menu_id))
        }
    }
}
