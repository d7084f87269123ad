//! Menukit Core Library
//!
//! Menu composition and synchronization logic for restaurant back-office
//! applications. A menu is an ordered tree of categories and options;
//! the backing store only understands flat rows, so this crate keeps an
//! isolated draft of the tree under edit and reconciles it through two
//! sync policies: eager single-node deletes and batched whole-menu
//! commits.

pub mod drafts;
pub mod editor;
pub mod models;
pub mod node_id;
pub mod price;
pub mod sync;

pub use drafts::{
    CategoryDraft, CategoryField, DraftStore, EditFocus, MenuDraft, MenuField, OptionDraft,
    OptionField,
};
pub use editor::{EditorDefaults, EditorError, MenuEditor, RemoveOutcome};
pub use models::{Category, Menu, NewCategory, NewMenu, NewOption, OptionItem};
pub use node_id::{LocalId, NodeId, NodeIdError};
pub use price::{normalize_price_input, parse_price};
pub use sync::{
    AlwaysConfirm, BlobStore, ConfirmGate, HttpBlobStore, HttpMenuStore, MenuNodeDelete,
    MenuStore, MenuUpsert, StoreError,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
