//! Isolated working copies of menus under edit.
//!
//! A draft is a deep, independent copy of one menu's mutable fields. All
//! edit operations act on the draft; the canonical list is only replaced
//! by a refetch after a successful commit. Absence of a draft means no
//! pending edits.

mod focus;
mod menu;
mod store;

pub use focus::EditFocus;
pub use menu::{CategoryDraft, CategoryField, MenuDraft, MenuField, OptionDraft, OptionField};
pub use store::DraftStore;
