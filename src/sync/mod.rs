//! Diff & sync layer between the draft store and the backing store.
//!
//! Two synchronization policies coexist:
//! 1. Eager single-node delete: removing a persisted category or option
//!    sends one request carrying just that node with a `_delete` marker,
//!    then refetches the canonical list.
//! 2. Batched whole-menu commit: saving a menu sends one upsert request
//!    carrying the full draft shape; nodes with local ids are sent
//!    without an id so the store assigns one.
//!
//! The store collaborators are traits so the editor can be driven against
//! in-memory fakes; [`HttpMenuStore`]/[`HttpBlobStore`] are the JSON/HTTP
//! implementations.

mod error;
mod http;
mod payload;
mod store;

pub use error::StoreError;
pub use http::{HttpBlobStore, HttpMenuStore};
pub use payload::{
    CategoryDeleteEntry, CategoryUpsert, MenuNodeDelete, MenuUpsert, OptionDeleteEntry,
    OptionUpsert,
};
pub use store::{AlwaysConfirm, BlobStore, ConfirmGate, MenuStore};
