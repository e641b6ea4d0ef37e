//! `menud-store` — document-store clients for menu items.
//!
//! One collection, four primitives (find-all, insert, find/replace by id,
//! delete by id) behind the [`MenuStore`] trait. The in-memory backend is
//! the dev/test default; the Meilisearch backend (feature `meili`) talks to
//! an external document store and inherits its durability and ordering.

use async_trait::async_trait;
use thiserror::Error;

use menud_core::{MenuItem, MenuItemId, NewMenuItem};

pub mod memory;
#[cfg(feature = "meili")]
pub mod meili;

pub use memory::InMemoryMenuStore;
#[cfg(feature = "meili")]
pub use meili::MeiliMenuStore;

/// Store operation error.
///
/// Infrastructure failures only; "record absent" is not an error here (see
/// the `Option`/`bool` returns on the trait).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unreachable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the operation.
    #[error("store error: {0}")]
    Backend(String),
}

/// A single-collection document store holding menu items.
///
/// Implementations assign identifiers on insert and provide whatever
/// ordering and concurrency control the backing store has natively;
/// concurrent writes to the same record are last-write-wins.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All records, in the store's natural retrieval order.
    async fn list(&self) -> Result<Vec<MenuItem>, StoreError>;

    /// Persist a new record under a freshly assigned identifier.
    async fn insert(&self, new: NewMenuItem) -> Result<MenuItem, StoreError>;

    /// Look up one record by identifier.
    async fn find(&self, id: &MenuItemId) -> Result<Option<MenuItem>, StoreError>;

    /// Overwrite the record with the same identifier.
    async fn replace(&self, item: &MenuItem) -> Result<(), StoreError>;

    /// Delete by identifier; `false` if no record matched.
    async fn remove(&self, id: &MenuItemId) -> Result<bool, StoreError>;
}
