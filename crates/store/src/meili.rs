//! Meilisearch-backed store (feature `meili`).
//!
//! One index, `menu_items`, primary key `id`. Meilisearch indexes writes
//! asynchronously, so every write waits for its task to complete before the
//! HTTP response goes out; reads then see their own writes.

use meilisearch_sdk::{
    client::Client,
    documents::DocumentsQuery,
    errors::{Error, ErrorCode},
    indexes::Index,
    tasks::Task,
};

use async_trait::async_trait;

use menud_core::{MenuItem, MenuItemId, NewMenuItem};

use crate::{MenuStore, StoreError};

const MENU_INDEX: &str = "menu_items";
const PRIMARY_KEY: &str = "id";

// The store has no pagination surface; fetch the whole collection in one
// page instead of Meilisearch's default 20.
const LIST_LIMIT: usize = 10_000;

/// Menu collection stored in an external Meilisearch instance.
pub struct MeiliMenuStore {
    client: Client,
}

impl MeiliMenuStore {
    /// Build a client for the given address. Does not touch the network;
    /// call [`MeiliMenuStore::health`] to probe reachability.
    pub fn connect(url: &str, api_key: Option<&str>) -> Result<Self, StoreError> {
        let client = Client::new(url, api_key)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { client })
    }

    /// Probe the store; an error here means requests will fail individually.
    pub async fn health(&self) -> Result<(), StoreError> {
        self.client
            .health()
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn index(&self) -> Index {
        self.client.index(MENU_INDEX)
    }
}

fn is_document_not_found(err: &Error) -> bool {
    matches!(err, Error::Meilisearch(e) if e.error_code == ErrorCode::DocumentNotFound)
}

fn backend(err: Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn check_task(task: Task) -> Result<(), StoreError> {
    if task.is_failure() {
        let failure = task.unwrap_failure();
        return Err(StoreError::Backend(failure.error_message));
    }
    Ok(())
}

#[async_trait]
impl MenuStore for MeiliMenuStore {
    async fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
        let index = self.index();
        let page = DocumentsQuery::new(&index)
            .with_limit(LIST_LIMIT)
            .execute::<MenuItem>()
            .await;
        match page {
            Ok(results) => Ok(results.results),
            // A never-written index does not exist yet; that is an empty menu.
            Err(e) if matches!(&e, Error::Meilisearch(me) if me.error_code == ErrorCode::IndexNotFound) => {
                Ok(Vec::new())
            }
            Err(e) => Err(backend(e)),
        }
    }

    async fn insert(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        let item = new.into_item(MenuItemId::new());
        let task = self
            .index()
            .add_or_replace(&[item.clone()], Some(PRIMARY_KEY))
            .await
            .map_err(backend)?
            .wait_for_completion(&self.client, None, None)
            .await
            .map_err(backend)?;
        check_task(task)?;
        Ok(item)
    }

    async fn find(&self, id: &MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        match self.index().get_document::<MenuItem>(&id.to_string()).await {
            Ok(item) => Ok(Some(item)),
            Err(e) if is_document_not_found(&e) => Ok(None),
            Err(e) if matches!(&e, Error::Meilisearch(me) if me.error_code == ErrorCode::IndexNotFound) => {
                Ok(None)
            }
            Err(e) => Err(backend(e)),
        }
    }

    async fn replace(&self, item: &MenuItem) -> Result<(), StoreError> {
        let task = self
            .index()
            .add_or_replace(&[item.clone()], Some(PRIMARY_KEY))
            .await
            .map_err(backend)?
            .wait_for_completion(&self.client, None, None)
            .await
            .map_err(backend)?;
        check_task(task)
    }

    async fn remove(&self, id: &MenuItemId) -> Result<bool, StoreError> {
        // Meilisearch deletes are no-ops for unknown documents; check
        // existence first so callers can report "not found".
        if self.find(id).await?.is_none() {
            return Ok(false);
        }
        let task = self
            .index()
            .delete_document(&id.to_string())
            .await
            .map_err(backend)?
            .wait_for_completion(&self.client, None, None)
            .await
            .map_err(backend)?;
        check_task(task)?;
        Ok(true)
    }
}
