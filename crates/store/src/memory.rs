//! In-memory store for tests/dev.

use std::sync::RwLock;

use async_trait::async_trait;

use menud_core::{MenuItem, MenuItemId, NewMenuItem};

use crate::{MenuStore, StoreError};

/// In-memory menu collection.
///
/// Keeps insertion order, so "natural retrieval order" is deterministic in
/// tests. Not durable; process restart loses everything.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    inner: RwLock<Vec<MenuItem>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock means a panic mid-write; report it as a backend failure
// rather than propagating the panic into unrelated requests.
fn poisoned() -> StoreError {
    StoreError::Backend("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
        let items = self.inner.read().map_err(|_| poisoned())?;
        Ok(items.clone())
    }

    async fn insert(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        let item = new.into_item(MenuItemId::new());
        let mut items = self.inner.write().map_err(|_| poisoned())?;
        items.push(item.clone());
        Ok(item)
    }

    async fn find(&self, id: &MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        let items = self.inner.read().map_err(|_| poisoned())?;
        Ok(items.iter().find(|item| item.id == *id).cloned())
    }

    async fn replace(&self, item: &MenuItem) -> Result<(), StoreError> {
        let mut items = self.inner.write().map_err(|_| poisoned())?;
        if let Some(slot) = items.iter_mut().find(|candidate| candidate.id == item.id) {
            *slot = item.clone();
        }
        Ok(())
    }

    async fn remove(&self, id: &MenuItemId) -> Result<bool, StoreError> {
        let mut items = self.inner.write().map_err(|_| poisoned())?;
        let before = items.len();
        items.retain(|item| item.id != *id);
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str, price: f64) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: None,
            price,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryMenuStore::new();
        let a = store.insert(new_item("Pizza", 9.0)).await.unwrap();
        let b = store.insert(new_item("Pasta", 11.0)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryMenuStore::new();
        store.insert(new_item("Pizza", 9.0)).await.unwrap();
        store.insert(new_item("Pasta", 11.0)).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Pizza", "Pasta"]);
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_id() {
        let store = InMemoryMenuStore::new();
        let found = store.find(&MenuItemId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn replace_overwrites_matching_record() {
        let store = InMemoryMenuStore::new();
        let mut item = store.insert(new_item("Pizza", 9.0)).await.unwrap();
        item.price = 12.0;
        store.replace(&item).await.unwrap();

        let found = store.find(&item.id).await.unwrap().unwrap();
        assert_eq!(found.price, 12.0);
        assert_eq!(found.name, "Pizza");
    }

    #[tokio::test]
    async fn remove_is_true_once_then_false() {
        let store = InMemoryMenuStore::new();
        let item = store.insert(new_item("Pizza", 9.0)).await.unwrap();

        assert!(store.remove(&item.id).await.unwrap());
        assert!(!store.remove(&item.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }
}
