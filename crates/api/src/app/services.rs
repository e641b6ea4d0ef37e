//! Store backend selection and the CRUD service layer.
//!
//! All state lives behind the injected [`MenuStore`] handle; the service
//! layer owns validation (invoked before every write) and the mapping from
//! store failures to domain errors.

use std::sync::Arc;

use menud_core::{MenuError, MenuItem, MenuItemId, MenuItemPatch, NewMenuItem};
use menud_store::{InMemoryMenuStore, MenuStore, StoreError};
#[cfg(feature = "meili")]
use menud_store::MeiliMenuStore;

use crate::config::Config;

/// Handlers' view of the application: one store handle.
pub struct AppServices {
    store: Arc<dyn MenuStore>,
}

/// Pick a store backend from configuration.
///
/// An unreachable external store is logged but never blocks startup;
/// requests against it fail individually.
pub async fn build_services(config: &Config) -> AppServices {
    #[cfg(feature = "meili")]
    if let Some(url) = &config.store_url {
        match MeiliMenuStore::connect(url, config.store_key.as_deref()) {
            Ok(store) => {
                match store.health().await {
                    Ok(()) => tracing::info!("document store connected: {url}"),
                    Err(e) => tracing::warn!("document store unreachable: {e}"),
                }
                return AppServices::with_store(Arc::new(store));
            }
            Err(e) => {
                tracing::error!("bad document store address {url}: {e}; using in-memory store");
            }
        }
    }

    #[cfg(not(feature = "meili"))]
    if config.store_url.is_some() {
        tracing::warn!("MEILI_URL set but this build has no meili feature; using in-memory store");
    }

    tracing::info!("using in-memory store");
    AppServices::with_store(Arc::new(InMemoryMenuStore::new()))
}

impl AppServices {
    pub fn with_store(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }

    pub async fn list_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.store.list().await.map_err(store_error)
    }

    pub async fn create_item(&self, new: NewMenuItem) -> Result<MenuItem, MenuError> {
        new.validate()?;
        self.store.insert(new).await.map_err(store_error)
    }

    pub async fn update_item(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, MenuError> {
        let current = self
            .store
            .find(&id)
            .await
            .map_err(store_error)?
            .ok_or(MenuError::NotFound)?;

        // `merged` re-validates; required fields must survive the patch.
        let updated = current.merged(patch)?;
        self.store.replace(&updated).await.map_err(store_error)?;
        Ok(updated)
    }

    pub async fn delete_item(&self, id: MenuItemId) -> Result<(), MenuError> {
        let removed = self.store.remove(&id).await.map_err(store_error)?;
        if removed { Ok(()) } else { Err(MenuError::NotFound) }
    }
}

fn store_error(err: StoreError) -> MenuError {
    MenuError::store(err.to_string())
}
