//! Menu item record, identifier, and explicit validation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MenuError, MenuResult};

/// Identifier of a menu item.
///
/// Assigned by the document store on insert; immutable afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(Uuid);

impl MenuItemId {
    /// Mint a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MenuItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for MenuItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for MenuItemId {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| MenuError::invalid_id(format!("MenuItemId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// A persisted menu item.
///
/// Invariants (checked by [`MenuItem::validate`], enforced before every
/// write): `name` is non-empty after trimming, `price` is finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl MenuItem {
    pub fn validate(&self) -> MenuResult<()> {
        validate_fields(&self.name, self.price)
    }

    /// Apply a partial update, leaving unspecified fields untouched, and
    /// re-validate the result. `description` can be replaced but not unset.
    pub fn merged(&self, patch: MenuItemPatch) -> MenuResult<Self> {
        let updated = Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.or_else(|| self.description.clone()),
            price: patch.price.unwrap_or(self.price),
        };
        updated.validate()?;
        Ok(updated)
    }
}

/// A menu item that has not been persisted yet (no identifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl NewMenuItem {
    pub fn validate(&self) -> MenuResult<()> {
        validate_fields(&self.name, self.price)
    }

    /// Promote to a persisted record under a store-assigned identifier.
    pub fn into_item(self, id: MenuItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// A partial update: absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

fn validate_fields(name: &str, price: f64) -> MenuResult<()> {
    if name.trim().is_empty() {
        return Err(MenuError::validation("name must not be empty"));
    }
    if !price.is_finite() {
        return Err(MenuError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(MenuError::validation("price must not be negative"));
    }
    Ok(())
}
