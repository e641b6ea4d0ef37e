//! Request DTOs and the presence checks run before any store access.

use serde::Deserialize;

use menud_core::{MenuError, MenuItemPatch, MenuResult, NewMenuItem};

/// Create payload. `name` and `price` are optional at the wire level so a
/// missing field yields our 400 (with a message) instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl CreateMenuItemRequest {
    pub fn into_new_item(self) -> MenuResult<NewMenuItem> {
        let (Some(name), Some(price)) = (self.name, self.price) else {
            return Err(MenuError::validation("Name and price are required"));
        };
        Ok(NewMenuItem {
            name,
            description: self.description,
            price,
        })
    }
}

/// Update payload: any subset of fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl UpdateMenuItemRequest {
    pub fn into_patch(self) -> MenuItemPatch {
        MenuItemPatch {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}
