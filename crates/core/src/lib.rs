//! `menud-core` — domain model for the menu service.
//!
//! This crate contains **pure domain** types (no HTTP, no storage concerns):
//! the menu item record, its identifier, and the explicit validation that
//! every write must pass before it reaches a store.

pub mod error;
pub mod item;

pub use error::{MenuError, MenuResult};
pub use item::{MenuItem, MenuItemId, MenuItemPatch, NewMenuItem};
