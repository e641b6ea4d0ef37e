pub mod menu;
pub mod system;
