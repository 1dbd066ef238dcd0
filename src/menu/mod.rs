//! Navigation menu descriptors.
//!
//! This module defines the declarative types a plugin uses to describe its
//! sidebar navigation: menus, item groups, items, and the buttons attached
//! to items, plus the slug derivation for menu names.

pub mod button;
pub mod color;
pub mod group;
pub mod item;
pub mod slug;

pub use button::PluginMenuButton;
pub use color::ButtonColor;
pub use group::{DEFAULT_MENU_ICON, MenuGroup, PluginMenu};
pub use item::PluginMenuItem;
pub use slug::slugify;
