//! # admin-nav
//!
//! Declarative navigation descriptors for pluggable web admin sidebars.
//!
//! ## Overview
//!
//! A plugin describes its sidebar presence with three small value types:
//! [`PluginMenu`] (a top-level menu of labeled item groups),
//! [`PluginMenuItem`] (a link with display text, visibility flags, and
//! permissions), and [`PluginMenuButton`] (a colored action button attached
//! to an item). Descriptors are built once at plugin load time and handed to
//! a [`NavRegistry`] for the host's rendering layer to consume.
//!
//! Links are opaque route identifiers. They are reversed into URL paths
//! through the host's routing table lazily, on first read, so descriptors
//! can be constructed before the routing table is fully populated. A
//! pre-generated URL can also be set on any item or button and is returned
//! literally.
//!
//! ## Example
//!
//! ```
//! use admin_nav::{ButtonColor, NavRegistry, PluginMenu, PluginMenuButton, PluginMenuItem, RouteTable};
//!
//! RouteTable::global().register("acme:widget_list", "/plugins/acme/widgets/");
//! RouteTable::global().register("acme:widget_add", "/plugins/acme/widgets/add/");
//!
//! let add = PluginMenuButton::new(Some("acme:widget_add"), "Add", "mdi mdi-plus-thick")
//!     .color(ButtonColor::Green)
//!     .permissions(vec!["acme.add_widget".to_string()]);
//! let widgets = PluginMenuItem::new(Some("acme:widget_list"), "Widgets")
//!     .permissions(vec!["acme.view_widget".to_string()])
//!     .buttons(vec![add]);
//!
//! let menu = PluginMenu::new(
//!     "Acme Tools",
//!     vec![("Inventory".to_string(), vec![widgets])],
//!     None,
//! );
//! assert_eq!(menu.name(), "acme-tools");
//!
//! let mut registry = NavRegistry::new();
//! registry.register_menu(menu);
//! assert_eq!(
//!     registry.menus()[0].groups[0].items[0].url(),
//!     Some("/plugins/acme/widgets/".to_string()),
//! );
//! ```

pub mod error;
pub mod menu;
pub mod registry;
pub mod url;

pub use error::NavError;
pub use menu::{
    ButtonColor, DEFAULT_MENU_ICON, MenuGroup, PluginMenu, PluginMenuButton, PluginMenuItem,
    slugify,
};
pub use registry::{DEFAULT_MENU_LABEL, NavRegistry};
pub use url::{LazyUrl, RouteTable, UrlReverse, reverse_lazy};
