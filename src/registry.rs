//! Sidebar registration.
//!
//! Plugins contribute navigation in one of two ways: a full top-level menu,
//! or loose items that are folded into a shared default menu under a named
//! section. The registry collects both for the rendering layer.

use tracing::debug;

use crate::menu::{DEFAULT_MENU_ICON, MenuGroup, PluginMenu, PluginMenuItem};

/// Label of the shared menu that collects loose item sections.
pub const DEFAULT_MENU_LABEL: &str = "Plugins";

/// Collects the navigation contributed by plugins for the admin sidebar.
///
/// Registration is append-only and permissive: ordering follows registration
/// order and duplicate labels are accepted as-is.
#[derive(Debug, Default)]
pub struct NavRegistry {
    menus: Vec<PluginMenu>,
    sections: Vec<MenuGroup>,
}

impl NavRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a full top-level menu contributed by a plugin.
    pub fn register_menu(&mut self, menu: PluginMenu) {
        debug!(menu = %menu.label, groups = menu.groups.len(), "plugin menu registered");
        self.menus.push(menu);
    }

    /// Registers loose items under a named section of the shared default
    /// menu, for plugins that do not bring a menu of their own.
    pub fn register_menu_items(
        &mut self,
        section_label: impl Into<String>,
        items: Vec<PluginMenuItem>,
    ) {
        let label = section_label.into();
        debug!(section = %label, items = items.len(), "plugin menu items registered");
        self.sections.push(MenuGroup::new(label, items));
    }

    /// Registered full menus, in registration order.
    pub fn menus(&self) -> &[PluginMenu] {
        &self.menus
    }

    /// The shared default menu, present once any loose items have been
    /// registered.
    pub fn default_menu(&self) -> Option<PluginMenu> {
        if self.sections.is_empty() {
            return None;
        }
        Some(PluginMenu {
            label: DEFAULT_MENU_LABEL.to_string(),
            icon_class: DEFAULT_MENU_ICON.to_string(),
            groups: self.sections.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MENU_LABEL, NavRegistry};
    use crate::menu::{DEFAULT_MENU_ICON, PluginMenu, PluginMenuItem};

    #[test]
    fn menus_keep_registration_order() {
        let mut registry = NavRegistry::new();
        registry.register_menu(PluginMenu::new("Second Sight", vec![], None));
        registry.register_menu(PluginMenu::new("Acme Tools", vec![], None));
        let labels: Vec<&str> = registry.menus().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["Second Sight", "Acme Tools"]);
    }

    #[test]
    fn no_default_menu_without_loose_items() {
        let registry = NavRegistry::new();
        assert!(registry.default_menu().is_none());
    }

    #[test]
    fn loose_items_are_grouped_into_the_default_menu() {
        let mut registry = NavRegistry::new();
        registry.register_menu_items(
            "Acme Tools",
            vec![PluginMenuItem::new(None, "Widget List")],
        );
        registry.register_menu_items("Other Plugin", vec![]);

        let menu = registry.default_menu().unwrap();
        assert_eq!(menu.label, DEFAULT_MENU_LABEL);
        assert_eq!(menu.icon_class, DEFAULT_MENU_ICON);
        let sections: Vec<&str> = menu.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(sections, ["Acme Tools", "Other Plugin"]);
        assert_eq!(menu.groups[0].items[0].link_text, "Widget List");
    }
}
