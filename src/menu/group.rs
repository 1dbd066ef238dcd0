//! Menus and item groups.

use serde::Serialize;

use crate::menu::item::PluginMenuItem;
use crate::menu::slug::slugify;

/// Icon used for plugin menus that do not choose their own.
pub const DEFAULT_MENU_ICON: &str = "mdi mdi-puzzle";

/// A labeled group of items within a menu.
#[derive(Clone, Debug, Serialize)]
pub struct MenuGroup {
    /// Heading shown above the group.
    pub label: String,
    /// Items in the group, in order.
    pub items: Vec<PluginMenuItem>,
}

impl MenuGroup {
    /// Creates a group from its heading and items.
    pub fn new(label: impl Into<String>, items: Vec<PluginMenuItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// A top-level sidebar menu contributed by a plugin.
///
/// The menu name used in anchors and URLs is derived from the label rather
/// than stored, so the two can never drift apart.
#[derive(Clone, Debug, Serialize)]
pub struct PluginMenu {
    /// Display label for the menu.
    pub label: String,
    /// Icon class for the menu heading.
    pub icon_class: String,
    /// Item groups in the menu, in order.
    pub groups: Vec<MenuGroup>,
}

impl PluginMenu {
    /// Creates a menu from a label and ordered `(group label, items)` pairs.
    ///
    /// Passing `None` for `icon_class` keeps [`DEFAULT_MENU_ICON`].
    pub fn new(
        label: impl Into<String>,
        groups: Vec<(String, Vec<PluginMenuItem>)>,
        icon_class: Option<&str>,
    ) -> Self {
        Self {
            label: label.into(),
            icon_class: icon_class.unwrap_or(DEFAULT_MENU_ICON).to_string(),
            groups: groups
                .into_iter()
                .map(|(label, items)| MenuGroup::new(label, items))
                .collect(),
        }
    }

    /// The slugified form of the menu label.
    pub fn name(&self) -> String {
        slugify(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MENU_ICON, PluginMenu};
    use crate::menu::item::PluginMenuItem;
    use crate::menu::slug::slugify;

    #[test]
    fn name_is_the_slugified_label() {
        let menu = PluginMenu::new("My Plugin Menu", vec![], None);
        assert_eq!(menu.name(), "my-plugin-menu");
        assert_eq!(menu.name(), slugify("My Plugin Menu"));
    }

    #[test]
    fn icon_defaults_to_puzzle_and_can_be_overridden() {
        let default = PluginMenu::new("A", vec![], None);
        assert_eq!(default.icon_class, DEFAULT_MENU_ICON);

        let custom = PluginMenu::new("B", vec![], Some("mdi mdi-lan"));
        assert_eq!(custom.icon_class, "mdi mdi-lan");
    }

    #[test]
    fn groups_are_built_from_pairs_in_order() {
        let menu = PluginMenu::new(
            "Topology",
            vec![
                ("Maps".to_string(), vec![PluginMenuItem::new(None, "Map")]),
                ("Admin".to_string(), vec![]),
            ],
            None,
        );
        let labels: Vec<&str> = menu.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Maps", "Admin"]);
        assert_eq!(menu.groups[0].items.len(), 1);
    }
}
