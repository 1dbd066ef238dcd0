//! Menu items.

use serde::Serialize;

use crate::menu::button::PluginMenuButton;
use crate::url::{LazyUrl, reverse_lazy};

/// A navigation menu item: a primary link with its text, plus any buttons
/// rendered to the right of it in the sidebar.
///
/// The link is a route identifier reversed through the host's routing table.
/// Alternatively a pre-generated URL can be set on the item, which is then
/// returned literally.
#[derive(Clone, Debug, Serialize)]
pub struct PluginMenuItem {
    /// Link identifier naming the route this item points at.
    pub link: Option<String>,
    /// Display text for the item.
    pub link_text: String,
    /// Whether the item is shown only to authenticated users.
    pub auth_required: bool,
    /// Whether the item is shown only to staff users.
    pub staff_only: bool,
    /// Permissions required to display the item.
    pub permissions: Vec<String>,
    /// Buttons rendered next to the item, in order.
    pub buttons: Vec<PluginMenuButton>,
    url: Option<LazyUrl>,
}

impl PluginMenuItem {
    /// Creates an item pointing at `link` with the given display text.
    ///
    /// A non-empty link is bound eagerly to a deferred URL reference; the
    /// reverse lookup itself runs on first read. With no link the URL stays
    /// unset until [`set_url`](Self::set_url) is called.
    pub fn new(link: Option<&str>, link_text: impl Into<String>) -> Self {
        Self {
            link: link.map(str::to_owned),
            link_text: link_text.into(),
            auth_required: false,
            staff_only: false,
            permissions: Vec::new(),
            buttons: Vec::new(),
            url: link.filter(|l| !l.is_empty()).map(|link| reverse_lazy(link)),
        }
    }

    /// Restricts the item to authenticated users.
    pub fn auth_required(mut self, auth_required: bool) -> Self {
        self.auth_required = auth_required;
        self
    }

    /// Restricts the item to staff users.
    pub fn staff_only(mut self, staff_only: bool) -> Self {
        self.staff_only = staff_only;
        self
    }

    /// Sets the permissions required to display the item.
    pub fn permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Sets the buttons rendered next to the item.
    pub fn buttons(mut self, buttons: Vec<PluginMenuButton>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Reads the item URL, running the deferred lookup if needed.
    pub fn url(&self) -> Option<String> {
        self.url.as_ref().and_then(LazyUrl::get)
    }

    /// Replaces the URL with a literal or deferred value.
    pub fn set_url(&mut self, url: impl Into<LazyUrl>) {
        self.url = Some(url.into());
    }
}

#[cfg(test)]
mod tests {
    use super::PluginMenuItem;
    use crate::menu::button::PluginMenuButton;
    use crate::url::{LazyUrl, RouteTable};

    #[test]
    fn no_link_leaves_the_url_unset() {
        let item = PluginMenuItem::new(None, "X");
        assert_eq!(item.url(), None);
        assert_eq!(item.link, None);
    }

    #[test]
    fn setter_makes_a_literal_url_read_back_verbatim() {
        let mut item = PluginMenuItem::new(None, "Docs");
        item.set_url(LazyUrl::literal("/plugins/docs/"));
        assert_eq!(item.url(), Some("/plugins/docs/".to_string()));
    }

    #[test]
    fn link_resolves_through_the_global_table() {
        RouteTable::global().register("item-tests:device_list", "/dcim/devices/");
        let item = PluginMenuItem::new(Some("item-tests:device_list"), "Devices");
        assert_eq!(item.url(), Some("/dcim/devices/".to_string()));
    }

    #[test]
    fn link_registered_after_construction_still_resolves() {
        let item = PluginMenuItem::new(Some("item-tests:late_view"), "Late");
        assert_eq!(item.url(), None);
        RouteTable::global().register("item-tests:late_view", "/plugins/late/");
        assert_eq!(item.url(), Some("/plugins/late/".to_string()));
    }

    #[test]
    fn flags_default_off_and_builders_set_them() {
        let item = PluginMenuItem::new(None, "Admin only")
            .auth_required(true)
            .staff_only(true)
            .permissions(vec!["dcim.view_device".to_string()])
            .buttons(vec![PluginMenuButton::new(None, "Add", "mdi mdi-plus")]);
        assert!(item.auth_required);
        assert!(item.staff_only);
        assert_eq!(item.permissions, vec!["dcim.view_device".to_string()]);
        assert_eq!(item.buttons.len(), 1);

        let plain = PluginMenuItem::new(None, "Plain");
        assert!(!plain.auth_required);
        assert!(!plain.staff_only);
    }
}
