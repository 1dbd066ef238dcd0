//! Menu item buttons.

use serde::Serialize;

use crate::menu::color::ButtonColor;
use crate::url::{LazyUrl, reverse_lazy};

/// A supplemental link button rendered to the right of a menu item.
///
/// Buttons carry their own link, icon, and color, and may be hidden behind
/// permissions independently of the item they belong to.
#[derive(Clone, Debug, Serialize)]
pub struct PluginMenuButton {
    /// Link identifier naming the route this button points at.
    pub link: Option<String>,
    /// Hover title for the button.
    pub title: String,
    /// Icon class for the button glyph.
    pub icon_class: String,
    /// Button color.
    pub color: ButtonColor,
    /// Permissions required to display the button.
    pub permissions: Vec<String>,
    url: Option<LazyUrl>,
}

impl PluginMenuButton {
    /// Creates a button pointing at `link`.
    ///
    /// A non-empty link is bound eagerly to a deferred URL reference; the
    /// reverse lookup itself runs on first read. With no link the URL stays
    /// unset until [`set_url`](Self::set_url) is called.
    pub fn new(
        link: Option<&str>,
        title: impl Into<String>,
        icon_class: impl Into<String>,
    ) -> Self {
        Self {
            link: link.map(str::to_owned),
            title: title.into(),
            icon_class: icon_class.into(),
            color: ButtonColor::default(),
            permissions: Vec::new(),
            url: link.filter(|l| !l.is_empty()).map(|link| reverse_lazy(link)),
        }
    }

    /// Sets the button color.
    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the permissions required to display the button.
    pub fn permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Reads the button URL, running the deferred lookup if needed.
    pub fn url(&self) -> Option<String> {
        self.url.as_ref().and_then(LazyUrl::get)
    }

    /// Replaces the URL with a literal or deferred value.
    pub fn set_url(&mut self, url: impl Into<LazyUrl>) {
        self.url = Some(url.into());
    }
}
