//! Route reversal.
//!
//! Link identifiers name routes; the routing table turns them back into URL
//! paths. The table is owned by the host framework, which may populate it
//! after navigation descriptors have already been constructed.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use tracing::debug;

/// Maps a link identifier to a concrete URL path.
///
/// Implemented by the host framework's routing table. Identifiers are opaque
/// strings; an unknown identifier reverses to `None` rather than an error.
pub trait UrlReverse: Send + Sync {
    /// Looks up `name`, returning the URL path when the route is known.
    fn reverse(&self, name: &str) -> Option<String>;
}

/// A map-backed routing table.
///
/// Routes may be registered at any time, including after descriptors holding
/// deferred URLs have been built against the table.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: RwLock<HashMap<String, String>>,
}

impl RouteTable {
    /// Creates an empty routing table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-global table that [`reverse_lazy`](crate::url::reverse_lazy)
    /// resolves against.
    pub fn global() -> &'static Arc<RouteTable> {
        static GLOBAL: LazyLock<Arc<RouteTable>> = LazyLock::new(|| Arc::new(RouteTable::new()));
        &GLOBAL
    }

    /// Registers a named route, replacing any previous path under `name`.
    pub fn register(&self, name: impl Into<String>, path: impl Into<String>) {
        let name = name.into();
        let path = path.into();
        debug!(route = %name, %path, "route registered");
        self.routes.write().unwrap().insert(name, path);
    }
}

impl UrlReverse for RouteTable {
    fn reverse(&self, name: &str) -> Option<String> {
        self.routes.read().unwrap().get(name).cloned()
    }
}
