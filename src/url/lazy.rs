//! Deferred URL values.
//!
//! A descriptor constructed at plugin load time may name a route the host has
//! not registered yet. URLs are therefore modeled as deferred values that run
//! the reverse lookup when read, not when built.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Serialize, Serializer};

use crate::url::reverse::{RouteTable, UrlReverse};

/// A deferred URL value.
///
/// Either a literal string returned verbatim, or a link identifier resolved
/// through a routing table on first read. A successful lookup is cached; an
/// unsuccessful one is retried on the next read, so routes registered after
/// construction still resolve.
#[derive(Clone)]
pub struct LazyUrl {
    kind: Kind,
}

#[derive(Clone)]
enum Kind {
    Literal(String),
    Deferred {
        link: String,
        reverser: Arc<dyn UrlReverse>,
        resolved: OnceLock<String>,
    },
}

impl LazyUrl {
    /// Wraps a pre-resolved URL, returned verbatim on every read.
    pub fn literal(url: impl Into<String>) -> Self {
        Self {
            kind: Kind::Literal(url.into()),
        }
    }

    /// Defers resolution of `link` through `reverser` until first read.
    pub fn deferred(link: impl Into<String>, reverser: Arc<dyn UrlReverse>) -> Self {
        Self {
            kind: Kind::Deferred {
                link: link.into(),
                reverser,
                resolved: OnceLock::new(),
            },
        }
    }

    /// The link identifier this value resolves, when deferred.
    pub fn link(&self) -> Option<&str> {
        match &self.kind {
            Kind::Literal(_) => None,
            Kind::Deferred { link, .. } => Some(link),
        }
    }

    /// Reads the URL, running the deferred lookup if it has not yet
    /// succeeded. Returns `None` while the route is unknown.
    pub fn get(&self) -> Option<String> {
        match &self.kind {
            Kind::Literal(url) => Some(url.clone()),
            Kind::Deferred {
                link,
                reverser,
                resolved,
            } => {
                if let Some(url) = resolved.get() {
                    return Some(url.clone());
                }
                let url = reverser.reverse(link)?;
                Some(resolved.get_or_init(|| url).clone())
            }
        }
    }
}

impl fmt::Debug for LazyUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
            Kind::Deferred { link, resolved, .. } => f
                .debug_struct("Deferred")
                .field("link", link)
                .field("resolved", &resolved.get())
                .finish(),
        }
    }
}

impl Serialize for LazyUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(url) => serializer.serialize_str(&url),
            None => serializer.serialize_none(),
        }
    }
}

impl From<String> for LazyUrl {
    fn from(url: String) -> Self {
        Self::literal(url)
    }
}

impl From<&str> for LazyUrl {
    fn from(url: &str) -> Self {
        Self::literal(url)
    }
}

/// A [`LazyUrl`] deferred against the process-global
/// [`RouteTable`](crate::url::RouteTable).
pub fn reverse_lazy(link: impl Into<String>) -> LazyUrl {
    LazyUrl::deferred(link, Arc::clone(RouteTable::global()) as Arc<dyn UrlReverse>)
}
