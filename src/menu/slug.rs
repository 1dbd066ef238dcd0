//! Label slugification.
//!
//! Menu names shown in URLs and anchors are derived from human-readable
//! labels rather than stored separately.

use heck::ToKebabCase;

/// Derives a URL-safe slug from a label: lowercase, hyphen-separated, with
/// punctuation dropped.
///
/// Slugification is idempotent; an already-slugified value passes through
/// unchanged.
pub fn slugify(label: &str) -> String {
    label.to_kebab_case()
}
