//! URL reversal and deferred URL values.
//!
//! This module contains the seam between navigation descriptors and the host
//! framework's routing: the reverse-lookup trait, a map-backed route table,
//! and the lazy URL values descriptors hold.

pub mod lazy;
pub mod reverse;

pub use lazy::{LazyUrl, reverse_lazy};
pub use reverse::{RouteTable, UrlReverse};
