//! Crate error types.

use thiserror::Error;

/// Errors produced while building navigation descriptors.
///
/// Construction of descriptors from typed values cannot fail; errors only
/// arise where strings enter the system, such as parsing a button color name
/// from configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// A button color name outside the allowed set.
    #[error("unknown button color `{0}`")]
    UnknownColor(String),
}
