// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while reading color values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not exactly six hex digits after an optional `#`.
    #[error("invalid hex color '{0}': expected 6 hex digits, optionally prefixed with '#'")]
    InvalidFormat(String),
}
