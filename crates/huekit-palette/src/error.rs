//! Error type for rule dispatch and parameter parsing.

use huekit_color::ColorError;
use thiserror::Error;

/// Everything that can go wrong between a caller's strings and a palette.
///
/// All variants are caller input errors. Nothing here is retried or
/// papered over with a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The base color did not parse.
    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    /// The rule identifier names no known harmony rule.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// A named parameter that no rule reads.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// A known parameter with a value that does not parse or is out of range.
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },

    /// The rule derives from a base color and none was supplied.
    #[error("rule '{0}' needs a base color")]
    MissingBase(&'static str),
}
