//! Crate error type.

use thiserror::Error;

/// Errors raised while building rotations or loading site configuration.
///
/// Rendering paths never surface these: views fall back to static content or
/// default settings and log the failure instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A rotation was requested over a list with no items.
    #[error("cannot rotate over an empty list")]
    EmptyRotation,

    /// A rotation window must show at least one item.
    #[error("rotation window size must be at least 1")]
    ZeroWindow,

    /// The configuration document is not valid TOML for [`crate::SiteConfig`].
    #[error("failed to parse site config: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration value parsed but breaks a constraint.
    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting {
        /// Dotted path of the offending key, e.g. `industries.window`.
        key: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
