//! Error types for the fade engine.

use thiserror::Error;

/// Error type for engine operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied configuration cannot produce a fade table.
    #[error(transparent)]
    Curve(#[from] midifade_curve::Error),

    /// A key event or query referenced an identity no fade is configured for.
    #[error("unknown fade identity: {0}")]
    UnknownIdentity(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
