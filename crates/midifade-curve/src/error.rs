//! Error types for fade table construction.

use thiserror::Error;

/// Error type for curve table construction.
///
/// Every variant is a configuration the engine refuses to build a table
/// from; after construction the table is pure arithmetic and cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("fade duration must be positive, got {0} ms")]
    InvalidDuration(f64),

    #[error("tick period must be positive, got {0} ms")]
    InvalidTickPeriod(f64),

    #[error("MIDI data byte out of range: {0}. Must be at most 127")]
    ValueOutOfRange(u8),

    #[error("fade duration {duration_ms} ms is shorter than one tick of {tick_ms} ms")]
    TooFewSamples { duration_ms: f64, tick_ms: f64 },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
