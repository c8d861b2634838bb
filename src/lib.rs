//! # Midifade - Quantized MIDI Crossfade Engine
//!
//! Midifade turns physical key presses into stepped MIDI Control-Change
//! trajectories: given two endpoint values, a duration and a curve shape, it
//! precomputes a quantizable lookup table and walks it forward or backward
//! under key-down/key-up control, emitting exactly one value per change and
//! signaling completion.
//!
//! ## Architecture
//!
//! Umbrella crate over two members:
//! - **midifade-curve** - pure lookup-table generation (linear and
//!   exponential easing, construction-time validation)
//! - **midifade-engine** - the fade traversal state machine, the tick-driven
//!   driver, key-event dispatch and the optional ticker thread
//!
//! ## Quick Start
//!
//! ```
//! use midifade::{FadeConfig, FadeDirection, FadeDriver, FadeMode};
//!
//! let driver = FadeDriver::new(
//!     10.0,
//!     |identity: &str, value: u8| println!("cc {identity} = {value}"),
//!     |identity: &str| println!("fade {identity} finished"),
//! )?;
//!
//! driver.configure(
//!     "button-1",
//!     &FadeConfig {
//!         from_value: 0,
//!         to_value: 127,
//!         duration_ms: 100.0,
//!         curve: 0.0,
//!         direction: FadeDirection::Forward,
//!         mode: FadeMode::Momentary,
//!     },
//! )?;
//!
//! driver.key_down("button-1")?;
//! for _ in 0..11 {
//!     driver.tick();
//! }
//! assert_eq!(driver.current_value("button-1"), Some(127));
//! # Ok::<(), midifade::Error>(())
//! ```
//!
//! What stays outside: MIDI wire encoding, port discovery, host settings
//! parsing and icon handling all belong to the integration layer. The
//! engine's boundaries are the [`ControlSink`] and [`FeedbackSink`] traits
//! and the tick entry point.

/// Re-export of midifade-curve for direct access
pub use midifade_curve as curve;

/// Re-export of midifade-engine for direct access
pub use midifade_engine as engine;

pub use midifade_engine::{
    ControlSink, CurveShape, CurveTable, Error, FadeConfig, FadeDirection, FadeDriver, FadeMode,
    FadeTicker, FadeTraversal, FeedbackSink, Result, MAX_DATA_BYTE,
};
