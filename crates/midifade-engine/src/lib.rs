//! Crossfade engine for button-driven MIDI control.
//!
//! Turns discrete key-down/key-up events into quantized, duplicate-free
//! MIDI value trajectories. A [`FadeTraversal`] walks one precomputed
//! [`CurveTable`] forward or backward, one step per tick; a [`FadeDriver`]
//! owns every configured traversal and fans each changed value out to the
//! MIDI-output collaborator, plus a one-shot completion notification per
//! finished fade.
//!
//! The engine has no clock of its own: the host either calls
//! [`FadeDriver::tick`] from its own timer or spawns a [`FadeTicker`].
//!
//! # Example
//!
//! ```
//! use midifade_engine::{FadeConfig, FadeDirection, FadeDriver, FadeMode};
//!
//! let driver = FadeDriver::new(
//!     5.0,
//!     |identity: &str, value: u8| println!("cc {identity} = {value}"),
//!     |identity: &str| println!("fade {identity} finished"),
//! )?;
//!
//! driver.configure(
//!     "volume",
//!     &FadeConfig {
//!         from_value: 0,
//!         to_value: 100,
//!         duration_ms: 250.0,
//!         curve: 0.0,
//!         direction: FadeDirection::Forward,
//!         mode: FadeMode::Momentary,
//!     },
//! )?;
//!
//! driver.key_down("volume")?; // hold: fade toward 100
//! driver.tick();
//! driver.key_up("volume")?; // release: unwind toward 0
//! driver.tick();
//! # Ok::<(), midifade_engine::Error>(())
//! ```

// Error types
pub mod error;
pub use error::{Error, Result};

mod config;
mod driver;
mod ticker;
mod traversal;

pub use config::{FadeConfig, FadeMode};
pub use driver::{ControlSink, FadeDriver, FeedbackSink};
pub use ticker::FadeTicker;
pub use traversal::{FadeDirection, FadeTraversal};

// Re-export the curve primitives (users shouldn't need to import
// midifade-curve directly).
pub use midifade_curve::{CurveShape, CurveTable, MAX_DATA_BYTE};
