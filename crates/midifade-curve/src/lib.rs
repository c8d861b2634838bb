//! Fade curve lookup tables for the midifade engine.
//!
//! This crate is the pure numerical layer: given two MIDI endpoint values, a
//! duration, a curve shape and the driver's tick period, it produces the two
//! quantizable sample sequences one fade traverses. No mutable state, no
//! I/O; everything that can go wrong is rejected at construction.
//!
//! # Example
//!
//! ```
//! use midifade_curve::{CurveShape, CurveTable};
//!
//! let table = CurveTable::new(0, 127, 250.0, CurveShape::from_constant(0.0), 5.0)?;
//! assert_eq!(table.sample_count(), 50);
//! # Ok::<(), midifade_curve::Error>(())
//! ```

mod error;
mod shape;
mod table;

pub use error::{Error, Result};
pub use shape::CurveShape;
pub use table::{CurveTable, MAX_DATA_BYTE};
