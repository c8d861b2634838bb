//! Easing shape selection.

use serde::{Deserialize, Serialize};

/// Easing shape of a fade trajectory.
///
/// The settings layer hands the engine a single real constant: `0` selects a
/// straight line, anything else selects an exponential ease with that shape
/// constant. The sign of the constant controls whether the curve accelerates
/// or decelerates toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveShape {
    Linear,
    Exponential(f64),
}

impl CurveShape {
    /// Map the raw settings constant onto a shape.
    #[inline]
    pub fn from_constant(c: f64) -> Self {
        if c == 0.0 {
            CurveShape::Linear
        } else {
            CurveShape::Exponential(c)
        }
    }

    /// The raw settings constant this shape round-trips to.
    #[inline]
    pub fn constant(&self) -> f64 {
        match self {
            CurveShape::Linear => 0.0,
            CurveShape::Exponential(c) => *c,
        }
    }
}

impl Default for CurveShape {
    fn default() -> Self {
        CurveShape::Linear
    }
}
