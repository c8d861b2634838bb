//! Per-control fade configuration.

use midifade_curve::{CurveShape, CurveTable};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traversal::{FadeDirection, FadeTraversal};

/// How a key-down/key-up pair drives a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeMode {
    /// Key-down starts the fade (or pauses a running one); key-up unwinds
    /// it back toward its start.
    #[default]
    Momentary,
    /// Key-down pauses or resumes the fade; key-up does nothing.
    Toggle,
}

/// Everything the settings layer supplies for one fading control.
///
/// `curve` is the raw shape constant from the settings payload: `0` is
/// linear, anything else selects an exponential ease with that constant.
/// The driver's tick period is global and lives on the driver, not here.
///
/// A config is applied wholesale: reconfiguring an identity replaces its
/// traversal, it never patches fields of a live one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FadeConfig {
    pub from_value: u8,
    pub to_value: u8,
    pub duration_ms: f64,
    #[serde(default)]
    pub curve: f64,
    #[serde(default)]
    pub direction: FadeDirection,
    #[serde(default)]
    pub mode: FadeMode,
}

impl FadeConfig {
    /// Build the traversal this configuration describes.
    pub(crate) fn build_traversal(&self, tick_ms: f64) -> Result<FadeTraversal> {
        let table = CurveTable::new(
            self.from_value,
            self.to_value,
            self.duration_ms,
            CurveShape::from_constant(self.curve),
            tick_ms,
        )?;
        Ok(FadeTraversal::new(table, self.direction))
    }
}
