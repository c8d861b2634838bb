//! Quantizable fade lookup tables.

use crate::error::{Error, Result};
use crate::shape::CurveShape;

/// Highest value a MIDI data byte can carry.
pub const MAX_DATA_BYTE: u8 = 127;

/// Immutable pair of fade sample sequences for one control.
///
/// Holds two real-valued sequences of `N + 1` entries: `ascending` starts
/// from `from_value` and ends on `to_value`, `descending` starts from
/// `to_value` and ends on `from_value`. Both are indexed `0..=N` in the same
/// traversal direction; the names refer to which endpoint they start from.
///
/// Values stay real until read. Quantization to integer MIDI values is the
/// walker's job, because the two walk directions round differently.
///
/// # Example
///
/// ```
/// use midifade_curve::{CurveShape, CurveTable};
///
/// // 100 ms linear fade from 0 to 127, sampled every 10 ms
/// let table = CurveTable::new(0, 127, 100.0, CurveShape::Linear, 10.0)?;
///
/// assert_eq!(table.sample_count(), 10);
/// assert_eq!(table.ascending().len(), 11);
/// assert_eq!(table.ascending()[0], 0.0);
/// assert_eq!(table.descending()[0], 127.0);
/// # Ok::<(), midifade_curve::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveTable {
    from_value: u8,
    to_value: u8,
    interval_ms: f64,
    ascending: Vec<f64>,
    descending: Vec<f64>,
}

impl CurveTable {
    /// Build the lookup tables for one fade.
    ///
    /// `duration_ms` and `tick_ms` must be positive and the duration must
    /// cover at least one tick; both endpoints must be valid MIDI data
    /// bytes. Violations are rejected here, before any traversal exists;
    /// a zero duration is an error, never an instant fade.
    pub fn new(
        from_value: u8,
        to_value: u8,
        duration_ms: f64,
        shape: CurveShape,
        tick_ms: f64,
    ) -> Result<Self> {
        if !(duration_ms > 0.0) {
            return Err(Error::InvalidDuration(duration_ms));
        }
        if !(tick_ms > 0.0) {
            return Err(Error::InvalidTickPeriod(tick_ms));
        }
        if from_value > MAX_DATA_BYTE {
            return Err(Error::ValueOutOfRange(from_value));
        }
        if to_value > MAX_DATA_BYTE {
            return Err(Error::ValueOutOfRange(to_value));
        }

        let n = (duration_ms / tick_ms).floor() as usize;
        if n == 0 {
            return Err(Error::TooFewSamples {
                duration_ms,
                tick_ms,
            });
        }
        let interval_ms = duration_ms / n as f64;

        let from = f64::from(from_value);
        let to = f64::from(to_value);

        let (ascending, descending) = match shape {
            CurveShape::Linear => {
                // i * span / N keeps both endpoint entries bit-exact.
                let ascending = (0..=n)
                    .map(|i| from + i as f64 * (to - from) / n as f64)
                    .collect();
                let descending = (0..=n)
                    .map(|i| to + i as f64 * (from - to) / n as f64)
                    .collect();
                (ascending, descending)
            }
            CurveShape::Exponential(c) => {
                // Reparametrized exponential ease: exactly 0 at i = 0 and
                // exactly 1 at i = N, regardless of the shape constant.
                let span = (c * n as f64 * interval_ms).exp_m1();
                let ease = |i: usize| (c * i as f64 * interval_ms).exp_m1() / span;
                let ascending = (0..=n).map(|i| from + (to - from) * ease(i)).collect();
                let descending = (0..=n).map(|i| to + (from - to) * ease(i)).collect();
                (ascending, descending)
            }
        };

        Ok(Self {
            from_value,
            to_value,
            interval_ms,
            ascending,
            descending,
        })
    }

    /// Starting endpoint of the ascending sequence.
    #[inline]
    pub fn from_value(&self) -> u8 {
        self.from_value
    }

    /// Starting endpoint of the descending sequence.
    #[inline]
    pub fn to_value(&self) -> u8 {
        self.to_value
    }

    /// Number of advance steps in one full traversal (N).
    ///
    /// Both sequences hold `N + 1` entries.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.ascending.len() - 1
    }

    /// Milliseconds between adjacent samples.
    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Samples running from `from_value` toward `to_value`.
    #[inline]
    pub fn ascending(&self) -> &[f64] {
        &self.ascending
    }

    /// Samples running from `to_value` toward `from_value`.
    #[inline]
    pub fn descending(&self) -> &[f64] {
        &self.descending
    }
}
