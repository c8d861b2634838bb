//! Periodic fade dispatch over a shared traversal map.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::{FadeConfig, FadeMode};
use crate::error::{Error, Result};
use crate::traversal::FadeTraversal;

/// MIDI-output collaborator boundary.
///
/// The engine reports `(identity, quantized value)` pairs; turning them into
/// Control-Change bytes on the right channel is the transport layer's job.
pub trait ControlSink: Send {
    fn send_control(&mut self, identity: &str, value: u8);
}

impl<F: FnMut(&str, u8) + Send> ControlSink for F {
    fn send_control(&mut self, identity: &str, value: u8) {
        self(identity, value)
    }
}

/// UI feedback collaborator boundary, notified once per completed fade.
pub trait FeedbackSink: Send {
    fn fade_completed(&mut self, identity: &str);
}

impl<F: FnMut(&str) + Send> FeedbackSink for F {
    fn fade_completed(&mut self, identity: &str) {
        self(identity)
    }
}

struct FadeEntry {
    traversal: FadeTraversal,
    mode: FadeMode,
}

struct DriverInner {
    entries: HashMap<String, FadeEntry>,
    control: Box<dyn ControlSink>,
    feedback: Box<dyn FeedbackSink>,
}

/// Tick-driven dispatcher over every configured fade.
///
/// Owns the `identity -> traversal` map and the two output collaborators
/// behind one exclusive lock, so key events, ticks and emission never
/// interleave on the same entry. The driver does no arithmetic of its own:
/// [`tick()`](FadeDriver::tick) advances the active traversals and forwards
/// what they report.
///
/// # Example
///
/// ```
/// use midifade_engine::{FadeConfig, FadeDirection, FadeDriver, FadeMode};
///
/// let driver = FadeDriver::new(
///     10.0,
///     |identity: &str, value: u8| println!("{identity} -> {value}"),
///     |identity: &str| println!("{identity} done"),
/// )?;
///
/// driver.configure(
///     "button-1",
///     &FadeConfig {
///         from_value: 0,
///         to_value: 127,
///         duration_ms: 100.0,
///         curve: 0.0,
///         direction: FadeDirection::Forward,
///         mode: FadeMode::Momentary,
///     },
/// )?;
///
/// driver.key_down("button-1")?;
/// driver.tick(); // one step per tick from here on
/// # Ok::<(), midifade_engine::Error>(())
/// ```
pub struct FadeDriver {
    tick_ms: f64,
    inner: Mutex<DriverInner>,
}

impl FadeDriver {
    /// Create a driver that expects to be ticked every `tick_ms`
    /// milliseconds.
    pub fn new(
        tick_ms: f64,
        control: impl ControlSink + 'static,
        feedback: impl FeedbackSink + 'static,
    ) -> Result<Self> {
        if !(tick_ms > 0.0) {
            return Err(midifade_curve::Error::InvalidTickPeriod(tick_ms).into());
        }
        Ok(Self {
            tick_ms,
            inner: Mutex::new(DriverInner {
                entries: HashMap::new(),
                control: Box::new(control),
                feedback: Box::new(feedback),
            }),
        })
    }

    /// The tick period this driver's tables are sampled for.
    #[inline]
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// (Re)configure the fade for `identity`.
    ///
    /// Builds a fresh table and traversal and replaces any existing entry
    /// wholesale. On error nothing is created or replaced; the caller
    /// decides policy, e.g. disabling fading for that control.
    pub fn configure(&self, identity: impl Into<String>, config: &FadeConfig) -> Result<()> {
        let identity = identity.into();
        let traversal = config.build_traversal(self.tick_ms)?;
        debug!(
            identity = %identity,
            from = config.from_value,
            to = config.to_value,
            duration_ms = config.duration_ms,
            curve = config.curve,
            "configured fade"
        );
        let replaced = self
            .inner
            .lock()
            .entries
            .insert(
                identity.clone(),
                FadeEntry {
                    traversal,
                    mode: config.mode,
                },
            )
            .is_some();
        if replaced {
            trace!(identity = %identity, "replaced existing fade");
        }
        Ok(())
    }

    /// Drop the fade for `identity`. Returns whether one existed.
    pub fn remove(&self, identity: &str) -> bool {
        self.inner.lock().entries.remove(identity).is_some()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.inner.lock().entries.contains_key(identity)
    }

    /// Last quantized value produced for `identity`, if configured.
    pub fn current_value(&self, identity: &str) -> Option<u8> {
        self.inner
            .lock()
            .entries
            .get(identity)
            .map(|entry| entry.traversal.current_value())
    }

    /// Whether the fade for `identity` is currently being advanced.
    pub fn is_active(&self, identity: &str) -> bool {
        self.inner
            .lock()
            .entries
            .get(identity)
            .is_some_and(|entry| entry.traversal.is_active())
    }

    /// Key pressed on the control bound to `identity`.
    pub fn key_down(&self, identity: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        let entry = inner
            .entries
            .get_mut(identity)
            .ok_or_else(|| Error::UnknownIdentity(identity.to_string()))?;
        trace!(identity, mode = ?entry.mode, "key down");
        match entry.mode {
            FadeMode::Momentary => {
                // start() is ignored while the fade runs, so key repeat
                // cannot restart a traversal mid-flight.
                let direction = entry.traversal.direction();
                entry.traversal.start(direction);
            }
            FadeMode::Toggle => entry.traversal.toggle_active(),
        }
        Ok(())
    }

    /// Key released on the control bound to `identity`.
    pub fn key_up(&self, identity: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        let entry = inner
            .entries
            .get_mut(identity)
            .ok_or_else(|| Error::UnknownIdentity(identity.to_string()))?;
        trace!(identity, mode = ?entry.mode, "key up");
        match entry.mode {
            // Running fade: unwind from the cursor. Idle fade: unwind from
            // the far end, so a release always fades back.
            FadeMode::Momentary => entry.traversal.reverse(),
            FadeMode::Toggle => {}
        }
        Ok(())
    }

    /// Advance every active traversal by one step and flush the results.
    ///
    /// Emissions go to the control sink, one per changed value; completion
    /// notifications go to the feedback sink, one per finished traversal.
    /// A misbehaving entry can at worst absorb its own tick; the iteration
    /// never stops early.
    pub fn tick(&self) {
        let mut inner = self.inner.lock();
        let DriverInner {
            entries,
            control,
            feedback,
        } = &mut *inner;

        for (identity, entry) in entries.iter_mut() {
            if entry.traversal.is_active() {
                if let Some(value) = entry.traversal.advance() {
                    control.send_control(identity, value);
                }
            }
            if entry.traversal.take_finished() {
                debug!(identity = %identity, "fade completed");
                feedback.fade_completed(identity);
            }
        }
    }
}
