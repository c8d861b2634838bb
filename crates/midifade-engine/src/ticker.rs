//! Thread-based periodic tick source.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use tracing::debug;

use crate::driver::FadeDriver;

/// Drives a [`FadeDriver`] at its configured tick period from a dedicated
/// thread.
///
/// The engine never generates its own clock implicitly; spawning a ticker is
/// the integration layer's explicit choice. Hosts with their own timer can
/// skip this type and call [`FadeDriver::tick`] themselves.
///
/// The thread parks on a stop channel between ticks, so
/// [`stop()`](FadeTicker::stop) (or drop) returns without waiting out a
/// full period.
pub struct FadeTicker {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl FadeTicker {
    /// Spawn the tick thread for `driver`.
    pub fn spawn(driver: Arc<FadeDriver>) -> Self {
        let (stop, stopped) = bounded::<()>(1);
        let period = Duration::from_secs_f64(driver.tick_ms() / 1000.0);
        debug!(period_ms = driver.tick_ms(), "fade ticker started");

        let handle = thread::spawn(move || loop {
            match stopped.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => driver.tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the tick thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop.try_send(());
            let _ = handle.join();
            debug!("fade ticker stopped");
        }
    }
}

impl Drop for FadeTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
