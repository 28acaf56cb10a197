//! Periodic full-page reload.
//!
//! The reloader does not know how time passes or how a page is reloaded.
//! The timer comes in through `IntervalTimer`, the reload itself is the
//! `on_fire` callback handed to `start`.

use crate::shared::error::{ConfigError, ReloadError};
use log::info;

/// Перезагрузка раз в минуту
pub const DEFAULT_RELOAD_INTERVAL_MS: u32 = 60_000;

/// Fixed reload period. No backoff, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSchedule {
    period_ms: u32,
}

impl ReloadSchedule {
    pub fn new(period_ms: u32) -> Result<Self, ConfigError> {
        if period_ms == 0 {
            return Err(ConfigError::ZeroReloadInterval);
        }
        Ok(Self { period_ms })
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Offsets from start at which the timer fires: `period, 2 * period, ...`
    pub fn fire_times(&self) -> impl Iterator<Item = u64> {
        let period = u64::from(self.period_ms);
        (1u64..).map(move |n| n * period)
    }

    /// Number of firings that have happened `elapsed_ms` after start.
    pub fn firings_within(&self, elapsed_ms: u64) -> u64 {
        elapsed_ms / u64::from(self.period_ms)
    }
}

impl Default for ReloadSchedule {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_RELOAD_INTERVAL_MS,
        }
    }
}

/// A repeating timer primitive. Dropping the returned handle cancels the timer.
pub trait IntervalTimer {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut() + 'static>) -> Self::Handle;
}

/// Owns the repeating timer for the lifetime of the page.
///
/// - `start` arms the timer, `stop` cancels it
/// - dropping the reloader cancels the timer as well
pub struct PeriodicReloader<T: IntervalTimer> {
    timer: T,
    running: Option<(ReloadSchedule, T::Handle)>,
}

impl<T: IntervalTimer> PeriodicReloader<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            running: None,
        }
    }

    pub fn start<F>(&mut self, schedule: ReloadSchedule, on_fire: F) -> Result<(), ReloadError>
    where
        F: FnMut() + 'static,
    {
        if self.running.is_some() {
            return Err(ReloadError::AlreadyRunning);
        }
        let handle = self.timer.every(schedule.period_ms(), Box::new(on_fire));
        info!("Periodic reload armed, every {} ms", schedule.period_ms());
        self.running = Some((schedule, handle));
        Ok(())
    }

    /// Returns `true` when a running timer was cancelled.
    pub fn stop(&mut self) -> bool {
        match self.running.take() {
            Some((_, handle)) => {
                drop(handle);
                info!("Periodic reload stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn schedule(&self) -> Option<ReloadSchedule> {
        self.running.as_ref().map(|(schedule, _)| *schedule)
    }
}
