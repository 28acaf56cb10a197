//! Page-lifetime reload timer backed by `gloo_timers`.

use contracts::domain::reload::{IntervalTimer, PeriodicReloader, ReloadSchedule};
use contracts::shared::error::ReloadError;
use gloo_timers::callback::Interval;
use log::{error, info};
use std::cell::RefCell;
use web_sys::window;

/// `setInterval` through gloo; dropping the `Interval` clears it.
pub struct GlooIntervalTimer;

impl IntervalTimer for GlooIntervalTimer {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut() + 'static>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

pub type PageReloader = PeriodicReloader<GlooIntervalTimer>;

thread_local! {
    static RELOADER: RefCell<PageReloader> = RefCell::new(PeriodicReloader::new(GlooIntervalTimer));
}

/// Full reload of the current document. All wasm state goes with it.
pub fn reload_page() {
    let Some(window) = window() else {
        error!("reload_page: no window");
        return;
    };
    info!("Reloading page");
    if let Err(e) = window.location().reload() {
        error!("location.reload() failed: {:?}", e);
    }
}

pub fn start_page_reload(schedule: ReloadSchedule) -> Result<(), ReloadError> {
    RELOADER.with(|r| r.borrow_mut().start(schedule, reload_page))
}

/// Returns `true` when a running timer was stopped.
pub fn stop_page_reload() -> bool {
    RELOADER.with(|r| r.borrow_mut().stop())
}
