pub mod app;
pub mod layout;
pub mod shared;

use contracts::domain::reload::ReloadSchedule;
use contracts::shared::config::BoardConfig;
use contracts::shared::error::{ReloadError, TabError};
use layout::global_context::BoardContext;
use leptos::prelude::*;
use log::{error, info, warn};
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

thread_local! {
    static BOARD: Cell<Option<BoardContext>> = const { Cell::new(None) };
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; the level is narrowed once config is read
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = shared::config_loader::load_board_config();
    let level = config.log_level().unwrap_or(log::Level::Debug);
    log::set_max_level(level.to_level_filter());

    let reload_period_ms = start_reload(&config);

    let board = BoardContext::new(config.panels.clone());
    board.refresh();
    BOARD.with(|slot| slot.set(Some(board)));

    if config.ui.tab_bar {
        mount_tab_bar(&config.ui.mount_id, board, reload_period_ms);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Arms the page reload timer. Returns the period when it is running.
fn start_reload(config: &BoardConfig) -> Option<u32> {
    if !config.reload.enabled {
        info!("Periodic reload disabled");
        return None;
    }
    let schedule = match config.reload_schedule() {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("Periodic reload not started: {}", e);
            return None;
        }
    };
    armed_period(schedule, shared::reloader::start_page_reload(schedule))
}

/// Period shown in the tab bar: only a timer this call armed counts.
fn armed_period(schedule: ReloadSchedule, started: Result<(), ReloadError>) -> Option<u32> {
    match started {
        Ok(()) => Some(schedule.period_ms()),
        Err(e) => {
            warn!("Periodic reload not started: {}", e);
            None
        }
    }
}

fn mount_tab_bar(mount_id: &str, board: BoardContext, reload_period_ms: Option<u32>) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(mount_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let app = move || view! { <app::App board=board reload_period_ms=reload_period_ms /> };
    match target {
        Some(parent) => leptos::mount::mount_to(parent, app).forget(),
        None => {
            info!("#{} not found, mounting tab bar to <body>", mount_id);
            leptos::mount::mount_to_body(app);
        }
    }
}

/// Switches the visible panel. Callable from markup, e.g. `onclick="wasmBindings.showTab('about')"` under Trunk.
#[wasm_bindgen(js_name = showTab)]
pub fn show_tab(tab_id: &str) -> Result<(), JsValue> {
    let board = BOARD
        .with(Cell::get)
        .ok_or_else(|| JsValue::from(js_sys::Error::new("tab board is not initialised")))?;
    board.switch_to(tab_id).map_err(to_js_error)
}

/// Re-reads the panels, for pages that add or remove panel nodes after load.
#[wasm_bindgen(js_name = refreshTabs)]
pub fn refresh_tabs() {
    if let Some(board) = BOARD.with(Cell::get) {
        board.refresh();
    }
}

/// Stops the periodic reload. Returns `true` when it was running.
#[wasm_bindgen(js_name = stopReload)]
pub fn stop_reload() -> bool {
    shared::reloader::stop_page_reload()
}

fn to_js_error(err: TabError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armed_period_when_started() {
        let schedule = ReloadSchedule::default();
        assert_eq!(armed_period(schedule, Ok(())), Some(60_000));
    }

    #[test]
    fn test_no_period_when_start_failed() {
        let schedule = ReloadSchedule::new(5_000).unwrap();
        assert_eq!(armed_period(schedule, Err(ReloadError::AlreadyRunning)), None);
    }
}
