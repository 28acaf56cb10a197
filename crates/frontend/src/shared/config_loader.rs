use contracts::shared::config::BoardConfig;
use log::{error, info};
use web_sys::window;

/// Id of the optional inline config element:
/// `<script type="application/toml" id="tab-board-config">...</script>`
pub const CONFIG_ELEMENT_ID: &str = "tab-board-config";

/// Load the board configuration
///
/// Search order:
/// 1. Inline `#tab-board-config` element on the page
/// 2. Falls back to the embedded default config
///
/// URL query overrides (`?reload_ms=...&reload=...&missing_tab=...`) are
/// applied on top. Invalid input is logged and skipped, never fatal.
pub fn load_board_config() -> BoardConfig {
    let mut config = match inline_config_source() {
        Some(src) => match BoardConfig::from_toml(&src) {
            Ok(config) => {
                info!("Loaded config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                error!("Invalid #{} config, using defaults: {}", CONFIG_ELEMENT_ID, e);
                BoardConfig::default()
            }
        },
        None => {
            info!("Using default embedded configuration");
            BoardConfig::default()
        }
    };

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if let Err(e) = config.apply_query(&search) {
        error!("Ignoring URL overrides `{}`: {}", search, e);
    }

    config
}

fn inline_config_source() -> Option<String> {
    let element = window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|s| !s.trim().is_empty())
}
