use crate::shared::dom_panels::{DomPanelHost, PanelInfo};
use contracts::domain::switcher;
use contracts::shared::config::PanelsConfig;
use contracts::shared::error::TabError;
use leptos::prelude::*;

/// Reactive mirror of the panels in the page.
///
/// The DOM stays the source of truth: every switch goes through
/// `DomPanelHost`, then the signals are refreshed from the document.
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub panels: RwSignal<Vec<PanelInfo>>,
    pub active: RwSignal<Vec<String>>,
    pub last_error: RwSignal<Option<String>>,
    config: StoredValue<PanelsConfig>,
}

impl BoardContext {
    pub fn new(config: PanelsConfig) -> Self {
        Self {
            panels: RwSignal::new(vec![]),
            active: RwSignal::new(vec![]),
            last_error: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    fn host(&self) -> Option<DomPanelHost> {
        self.config.with_value(DomPanelHost::from_window)
    }

    /// Re-reads the panel list and the active markers from the document.
    pub fn refresh(&self) {
        let Some(host) = self.host() else {
            return;
        };
        let panels = host.scan();
        leptos::logging::log!("🔄 refresh: {} panel(s) found", panels.len());
        self.active.set(
            panels
                .iter()
                .filter(|p| p.active)
                .map(|p| p.key.clone())
                .collect(),
        );
        self.panels.set(panels);
    }

    pub fn switch_to(&self, tab_id: &str) -> Result<(), TabError> {
        leptos::logging::log!("🔶 switch_to: tab_id='{}'", tab_id);
        let policy = self.config.with_value(|config| config.missing_tab);
        let result = match self.host() {
            Some(mut host) => {
                let result = switcher::switch_to(&mut host, tab_id, policy);
                self.active.set(host.active_keys());
                result
            }
            None => Err(TabError::not_found(tab_id)),
        };
        self.last_error.set(result.as_ref().err().map(|e| e.to_string()));
        result
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|keys| keys.iter().any(|k| k == key))
    }
}
