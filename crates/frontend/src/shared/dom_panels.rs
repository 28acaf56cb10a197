//! Panels that live in the page DOM.
//!
//! A panel is any element matching the configured selector; its key is the
//! element `id`. Visibility is the configured CSS class on the element.

use crate::layout::tabs::tab_label;
use contracts::domain::switcher::PanelHost;
use contracts::shared::config::PanelsConfig;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

/// Snapshot of a single panel node, used to render the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelInfo {
    pub key: String,
    pub title: String,
    pub active: bool,
}

pub struct DomPanelHost {
    document: Document,
    selector: String,
    active_class: String,
}

impl DomPanelHost {
    pub fn new(document: Document, config: &PanelsConfig) -> Self {
        Self {
            document,
            selector: config.selector.clone(),
            active_class: config.active_class.clone(),
        }
    }

    /// `None` outside a browser window.
    pub fn from_window(config: &PanelsConfig) -> Option<Self> {
        let document = window()?.document()?;
        Some(Self::new(document, config))
    }

    fn panel_elements(&self) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(&self.selector) else {
            warn!("Invalid panel selector `{}`", self.selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Reads every panel currently in the document, in document order.
    /// Panels without an `id` cannot be switched to and are skipped.
    pub fn scan(&self) -> Vec<PanelInfo> {
        self.panel_elements()
            .into_iter()
            .filter_map(|el| {
                let key = el.id();
                if key.is_empty() {
                    warn!("Panel matching `{}` has no id, skipped", self.selector);
                    return None;
                }
                let data_title = el.get_attribute("data-title");
                Some(PanelInfo {
                    title: tab_label(&key, data_title.as_deref()),
                    active: el.class_list().contains(&self.active_class),
                    key,
                })
            })
            .collect()
    }

    /// Panel node with id `key`. Elements outside the selector are not panels.
    fn find_panel(&self, key: &str) -> Option<Element> {
        let mut panels = self.panel_elements();
        let index = panel_index(panels.iter().map(Element::id), key)?;
        Some(panels.swap_remove(index))
    }

    pub fn active_keys(&self) -> Vec<String> {
        self.panel_elements()
            .into_iter()
            .filter(|el| el.class_list().contains(&self.active_class))
            .map(|el| el.id())
            .collect()
    }
}

impl PanelHost for DomPanelHost {
    fn contains(&self, key: &str) -> bool {
        self.find_panel(key).is_some()
    }

    fn deactivate_all(&mut self) {
        for el in self.panel_elements() {
            let _ = el.class_list().remove_1(&self.active_class);
        }
    }

    fn activate(&mut self, key: &str) -> bool {
        match self.find_panel(key) {
            Some(el) => el.class_list().add_1(&self.active_class).is_ok(),
            None => false,
        }
    }
}

/// Position of the first panel whose id equals `key`. Id-less panels never match.
fn panel_index<I>(ids: I, key: &str) -> Option<usize>
where
    I: IntoIterator<Item = String>,
{
    if key.is_empty() {
        return None;
    }
    ids.into_iter().position(|id| id == key)
}
