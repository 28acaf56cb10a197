//! In-memory panel model.
//!
//! `PanelSet` is the plain-data counterpart of the panel nodes on a page: an
//! ordered list of unique keys, each with an active marker.

use super::switcher::PanelHost;
use crate::shared::error::TabError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    key: String,
    active: bool,
}

impl Panel {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Ordered set of panels with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSet {
    panels: Vec<Panel>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set where every panel starts inactive.
    pub fn from_keys<I, S>(keys: I) -> Result<Self, TabError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_pairs(keys.into_iter().map(|k| (k, false)))
    }

    /// Builds a set from `(key, active)` pairs. Any number of panels may start
    /// active, matching markup where several nodes carry the marker by default.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TabError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (key, active) in pairs {
            set.push(key, active)?;
        }
        Ok(set)
    }

    pub fn push(&mut self, key: impl Into<String>, active: bool) -> Result<(), TabError> {
        let key = key.into();
        if self.position(&key).is_some() {
            return Err(TabError::DuplicateKey { key });
        }
        self.panels.push(Panel { key, active });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// `None` when the key is unknown.
    pub fn is_active(&self, key: &str) -> Option<bool> {
        self.position(key).map(|i| self.panels[i].active)
    }

    pub fn active_keys(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| p.active)
            .map(|p| p.key.as_str())
            .collect()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.key == key)
    }
}

impl PanelHost for PanelSet {
    fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn deactivate_all(&mut self) {
        for panel in &mut self.panels {
            panel.active = false;
        }
    }

    fn activate(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.panels[i].active = true;
                true
            }
            None => false,
        }
    }
}
