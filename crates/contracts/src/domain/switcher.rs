//! Переключение вкладок.
//!
//! Алгоритм не зависит от того, где живут панели: в памяти (`PanelSet`)
//! или в DOM страницы. Всё, что ему нужно, описано трейтом `PanelHost`.

use crate::shared::error::TabError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Anything that can enumerate panels and toggle their active marker.
pub trait PanelHost {
    /// Whether a panel with `key` can be located.
    fn contains(&self, key: &str) -> bool;

    /// Removes the active marker from every panel. Inactive panels are left as is.
    fn deactivate_all(&mut self);

    /// Adds the active marker to the panel `key`.
    /// Returns `false` when no such panel exists.
    fn activate(&mut self, key: &str) -> bool;
}

/// What `switch_to` does when the requested key has no panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTabPolicy {
    /// Deactivate everything, then report `NotFound`. No panel stays visible.
    #[default]
    Clear,
    /// Leave the panels untouched and report `NotFound`.
    Keep,
    /// Leave the panels untouched and succeed.
    Ignore,
}

impl MissingTabPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingTabPolicy::Clear => "clear",
            MissingTabPolicy::Keep => "keep",
            MissingTabPolicy::Ignore => "ignore",
        }
    }

    pub fn all() -> [MissingTabPolicy; 3] {
        [
            MissingTabPolicy::Clear,
            MissingTabPolicy::Keep,
            MissingTabPolicy::Ignore,
        ]
    }
}

/// Deactivates every panel, then activates the one whose key equals `tab_id`.
pub fn switch_to<H>(host: &mut H, tab_id: &str, policy: MissingTabPolicy) -> Result<(), TabError>
where
    H: PanelHost + ?Sized,
{
    match policy {
        MissingTabPolicy::Keep if !host.contains(tab_id) => {
            warn!("switch_to: no panel `{}`, keeping current selection", tab_id);
            return Err(TabError::not_found(tab_id));
        }
        MissingTabPolicy::Ignore if !host.contains(tab_id) => {
            warn!("switch_to: no panel `{}`, ignored", tab_id);
            return Ok(());
        }
        _ => {}
    }

    host.deactivate_all();

    if host.activate(tab_id) {
        debug!("switch_to: `{}` is now active", tab_id);
        Ok(())
    } else {
        warn!("switch_to: no panel `{}`, all panels are hidden", tab_id);
        Err(TabError::not_found(tab_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::PanelSet;

    fn board() -> PanelSet {
        PanelSet::from_pairs([("home", true), ("about", false), ("contact", false)]).unwrap()
    }

    #[test]
    fn test_exactly_one_active_after_switch() {
        for key in ["home", "about", "contact"] {
            let mut set = board();
            switch_to(&mut set, key, MissingTabPolicy::Clear).unwrap();
            assert_eq!(set.active_keys(), vec![key]);
        }
    }

    #[test]
    fn test_switch_from_several_default_active() {
        let mut set = PanelSet::from_pairs([("a", true), ("b", true), ("c", true)]).unwrap();
        switch_to(&mut set, "c", MissingTabPolicy::Clear).unwrap();
        assert_eq!(set.active_keys(), vec!["c"]);
    }

    #[test]
    fn test_switch_is_idempotent() {
        let mut once = board();
        switch_to(&mut once, "contact", MissingTabPolicy::Clear).unwrap();

        let mut twice = board();
        switch_to(&mut twice, "contact", MissingTabPolicy::Clear).unwrap();
        switch_to(&mut twice, "contact", MissingTabPolicy::Clear).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_second_switch_replaces_first() {
        let mut set = board();
        switch_to(&mut set, "about", MissingTabPolicy::Clear).unwrap();
        switch_to(&mut set, "contact", MissingTabPolicy::Clear).unwrap();
        assert_eq!(set.is_active("about"), Some(false));
        assert_eq!(set.is_active("contact"), Some(true));
    }

    #[test]
    fn test_home_to_about_scenario() {
        let mut set = board();
        switch_to(&mut set, "about", MissingTabPolicy::Clear).unwrap();
        assert_eq!(set.is_active("home"), Some(false));
        assert_eq!(set.is_active("about"), Some(true));
        assert_eq!(set.is_active("contact"), Some(false));
    }

    #[test]
    fn test_missing_tab_clear_hides_everything() {
        let mut set = board();
        let err = switch_to(&mut set, "pricing", MissingTabPolicy::Clear).unwrap_err();
        assert_eq!(err, TabError::not_found("pricing"));
        assert!(set.active_keys().is_empty());
    }

    #[test]
    fn test_missing_tab_keep_preserves_selection() {
        let mut set = board();
        let err = switch_to(&mut set, "pricing", MissingTabPolicy::Keep).unwrap_err();
        assert_eq!(err, TabError::not_found("pricing"));
        assert_eq!(set, board());
    }

    #[test]
    fn test_missing_tab_ignore_is_silent() {
        let mut set = board();
        switch_to(&mut set, "pricing", MissingTabPolicy::Ignore).unwrap();
        assert_eq!(set, board());
    }

    #[test]
    fn test_empty_id_is_unknown() {
        let mut set = board();
        assert!(switch_to(&mut set, "", MissingTabPolicy::Clear).is_err());
        assert!(set.active_keys().is_empty());
    }

    #[test]
    fn test_empty_panel_set() {
        let mut set = PanelSet::new();
        assert!(switch_to(&mut set, "home", MissingTabPolicy::Clear).is_err());
        assert!(switch_to(&mut set, "home", MissingTabPolicy::Ignore).is_ok());
    }

    #[test]
    fn test_policy_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MissingTabPolicy,
        }
        for policy in MissingTabPolicy::all() {
            let src = format!("policy = \"{}\"", policy.as_str());
            let parsed: Wrapper = toml::from_str(&src).unwrap();
            assert_eq!(parsed.policy, policy);
        }
    }
}
