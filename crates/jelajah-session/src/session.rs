//! Tab session state machine
//!
//! ```text
//! Uninitialized
//!   ↓ initialize
//! Initialized (N >= 1 tabs, one active)
//!   ↺ add_new_tab / switch_tab / close_tab
//! ```

use serde::{Deserialize, Serialize};

use jelajah_tabs::{Icon, PageKind, Tab, TabId};

/// Title of the tab seeded by `initialize`
pub const DEFAULT_HOME_TITLE: &str = "Beranda";

/// Read-only copy of the session handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<TabId>,
}

impl SessionSnapshot {
    pub fn active_tab(&self) -> Option<&Tab> {
        let active = self.active_tab_id.as_ref()?;
        self.tabs.iter().find(|t| &t.id == active)
    }
}

#[derive(Debug, Clone)]
pub struct TabSession {
    /// Open tabs, in display order
    tabs: Vec<Tab>,
    /// Currently visible tab, `None` only before initialization
    active_tab_id: Option<TabId>,
    /// Title given to the seeded home tab
    home_title: String,
}

impl TabSession {
    pub fn new() -> Self {
        Self::with_home_title(DEFAULT_HOME_TITLE)
    }

    pub fn with_home_title(home_title: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            home_title: home_title.into(),
        }
    }

    /// Seed the session with a single home tab.
    ///
    /// Returns false (and does nothing) when tabs already exist.
    pub fn initialize(&mut self) -> bool {
        if !self.tabs.is_empty() {
            return false;
        }

        let tab = Tab::new(PageKind::Home, self.home_title.clone(), Icon::Home);
        tracing::info!(tab_id = %tab.id, title = %tab.title, "Initialized tab session");

        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab);
        true
    }

    /// Append a new tab and bring it to the foreground
    pub fn add_new_tab(&mut self, page: PageKind, title: impl Into<String>, icon: Icon) -> TabId {
        let tab = Tab::new(page, title, icon);
        let id = tab.id.clone();

        tracing::info!(tab_id = %id, page = %page, title = %tab.title, "Opened tab");

        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        id
    }

    /// Make `tab_id` the active tab.
    ///
    /// Ids that name no open tab are ignored. Returns whether the active tab changed.
    pub fn switch_tab(&mut self, tab_id: &TabId) -> bool {
        if !self.contains(tab_id) {
            tracing::debug!(tab_id = %tab_id, "Ignoring switch to unknown tab");
            return false;
        }
        if self.active_tab_id.as_ref() == Some(tab_id) {
            return false;
        }

        tracing::debug!(tab_id = %tab_id, "Switched tab");
        self.active_tab_id = Some(tab_id.clone());
        true
    }

    /// Close `tab_id`. The last remaining tab is never closed.
    ///
    /// When the active tab closes, its left neighbour takes over (or the
    /// new first tab if it was leftmost). Returns whether a tab was removed.
    pub fn close_tab(&mut self, tab_id: &TabId) -> bool {
        if self.tabs.len() <= 1 {
            tracing::debug!(tab_id = %tab_id, "Refusing to close the last tab");
            return false;
        }

        let Some(idx) = self.tabs.iter().position(|t| &t.id == tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Ignoring close of unknown tab");
            return false;
        };

        let closed = self.tabs.remove(idx);

        if self.active_tab_id.as_ref() == Some(&closed.id) {
            self.active_tab_id = self
                .tabs
                .get(idx.saturating_sub(1))
                .or_else(|| self.tabs.first())
                .map(|t| t.id.clone());
        }

        tracing::info!(
            tab_id = %closed.id,
            remaining = self.tabs.len(),
            "Closed tab"
        );

        true
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab_id.as_ref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.as_ref().and_then(|id| self.get(id))
    }

    pub fn get(&self, tab_id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == tab_id)
    }

    pub fn contains(&self, tab_id: &TabId) -> bool {
        self.tabs.iter().any(|t| &t.id == tab_id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.active_tab_id.is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tabs: self.tabs.clone(),
            active_tab_id: self.active_tab_id.clone(),
        }
    }
}

impl Default for TabSession {
    fn default() -> Self {
        Self::new()
    }
}
