//! View models for the tab bar and content pane

use serde::{Deserialize, Serialize};

use jelajah_session::SessionSnapshot;
use jelajah_tabs::{Icon, PageKind, TabId};

use crate::pages::{PageDescriptor, PageRegistry};

/// Stacking order of the active tab; inactive tabs count down from 9
const ACTIVE_Z_INDEX: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarItem {
    pub id: TabId,
    pub title: String,
    pub icon: Icon,
    pub is_active: bool,
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarView {
    pub site_title: String,
    /// Left to right
    pub items: Vec<TabBarItem>,
}

impl TabBarView {
    pub fn from_snapshot(site_title: &str, snapshot: &SessionSnapshot) -> Self {
        let items = snapshot
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let is_active = snapshot.active_tab_id.as_ref() == Some(&tab.id);
                let z_index = if is_active {
                    ACTIVE_Z_INDEX
                } else {
                    (ACTIVE_Z_INDEX - 1).saturating_sub(index as u32)
                };

                TabBarItem {
                    id: tab.id.clone(),
                    title: tab.display_title().to_string(),
                    icon: tab.icon,
                    is_active,
                    z_index,
                }
            })
            .collect();

        Self {
            site_title: site_title.to_string(),
            items,
        }
    }

    pub fn active(&self) -> Option<&TabBarItem> {
        self.items.iter().find(|item| item.is_active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentView {
    /// Tab being shown, `None` before the session is initialized
    pub tab_id: Option<TabId>,
    /// `[site title, tab title]`
    pub breadcrumb: Vec<String>,
    /// Page to mount
    pub page: PageDescriptor,
}

impl ContentView {
    /// Active tab, else the first tab, else the home page
    pub fn from_snapshot(
        site_title: &str,
        home_title: &str,
        snapshot: &SessionSnapshot,
        registry: &PageRegistry,
    ) -> Self {
        let shown = snapshot.active_tab().or_else(|| snapshot.tabs.first());

        let kind = shown.map(|tab| tab.page).unwrap_or(PageKind::Home);
        let title = shown
            .map(|tab| tab.display_title().to_string())
            .unwrap_or_else(|| home_title.to_string());

        let page = registry
            .get(kind)
            .cloned()
            .unwrap_or_else(|| PageDescriptor::bare(kind));

        Self {
            tab_id: shown.map(|tab| tab.id.clone()),
            breadcrumb: vec![site_title.to_string(), title],
            page,
        }
    }
}
