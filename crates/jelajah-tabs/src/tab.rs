//! Tab data structure
//!
//! The tab bar shows, per tab:
//! - Icon
//! - Title (truncated by the renderer)
//! - Active indicator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::page::{Icon, PageKind};

/// Opaque tab identifier, unique within a session and never reused
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// Display label, not necessarily unique
    pub title: String,
    /// Which page this tab renders
    pub page: PageKind,
    /// Glyph shown next to the title
    pub icon: Icon,
    /// When the tab was opened
    pub opened_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(page: PageKind, title: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: TabId::generate(),
            title: title.into(),
            page,
            icon,
            opened_at: Utc::now(),
        }
    }

    /// Get display title (with fallback to the page identifier)
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.page.as_str()
        } else {
            &self.title
        }
    }
}
