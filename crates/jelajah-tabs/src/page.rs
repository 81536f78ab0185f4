//! Page references
//!
//! The site has a closed set of pages. A tab refers to one of them by kind:
//! ```text
//! home | tourism | food | transport | history | gallery
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// Parse a page and icon pair received by identifier
pub fn parse_page_ref(page: &str, icon: &str) -> Result<(PageKind, Icon)> {
    Ok((page.parse()?, icon.parse()?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Landing page with the explore shortcuts (Beranda)
    Home,
    /// Popular destinations (Wisata)
    Tourism,
    /// Betawi cuisine (Kuliner)
    Food,
    /// MRT, TransJakarta, LRT (Transportasi)
    Transport,
    /// City history (Sejarah)
    History,
    /// Photo collection with lightbox (Galeri)
    Gallery,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Home,
        PageKind::Tourism,
        PageKind::Food,
        PageKind::Transport,
        PageKind::History,
        PageKind::Gallery,
    ];

    /// Glyph shown for this page when the caller doesn't pick one
    pub fn default_icon(&self) -> Icon {
        match self {
            PageKind::Home => Icon::Home,
            PageKind::Tourism => Icon::Landmark,
            PageKind::Food => Icon::Utensils,
            PageKind::Transport => Icon::Train,
            PageKind::History => Icon::Scroll,
            PageKind::Gallery => Icon::Images,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Tourism => "tourism",
            PageKind::Food => "food",
            PageKind::Transport => "transport",
            PageKind::History => "history",
            PageKind::Gallery => "gallery",
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PageKind {
    type Err = TabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(PageKind::Home),
            "tourism" => Ok(PageKind::Tourism),
            "food" => Ok(PageKind::Food),
            "transport" => Ok(PageKind::Transport),
            "history" => Ok(PageKind::History),
            "gallery" => Ok(PageKind::Gallery),
            _ => Err(TabError::UnknownPage(s.to_string())),
        }
    }
}

/// Display glyph for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Landmark,
    Utensils,
    Train,
    Scroll,
    Images,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Landmark => "landmark",
            Icon::Utensils => "utensils",
            Icon::Train => "train",
            Icon::Scroll => "scroll",
            Icon::Images => "images",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Icon {
    type Err = TabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Icon::Home),
            "landmark" => Ok(Icon::Landmark),
            "utensils" => Ok(Icon::Utensils),
            "train" => Ok(Icon::Train),
            "scroll" => Ok(Icon::Scroll),
            "images" => Ok(Icon::Images),
            _ => Err(TabError::UnknownIcon(s.to_string())),
        }
    }
}
