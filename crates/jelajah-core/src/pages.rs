//! Page registry
//!
//! Resolves a page kind to what the renderer needs to mount it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use jelajah_tabs::{Icon, PageKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub kind: PageKind,
    /// Tab title used when the page is opened
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Icon,
}

impl PageDescriptor {
    fn new(kind: PageKind, title: &str, subtitle: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            icon: kind.default_icon(),
        }
    }

    /// Descriptor for a page missing from the registry
    pub(crate) fn bare(kind: PageKind) -> Self {
        Self::new(kind, kind.as_str(), "", "")
    }
}

#[derive(Debug, Clone)]
pub struct PageRegistry {
    pages: HashMap<PageKind, PageDescriptor>,
}

impl PageRegistry {
    /// Registry for the Jakarta site
    pub fn jakarta() -> Self {
        let pages = [
            PageDescriptor::new(
                PageKind::Home,
                "Beranda",
                "Jelajah Jakarta",
                "Pintu masuk ke seluruh panduan kota",
            ),
            PageDescriptor::new(
                PageKind::Tourism,
                "Wisata",
                "Destinasi populer kota",
                "Jelajahi tempat-tempat menarik di Jakarta",
            ),
            PageDescriptor::new(
                PageKind::Food,
                "Kuliner",
                "Cita rasa Betawi",
                "Nikmati kelezatan masakan khas Jakarta",
            ),
            PageDescriptor::new(
                PageKind::Transport,
                "Transportasi",
                "MRT, TransJakarta, LRT",
                "Sistem transportasi modern Jakarta",
            ),
            PageDescriptor::new(
                PageKind::History,
                "Sejarah",
                "Perjalanan panjang kota",
                "Kenali sejarah dan perkembangan Jakarta",
            ),
            PageDescriptor::new(
                PageKind::Gallery,
                "Galeri",
                "Koleksi foto Jakarta",
                "Kumpulan foto-foto indah Jakarta",
            ),
        ];

        Self {
            pages: pages.into_iter().map(|p| (p.kind, p)).collect(),
        }
    }

    pub fn get(&self, kind: PageKind) -> Option<&PageDescriptor> {
        self.pages.get(&kind)
    }

    /// Explore shortcuts listed on the home page, in display order
    pub fn shortcuts(&self) -> Vec<&PageDescriptor> {
        PageKind::ALL
            .iter()
            .filter(|kind| **kind != PageKind::Home)
            .filter_map(|kind| self.pages.get(kind))
            .collect()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::jakarta()
    }
}
