//! Jelajah Jakarta Tab Records
//!
//! A tab pairs a display label and glyph with a reference to one of the
//! site's pages. Tabs never own page state; the page kind is resolved to a
//! renderer by the presentation layer.

mod error;
mod page;
mod tab;

pub use error::TabError;
pub use page::{parse_page_ref, Icon, PageKind};
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
