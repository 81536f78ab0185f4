//! Jelajah Jakarta Core
//!
//! Host layer for the multi-tab browser. Owns the tab session and turns it
//! into view models for the tab bar and content pane. Rendering itself
//! happens elsewhere.

mod browser;
mod config;
mod error;
mod pages;
mod sound;
mod view;

pub use browser::Browser;
pub use config::Config;
pub use error::CoreError;
pub use pages::{PageDescriptor, PageRegistry};
pub use sound::{NullSink, RecordingSink, SoundCue, SoundManager, SoundSink};
pub use view::{ContentView, TabBarItem, TabBarView};

// Re-export core components
pub use jelajah_session::{
    SessionSnapshot, SessionStore, SubscriptionId, TabSession, WeakSessionStore,
};
pub use jelajah_tabs::{parse_page_ref, Icon, PageKind, Tab, TabError, TabId};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
