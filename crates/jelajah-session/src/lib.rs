//! Jelajah Jakarta Session Management
//!
//! - A session is the ordered set of open tabs plus the active one
//! - Sessions live only as long as the page instance; nothing is persisted
//! - After initialization there is always at least one tab
//! - Unknown tab ids passed to switch/close are ignored

mod session;
mod store;

pub use session::{SessionSnapshot, TabSession, DEFAULT_HOME_TITLE};
pub use store::{SessionStore, SubscriptionId, WeakSessionStore};
