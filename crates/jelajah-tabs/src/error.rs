//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
}
