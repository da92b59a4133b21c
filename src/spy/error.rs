//! Scroll-spy errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpyError {
    #[error("navigation element `#{id}` not found")]
    MissingNavigation { id: String },

    #[error("navigation element `#{id}` has no usable offset ({offset})")]
    InvalidOffset { id: String, offset: f64 },

    #[error("`#{id}` is not a link inside `#{nav}`")]
    UnknownLink { id: String, nav: String },
}
