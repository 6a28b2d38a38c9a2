//! Gesture error types

use thiserror::Error;

/// Failures a host view can report while running a gesture
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// The view was detached or reset while the gesture was being dispatched,
    /// leaving internal references unset
    #[error("view detached while dispatching gesture")]
    DetachedView,

    /// Any other host failure
    #[error("host gesture failed: {0}")]
    Host(String),
}

/// Result type for gesture operations
pub type Result<T> = std::result::Result<T, GestureError>;
