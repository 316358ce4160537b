#![forbid(unsafe_code)]

//! Error type for the swipe layout controller.

use crate::position::Position;

/// Errors returned by [`SwipeController`](crate::controller::SwipeController)
/// and [`SwipeConfig`](crate::config::SwipeConfig) validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwipeError {
    /// An offset-dependent operation was called before the first layout pass.
    #[error("controller has not been laid out yet")]
    NotReady,
    /// The host reported a frame that cannot produce offsets.
    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: f64, height: f64 },
    /// Commit to a peripheral position that has no attached view.
    #[error("no view attached at position {0}")]
    PositionDetached(Position),
    /// The center view is required and cannot be detached.
    #[error("the center view cannot be detached")]
    CenterRequired,
    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Standard result type for swipenav APIs.
pub type Result<T> = std::result::Result<T, SwipeError>;
