#![forbid(unsafe_code)]

//! Replay harness for SwipeNav.
//!
//! Gesture sessions recorded from a host (or written by hand) are stored as
//! JSONL traces and replayed against [`swipenav_core::SwipeController`]. The
//! resulting [`ReplayReport`] is the regression fixture: notification order,
//! commits and the final offset.
//!
//! ```
//! use swipenav_core::{Position, SwipeConfig};
//! use swipenav_harness::replay_trace;
//!
//! let trace = r#"
//! {"step":"layout","width":320.0,"height":568.0}
//! {"step":"attach","position":"right"}
//! {"step":"began"}
//! {"step":"changed","dx":-300.0,"dy":0.0}
//! {"step":"ended"}
//! {"step":"tick","ms":200}
//! "#;
//! let report = replay_trace(trace, SwipeConfig::default())?;
//! assert_eq!(report.active_position, Some(Position::Right));
//! # Ok::<(), swipenav_harness::ReplayError>(())
//! ```

pub mod cli;
pub mod error;
pub mod replay;
pub mod trace;

pub use error::{ReplayError, Result};
pub use replay::{Commit, Notification, ReplayReport, replay_file, replay_lines, replay_trace};
pub use trace::{Step, TraceLine, parse_trace, to_jsonl};
