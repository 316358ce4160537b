#![forbid(unsafe_code)]

//! Core: pan-gesture layout state machine for swipe navigation containers.
//!
//! # Role in SwipeNav
//! `swipenav-core` holds all logic of a container that shows one center view
//! and up to four peripheral views (top, bottom, left, right). The user pans
//! between them; the layout snaps to the nearest one with a short animated
//! transition.
//!
//! # Primary responsibilities
//! - **OffsetRegistry**: the five target offsets derived from the frame size.
//! - **PanTracker**: axis locking, clamping and inertia tracking per gesture.
//! - **SnapPolicy**: threshold-based choice of the commit target.
//! - **SwipeController**: the authoritative offset, commits, transitions and
//!   observer notifications.
//!
//! # How it fits in the system
//! The host toolkit owns views, rendering and gesture recognition. It reports
//! the frame size, attach/detach of peripheral views and pan events, ticks
//! the animation clock, and positions the center container at
//! [`SwipeController::presented_offset`]. Everything else happens here.
//!
//! ```
//! use std::time::Duration;
//! use swipenav_core::{PanEvent, PeripheralSet, Position, Size, SwipeConfig, SwipeController, Vector};
//!
//! let config = SwipeConfig::default().with_attached(PeripheralSet::LEFT);
//! let mut nav = SwipeController::new(config)?;
//! nav.layout(Size::new(320.0, 568.0))?;
//!
//! nav.handle_pan(PanEvent::Began)?;
//! nav.handle_pan(PanEvent::Changed(Vector::new(280.0, 4.0)))?;
//! assert_eq!(nav.handle_pan(PanEvent::Ended)?, Some(Position::Left));
//!
//! nav.tick(Duration::from_millis(200));
//! assert!(nav.is_active(Position::Left)?);
//! # Ok::<(), swipenav_core::SwipeError>(())
//! ```

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod observer;
pub mod offsets;
pub mod position;
pub mod snap;

pub use animation::{Animation, Easing, Transition};
pub use config::SwipeConfig;
pub use controller::SwipeController;
pub use error::{Result, SwipeError};
pub use geometry::{Size, Vector};
pub use gesture::{GestureState, PanAxis, PanEvent, PanTracker};
pub use observer::{ContainerNavigator, EventLog, ObserverId, PositionEvent, SwipeObserver};
pub use offsets::OffsetRegistry;
pub use position::{Axis, PeripheralSet, Position};
pub use snap::SnapPolicy;
