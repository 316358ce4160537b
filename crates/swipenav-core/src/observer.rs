#![forbid(unsafe_code)]

//! Position-change notifications and the navigator capability.
//!
//! Two directions of dispatch:
//!
//! - **Outbound**: the controller calls [`SwipeObserver`]s registered with
//!   [`SwipeController::add_observer`](crate::controller::SwipeController::add_observer).
//! - **Inbound**: embedded views drive the controller through
//!   [`ContainerNavigator`], which the controller implements.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::position::Position;

/// Receives position-change notifications.
pub trait SwipeObserver {
    /// Called synchronously before the commit transition starts.
    fn will_show(&mut self, position: Position) {
        let _ = position;
    }

    /// Called once the commit transition has completed.
    ///
    /// A drag during the transition does not cancel it, so this can fire
    /// after the offset has already moved off `position`. Check
    /// `SwipeController::is_active` when the current state matters.
    fn did_show(&mut self, position: Position) {
        let _ = position;
    }
}

/// Commands and queries available to views embedded in the container.
pub trait ContainerNavigator {
    /// Whether `position` is the currently shown container.
    fn is_container_active(&self, position: Position) -> Result<bool>;

    /// Show the container at `position`.
    fn show_container(&mut self, position: Position) -> Result<()>;

    /// Dismiss the current peripheral and return to center.
    fn done(&mut self) -> Result<()> {
        self.show_container(Position::Center)
    }
}

/// Handle returned by observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", content = "position", rename_all = "snake_case"))]
pub enum PositionEvent {
    WillShow(Position),
    DidShow(Position),
}

/// Ordered set of registered observers.
#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn SwipeObserver>)>,
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl ObserverList {
    pub(crate) fn add(&mut self, observer: Box<dyn SwipeObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> Option<Box<dyn SwipeObserver>> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, event: PositionEvent) {
        for (_, observer) in &mut self.entries {
            match event {
                PositionEvent::WillShow(p) => observer.will_show(p),
                PositionEvent::DidShow(p) => observer.did_show(p),
            }
        }
    }
}

/// A shareable observer that records every notification in order.
///
/// Clones share the same log, so one clone can be registered with the
/// controller while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<PositionEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<PositionEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return the recorded events.
    pub fn take(&self) -> Vec<PositionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl SwipeObserver for EventLog {
    fn will_show(&mut self, position: Position) {
        self.events
            .borrow_mut()
            .push(PositionEvent::WillShow(position));
    }

    fn did_show(&mut self, position: Position) {
        self.events
            .borrow_mut()
            .push(PositionEvent::DidShow(position));
    }
}
