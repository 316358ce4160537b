#![forbid(unsafe_code)]

//! Swipe layout controller: one center view, up to four peripherals.
//!
//! [`SwipeController`] owns the authoritative current offset of the center
//! container and every rule that moves it:
//!
//! - pan events are fed through [`handle_pan`](SwipeController::handle_pan);
//! - direct navigation (buttons, embedded views) goes through
//!   [`show_position`](SwipeController::show_position);
//! - the host advances the commit animation with
//!   [`tick`](SwipeController::tick) and draws
//!   [`presented_offset`](SwipeController::presented_offset).
//!
//! # Lifecycle
//!
//! The controller is created uninitialized. The first
//! [`layout`](SwipeController::layout) computes the offset registry and makes
//! it ready; until then every offset-dependent call returns
//! [`SwipeError::NotReady`]. Later layouts with a different frame size
//! rebuild the registry and rebase the current offset onto it.
//!
//! # Invariants
//!
//! 1. `current_offset()` changes only through a pan `Changed`, a commit, or a
//!    rebase after resize.
//! 2. A commit sets the current offset to the exact target, so
//!    `is_active(p)` holds immediately after committing `p`.
//! 3. `will_show(p)` precedes `did_show(p)`; a commit superseded before its
//!    transition completes never gets `did_show`.
//! 4. Gesture-driven commits never target a detached peripheral.

use std::time::Duration;

use crate::animation::{Animation, Transition};
use crate::config::SwipeConfig;
use crate::error::{Result, SwipeError};
use crate::geometry::{Size, Vector};
use crate::gesture::{GestureState, PanEvent, PanTracker};
use crate::observer::{ContainerNavigator, ObserverId, ObserverList, PositionEvent, SwipeObserver};
use crate::offsets::OffsetRegistry;
use crate::position::{PeripheralSet, Position};
use crate::snap::SnapPolicy;

/// Laid-out state, available once the frame size is known.
#[derive(Debug, Clone, Copy)]
struct Layout {
    registry: OffsetRegistry,
    current: Vector,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Uninitialized,
    Ready(Layout),
}

/// A commit whose transition is still running.
#[derive(Debug, Clone)]
struct PendingCommit {
    position: Position,
    transition: Transition,
}

/// Swipe navigation state machine.
#[derive(Debug)]
pub struct SwipeController {
    config: SwipeConfig,
    policy: SnapPolicy,
    phase: Phase,
    attached: PeripheralSet,
    tracker: PanTracker,
    pending: Option<PendingCommit>,
    observers: ObserverList,
}

impl SwipeController {
    /// Create an uninitialized controller.
    pub fn new(config: SwipeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            policy: config.snap_policy(),
            attached: config.attached,
            config,
            phase: Phase::Uninitialized,
            tracker: PanTracker::new(),
            pending: None,
            observers: ObserverList::default(),
        })
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Thresholds and transition settings take effect for the next gesture
    /// end or commit. The attached set is left as it is; use
    /// [`set_attached`](Self::set_attached) to change it.
    pub fn set_config(&mut self, config: SwipeConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "rejected swipe configuration");
            return Err(err);
        }
        self.policy = config.snap_policy();
        self.config = config;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Report the container frame size.
    ///
    /// The first call makes the controller ready with the offset at center.
    /// A later call with a different size rebuilds the registry and rebases
    /// the current offset (and any in-flight transition) proportionally.
    pub fn layout(&mut self, frame: Size) -> Result<()> {
        let next = OffsetRegistry::compute(frame)?;
        if let Phase::Ready(layout) = &mut self.phase {
            if layout.registry.frame() == frame {
                return Ok(());
            }
            let previous = layout.registry;
            layout.current = previous.rebase(layout.current, &next);
            layout.registry = next;
            if let Some(pending) = &mut self.pending {
                pending.transition.remap(|v| previous.rebase(v, &next));
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(
                width = frame.width,
                height = frame.height,
                dx = layout.current.dx,
                dy = layout.current.dy,
                "offsets recomputed after resize"
            );
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(width = frame.width, height = frame.height, "offsets computed");
        self.phase = Phase::Ready(Layout {
            registry: next,
            current: next.offset(Position::Center),
        });
        Ok(())
    }

    /// Whether the first layout has happened.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// The offset registry for the current frame size.
    pub fn registry(&self) -> Result<&OffsetRegistry> {
        self.ready().map(|layout| &layout.registry)
    }

    fn ready(&self) -> Result<&Layout> {
        match &self.phase {
            Phase::Ready(layout) => Ok(layout),
            Phase::Uninitialized => Err(SwipeError::NotReady),
        }
    }

    fn ready_mut(&mut self) -> Result<&mut Layout> {
        match &mut self.phase {
            Phase::Ready(layout) => Ok(layout),
            Phase::Uninitialized => Err(SwipeError::NotReady),
        }
    }

    // ------------------------------------------------------------------
    // Attachment
    // ------------------------------------------------------------------

    /// Peripherals that currently have an attached view.
    #[inline]
    pub fn attached(&self) -> PeripheralSet {
        self.attached
    }

    /// Record that a view was attached at `position`.
    pub fn attach(&mut self, position: Position) -> Result<()> {
        self.set_attached(position, true)
    }

    /// Record that the view at `position` was detached.
    pub fn detach(&mut self, position: Position) -> Result<()> {
        self.set_attached(position, false)
    }

    /// Set the attachment flag for `position`.
    ///
    /// The center view is always attached; detaching it is an error and
    /// attaching it is a no-op.
    pub fn set_attached(&mut self, position: Position, attached: bool) -> Result<()> {
        let Some(flag) = position.flag() else {
            return if attached {
                Ok(())
            } else {
                Err(SwipeError::CenterRequired)
            };
        };
        self.attached.set(flag, attached);
        #[cfg(feature = "tracing")]
        tracing::trace!(%position, attached, "peripheral attachment changed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The authoritative offset of the center container.
    pub fn current_offset(&self) -> Result<Vector> {
        self.ready().map(|layout| layout.current)
    }

    /// The offset to draw now: the in-flight transition's interpolated value,
    /// or the current offset when nothing is animating.
    pub fn presented_offset(&self) -> Result<Vector> {
        let current = self.current_offset()?;
        Ok(self
            .pending
            .as_ref()
            .map_or(current, |pending| pending.transition.offset()))
    }

    /// Whether the current offset exactly equals `position`'s target.
    pub fn is_active(&self, position: Position) -> Result<bool> {
        let layout = self.ready()?;
        Ok(layout.current == layout.registry.offset(position))
    }

    /// The position whose target the current offset sits on, if any.
    pub fn active_position(&self) -> Result<Option<Position>> {
        let layout = self.ready()?;
        Ok(layout.registry.position_at(layout.current))
    }

    /// Current gesture phase.
    #[inline]
    pub fn gesture_state(&self) -> GestureState {
        self.tracker.state()
    }

    /// Whether a commit transition is running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Position of the running commit transition, if any.
    pub fn pending_position(&self) -> Option<Position> {
        self.pending.as_ref().map(|pending| pending.position)
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: impl SwipeObserver + 'static) -> ObserverId {
        self.observers.add(Box::new(observer))
    }

    /// Unregister an observer, returning it if it was registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn SwipeObserver>> {
        self.observers.remove(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Feed one pan event.
    ///
    /// Returns the committed position when `Ended` produced a commit.
    pub fn handle_pan(&mut self, event: PanEvent) -> Result<Option<Position>> {
        let layout = *self.ready()?;
        match event {
            PanEvent::Began => {
                let _axis = self.tracker.begin(&layout.registry, layout.current);
                #[cfg(feature = "tracing")]
                tracing::debug!(axis = ?_axis, "pan began");
                Ok(None)
            }
            PanEvent::Changed(translation) => {
                #[cfg(feature = "tracing")]
                let was_undefined = self.tracker.state() == GestureState::DraggingUndefined;
                let next = self.tracker.change(
                    translation,
                    &layout.registry,
                    self.attached,
                    layout.current,
                );
                #[cfg(feature = "tracing")]
                if was_undefined && self.tracker.state() != GestureState::DraggingUndefined {
                    tracing::debug!(axis = ?self.tracker.axis(), "pan axis resolved");
                }
                self.ready_mut()?.current = next;
                if let Some(pending) = &mut self.pending {
                    pending.transition.shift_target(next);
                }
                Ok(None)
            }
            PanEvent::Ended => {
                let Some(target) =
                    self.tracker
                        .end(&layout.registry, layout.current, &self.policy)
                else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("pan ended without commit");
                    return Ok(None);
                };
                let target = if self.attached.allows(target) {
                    target
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%target, "snap target detached, returning to center");
                    Position::Center
                };
                #[cfg(feature = "tracing")]
                tracing::debug!(%target, "pan snapped");
                self.commit(target)?;
                Ok(Some(target))
            }
        }
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    /// Navigate to `position` with an animated transition.
    ///
    /// Fires `will_show` immediately and `did_show` when the transition
    /// completes, even if `position` is already active. Fails with
    /// [`SwipeError::PositionDetached`] for a peripheral without a view.
    ///
    /// A gesture in progress is cancelled; its remaining events are ignored
    /// until the next `Began`.
    pub fn show_position(&mut self, position: Position) -> Result<()> {
        self.ready()?;
        if !self.attached.allows(position) {
            return Err(SwipeError::PositionDetached(position));
        }
        if self.tracker.is_active() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%position, "direct navigation cancels pan");
            self.tracker.reset();
        }
        self.commit(position)
    }

    fn commit(&mut self, position: Position) -> Result<()> {
        let presented = self.presented_offset()?;
        let layout = self.ready_mut()?;
        let target = layout.registry.offset(position);
        layout.current = target;

        #[cfg(feature = "tracing")]
        tracing::info!(%position, dx = target.dx, dy = target.dy, "showing position");
        self.observers.notify(PositionEvent::WillShow(position));

        // A running transition is replaced, not resumed: the new one starts
        // from the presented point with the current duration and easing.
        #[cfg(feature = "tracing")]
        if let Some(superseded) = &self.pending {
            tracing::debug!(superseded = %superseded.position, %position, "replacing transition");
        }
        self.pending = None;
        let transition = Transition::new(presented, target, self.config.transition_duration)
            .easing(self.config.easing);

        if transition.is_complete() {
            self.finish(position);
        } else {
            self.pending = Some(PendingCommit {
                position,
                transition,
            });
        }
        Ok(())
    }

    /// Advance the commit transition by `dt`.
    ///
    /// Returns the position whose transition completed during this tick.
    pub fn tick(&mut self, dt: Duration) -> Option<Position> {
        let pending = self.pending.as_mut()?;
        pending.transition.tick(dt);
        if !pending.transition.is_complete() {
            return None;
        }
        let position = pending.position;
        self.pending = None;
        self.finish(position);
        Some(position)
    }

    fn finish(&mut self, position: Position) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%position, "transition finished");
        self.observers.notify(PositionEvent::DidShow(position));
    }
}

impl ContainerNavigator for SwipeController {
    fn is_container_active(&self, position: Position) -> Result<bool> {
        self.is_active(position)
    }

    fn show_container(&mut self, position: Position) -> Result<()> {
        self.show_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::observer::EventLog;

    const FRAME: Size = Size::new(300.0, 600.0);
    const MS_100: Duration = Duration::from_millis(100);
    const MS_200: Duration = Duration::from_millis(200);

    fn ready() -> SwipeController {
        let mut c = SwipeController::new(SwipeConfig::default().with_attached(PeripheralSet::all()))
            .unwrap();
        c.layout(FRAME).unwrap();
        c
    }

    fn drag(c: &mut SwipeController, steps: &[(f64, f64)]) -> Option<Position> {
        c.handle_pan(PanEvent::Began).unwrap();
        for &(dx, dy) in steps {
            c.handle_pan(PanEvent::Changed(Vector::new(dx, dy))).unwrap();
        }
        c.handle_pan(PanEvent::Ended).unwrap()
    }

    // --- Lifecycle ---

    #[test]
    fn not_ready_before_layout() {
        let mut c = SwipeController::new(SwipeConfig::default()).unwrap();
        assert!(!c.is_ready());
        assert_eq!(c.is_active(Position::Center), Err(SwipeError::NotReady));
        assert_eq!(c.current_offset(), Err(SwipeError::NotReady));
        assert_eq!(c.handle_pan(PanEvent::Began), Err(SwipeError::NotReady));
        assert_eq!(c.show_position(Position::Center), Err(SwipeError::NotReady));
        assert!(c.registry().is_err());
    }

    #[test]
    fn first_layout_starts_at_center() {
        let c = ready();
        assert!(c.is_ready());
        assert_eq!(c.current_offset(), Ok(Vector::ZERO));
        assert_eq!(c.active_position(), Ok(Some(Position::Center)));
    }

    #[test]
    fn invalid_config_rejected() {
        let err = SwipeController::new(SwipeConfig::default().with_snap_fraction(0.9)).unwrap_err();
        assert!(matches!(err, SwipeError::InvalidConfig(_)));
    }

    #[test]
    fn set_config_revalidates() {
        let mut c = ready();
        assert!(c.set_config(SwipeConfig::default().with_snap_fraction(-1.0)).is_err());
        assert_eq!(c.config().horizontal_snap_fraction, 0.15);
        c.set_config(SwipeConfig::default().with_snap_fraction(0.4))
            .unwrap();
        assert_eq!(c.config().vertical_snap_fraction, 0.4);
        // Attachment is not reset by a config change.
        assert_eq!(c.attached(), PeripheralSet::all());
    }

    #[test]
    fn invalid_frame_rejected() {
        let mut c = SwipeController::new(SwipeConfig::default()).unwrap();
        assert!(matches!(
            c.layout(Size::new(0.0, 10.0)),
            Err(SwipeError::InvalidFrameSize { .. })
        ));
        assert!(!c.is_ready());
    }

    #[test]
    fn resize_keeps_active_position() {
        let mut c = ready();
        c.show_position(Position::Left).unwrap();
        c.layout(Size::new(600.0, 300.0)).unwrap();
        assert_eq!(c.is_active(Position::Left), Ok(true));
        assert_eq!(c.current_offset(), Ok(Vector::horizontal(600.0)));
    }

    #[test]
    fn resize_rebases_intermediate_offset() {
        let mut c = ready();
        c.handle_pan(PanEvent::Began).unwrap();
        c.handle_pan(PanEvent::Changed(Vector::vertical(-150.0)))
            .unwrap();
        c.layout(Size::new(300.0, 1200.0)).unwrap();
        assert_eq!(c.current_offset(), Ok(Vector::vertical(-300.0)));
    }

    #[test]
    fn same_size_layout_is_noop() {
        let mut c = ready();
        c.show_position(Position::Top).unwrap();
        c.layout(FRAME).unwrap();
        assert!(c.is_animating());
        assert_eq!(c.is_active(Position::Top), Ok(true));
    }

    // --- Attachment ---

    #[test]
    fn center_cannot_be_detached() {
        let mut c = ready();
        assert_eq!(c.detach(Position::Center), Err(SwipeError::CenterRequired));
        assert_eq!(c.attach(Position::Center), Ok(()));
    }

    #[test]
    fn detached_commit_fails_fast() {
        let mut c = ready();
        c.detach(Position::Bottom).unwrap();
        let log = EventLog::new();
        c.add_observer(log.clone());
        assert_eq!(
            c.show_position(Position::Bottom),
            Err(SwipeError::PositionDetached(Position::Bottom))
        );
        assert!(log.is_empty());
        assert_eq!(c.is_active(Position::Center), Ok(true));
    }

    // --- Commit ---

    #[test]
    fn show_position_notifies_around_transition() {
        let mut c = ready();
        let log = EventLog::new();
        c.add_observer(log.clone());

        c.show_position(Position::Top).unwrap();
        assert_eq!(log.events(), [PositionEvent::WillShow(Position::Top)]);
        assert_eq!(c.is_active(Position::Top), Ok(true));
        assert!(c.is_animating());
        assert_eq!(c.presented_offset(), Ok(Vector::ZERO));

        assert_eq!(c.tick(MS_100), None);
        assert_eq!(c.tick(MS_100), Some(Position::Top));
        assert_eq!(
            log.events(),
            [
                PositionEvent::WillShow(Position::Top),
                PositionEvent::DidShow(Position::Top)
            ]
        );
        assert_eq!(c.presented_offset(), Ok(Vector::vertical(600.0)));
        assert!(!c.is_animating());
    }

    #[test]
    fn zero_duration_completes_synchronously() {
        let mut c = SwipeController::new(
            SwipeConfig::default()
                .with_attached(PeripheralSet::all())
                .with_transition_duration(Duration::ZERO),
        )
        .unwrap();
        c.layout(FRAME).unwrap();
        let log = EventLog::new();
        c.add_observer(log.clone());
        c.show_position(Position::Right).unwrap();
        assert_eq!(log.len(), 2);
        assert!(!c.is_animating());
    }

    #[test]
    fn second_commit_replaces_and_drops_first_completion() {
        let mut c = ready();
        let log = EventLog::new();
        c.add_observer(log.clone());

        c.show_position(Position::Left).unwrap();
        c.tick(MS_100);
        c.show_position(Position::Right).unwrap();
        assert_eq!(c.pending_position(), Some(Position::Right));
        assert_eq!(c.is_active(Position::Right), Ok(true));

        assert_eq!(c.tick(MS_200), Some(Position::Right));
        assert_eq!(
            log.events(),
            [
                PositionEvent::WillShow(Position::Left),
                PositionEvent::WillShow(Position::Right),
                PositionEvent::DidShow(Position::Right)
            ]
        );
    }

    #[test]
    fn replacement_commit_uses_current_config() {
        let mut c = ready();
        c.show_position(Position::Left).unwrap();
        c.tick(Duration::from_millis(50));
        c.set_config(
            SwipeConfig::default()
                .with_transition_duration(Duration::from_millis(1000))
                .with_easing(Easing::Linear),
        )
        .unwrap();
        c.show_position(Position::Right).unwrap();

        let start = c.presented_offset().unwrap();
        assert_eq!(c.tick(MS_200), None);
        assert!(c.is_animating());
        // Linear over 1000ms: a fifth of the way from the presented point.
        let expected = start.lerp(Vector::horizontal(-300.0), 0.2);
        assert!((c.presented_offset().unwrap().dx - expected.dx).abs() < 1e-9);
        assert_eq!(c.tick(Duration::from_millis(800)), Some(Position::Right));
    }

    #[test]
    fn tick_without_transition_is_noop() {
        let mut c = ready();
        assert_eq!(c.tick(MS_200), None);
    }

    #[test]
    fn navigator_done_returns_to_center() {
        let mut c = ready();
        c.show_container(Position::Bottom).unwrap();
        assert_eq!(c.is_container_active(Position::Bottom), Ok(true));
        c.done().unwrap();
        assert_eq!(c.is_container_active(Position::Center), Ok(true));
    }

    #[test]
    fn removed_observer_stops_receiving() {
        let mut c = ready();
        let log = EventLog::new();
        let id = c.add_observer(log.clone());
        assert_eq!(c.observer_count(), 1);
        assert!(c.remove_observer(id).is_some());
        c.show_position(Position::Top).unwrap();
        assert!(log.is_empty());
    }

    // --- Gestures ---

    #[test]
    fn drag_past_threshold_commits_left() {
        let mut c = ready();
        assert_eq!(drag(&mut c, &[(200.0, 0.0), (60.0, 0.0)]), Some(Position::Left));
        assert_eq!(c.is_active(Position::Left), Ok(true));
    }

    #[test]
    fn drag_from_peripheral_is_prelocked() {
        let mut c = ready();
        c.show_position(Position::Top).unwrap();
        c.tick(MS_200);
        c.handle_pan(PanEvent::Began).unwrap();
        assert_eq!(c.gesture_state(), GestureState::DraggingVertical);
        // A mostly horizontal move still travels vertically.
        c.handle_pan(PanEvent::Changed(Vector::new(50.0, -20.0)))
            .unwrap();
        assert_eq!(c.current_offset(), Ok(Vector::vertical(580.0)));
        assert_eq!(c.handle_pan(PanEvent::Ended), Ok(Some(Position::Top)));
    }

    #[test]
    fn detached_snap_target_falls_back_to_center() {
        let mut c = ready();
        c.show_position(Position::Right).unwrap();
        c.tick(MS_200);
        c.detach(Position::Right).unwrap();
        // Drag a little toward center: still past center toward right.
        let committed = drag(&mut c, &[(10.0, 0.0), (-5.0, 0.0)]);
        assert_eq!(committed, Some(Position::Center));
        assert_eq!(c.is_active(Position::Center), Ok(true));
    }

    #[test]
    fn unresolved_axis_commits_nothing() {
        let mut c = ready();
        let log = EventLog::new();
        c.add_observer(log.clone());
        assert_eq!(drag(&mut c, &[(0.0, 0.0)]), None);
        assert_eq!(c.current_offset(), Ok(Vector::ZERO));
        assert_eq!(c.gesture_state(), GestureState::Idle);
        assert!(log.is_empty());
        assert!(!c.is_animating());
    }

    #[test]
    fn direct_show_cancels_running_pan() {
        let mut c = ready();
        c.handle_pan(PanEvent::Began).unwrap();
        c.handle_pan(PanEvent::Changed(Vector::horizontal(80.0)))
            .unwrap();
        c.show_position(Position::Top).unwrap();
        assert_eq!(c.gesture_state(), GestureState::Idle);
        c.handle_pan(PanEvent::Changed(Vector::horizontal(40.0)))
            .unwrap();
        assert_eq!(c.handle_pan(PanEvent::Ended), Ok(None));
        assert_eq!(c.current_offset(), Ok(Vector::vertical(600.0)));
    }

    #[test]
    fn non_finite_change_leaves_offset_untouched() {
        let mut c = ready();
        c.handle_pan(PanEvent::Began).unwrap();
        c.handle_pan(PanEvent::Changed(Vector::horizontal(40.0)))
            .unwrap();
        c.handle_pan(PanEvent::Changed(Vector::new(f64::NAN, 0.0)))
            .unwrap();
        assert_eq!(c.current_offset(), Ok(Vector::horizontal(40.0)));
        assert_eq!(c.handle_pan(PanEvent::Ended), Ok(Some(Position::Center)));
        assert_eq!(c.is_active(Position::Center), Ok(true));
    }

    #[test]
    fn did_show_fires_after_drag_moved_offset_away() {
        let mut c = ready();
        let log = EventLog::new();
        c.add_observer(log.clone());
        c.show_position(Position::Left).unwrap();
        c.tick(MS_100);

        c.handle_pan(PanEvent::Began).unwrap();
        c.handle_pan(PanEvent::Changed(Vector::horizontal(-100.0)))
            .unwrap();
        assert_eq!(c.tick(MS_100), Some(Position::Left));
        assert_eq!(log.events().last(), Some(&PositionEvent::DidShow(Position::Left)));
        assert_eq!(c.is_active(Position::Left), Ok(false));
        assert_eq!(c.current_offset(), Ok(Vector::horizontal(200.0)));
    }

    #[test]
    fn drag_during_transition_moves_its_target() {
        let mut c = ready();
        c.show_position(Position::Left).unwrap();
        c.tick(MS_100);
        c.handle_pan(PanEvent::Began).unwrap();
        c.handle_pan(PanEvent::Changed(Vector::horizontal(-100.0)))
            .unwrap();
        assert_eq!(c.current_offset(), Ok(Vector::horizontal(200.0)));
        assert_eq!(c.tick(MS_100), Some(Position::Left));
        assert_eq!(c.presented_offset(), Ok(Vector::horizontal(200.0)));
    }
}
