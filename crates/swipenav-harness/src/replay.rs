#![forbid(unsafe_code)]

//! Deterministic trace replay.
//!
//! A trace is fed step by step into a fresh [`SwipeController`]. Every
//! observer notification and every commit is recorded against the trace
//! line that caused it, so two runs of the same trace with the same
//! configuration produce identical reports.
//!
//! # Failure Modes
//!
//! - A step the controller rejects (pan or show before the first layout,
//!   show of a detached peripheral, detaching center, invalid frame) stops
//!   the replay with [`ReplayError::Step`] naming the line.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use swipenav_core::{
    EventLog, PanEvent, Position, PositionEvent, Size, SwipeConfig, SwipeController, Vector,
};

use crate::error::{ReplayError, Result};
use crate::trace::{Step, TraceLine, parse_trace};

/// An observer notification and the trace line that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    WillShow { line: usize, position: Position },
    DidShow { line: usize, position: Position },
}

impl Notification {
    fn new(line: usize, event: PositionEvent) -> Self {
        match event {
            PositionEvent::WillShow(position) => Self::WillShow { line, position },
            PositionEvent::DidShow(position) => Self::DidShow { line, position },
        }
    }

    pub fn line(&self) -> usize {
        match *self {
            Self::WillShow { line, .. } | Self::DidShow { line, .. } => line,
        }
    }

    pub fn position(&self) -> Position {
        match *self {
            Self::WillShow { position, .. } | Self::DidShow { position, .. } => position,
        }
    }

    /// The notification without its line number.
    pub fn event(&self) -> PositionEvent {
        match *self {
            Self::WillShow { position, .. } => PositionEvent::WillShow(position),
            Self::DidShow { position, .. } => PositionEvent::DidShow(position),
        }
    }
}

/// A position committed by a pan end or a show step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub line: usize,
    pub position: Position,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Number of steps applied.
    pub steps: usize,
    /// Last reported frame size, if any.
    pub frame: Option<Size>,
    pub commits: Vec<Commit>,
    pub notifications: Vec<Notification>,
    /// Authoritative offset after the last step; `None` if never laid out.
    pub final_offset: Option<Vector>,
    /// Offset being drawn after the last step.
    pub presented_offset: Option<Vector>,
    pub active_position: Option<Position>,
    /// Whether a commit transition was still running at the end.
    pub animating: bool,
}

impl ReplayReport {
    /// Notifications with line numbers stripped.
    pub fn events(&self) -> Vec<PositionEvent> {
        self.notifications.iter().map(Notification::event).collect()
    }

    /// Positions that received `did_show`, in order.
    pub fn shown(&self) -> Vec<Position> {
        self.notifications
            .iter()
            .filter(|n| matches!(n, Notification::DidShow { .. }))
            .map(Notification::position)
            .collect()
    }
}

/// Parse and replay a JSONL trace.
pub fn replay_trace(input: &str, config: SwipeConfig) -> Result<ReplayReport> {
    let lines = parse_trace(input)?;
    replay_lines(&lines, config)
}

/// Read a trace file and replay it.
pub fn replay_file(path: &Path, config: SwipeConfig) -> Result<ReplayReport> {
    let input = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    replay_trace(&input, config)
}

/// Replay already-parsed steps.
pub fn replay_lines(lines: &[TraceLine], config: SwipeConfig) -> Result<ReplayReport> {
    let mut nav = SwipeController::new(config)?;
    let log = EventLog::new();
    nav.add_observer(log.clone());

    let mut report = ReplayReport::default();
    for &TraceLine { line, step } in lines {
        tracing::trace!(line, ?step, "replaying step");
        let committed = apply(&mut nav, step).map_err(|source| {
            tracing::warn!(line, error = %source, "step rejected");
            ReplayError::Step { line, source }
        })?;
        if let Some(position) = committed {
            report.commits.push(Commit { line, position });
        }
        if let Some(frame) = step.frame() {
            report.frame = Some(frame);
        }
        report
            .notifications
            .extend(log.take().into_iter().map(|event| Notification::new(line, event)));
        report.steps += 1;
    }

    report.final_offset = nav.current_offset().ok();
    report.presented_offset = nav.presented_offset().ok();
    report.active_position = nav.active_position().ok().flatten();
    report.animating = nav.is_animating();

    tracing::info!(
        steps = report.steps,
        commits = report.commits.len(),
        notifications = report.notifications.len(),
        active = ?report.active_position,
        "replay finished"
    );
    Ok(report)
}

fn apply(nav: &mut SwipeController, step: Step) -> swipenav_core::Result<Option<Position>> {
    match step {
        Step::Layout { width, height } => nav.layout(Size::new(width, height)).map(|()| None),
        Step::Attach { position } => nav.attach(position).map(|()| None),
        Step::Detach { position } => nav.detach(position).map(|()| None),
        Step::Began => nav.handle_pan(PanEvent::Began),
        Step::Changed { dx, dy } => nav.handle_pan(PanEvent::Changed(Vector::new(dx, dy))),
        Step::Ended => nav.handle_pan(PanEvent::Ended),
        Step::Show { position } => nav.show_position(position).map(|()| Some(position)),
        Step::Tick { ms } => {
            nav.tick(Duration::from_millis(ms));
            Ok(None)
        }
    }
}
