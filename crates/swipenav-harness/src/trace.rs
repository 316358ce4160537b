#![forbid(unsafe_code)]

//! JSONL gesture traces.
//!
//! One [`Step`] per line, tagged by `"step"`:
//!
//! ```text
//! {"step":"layout","width":320.0,"height":568.0}
//! {"step":"attach","position":"left"}
//! {"step":"began"}
//! {"step":"changed","dx":120.0,"dy":3.0}
//! {"step":"ended"}
//! {"step":"tick","ms":200}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Line numbers in
//! errors and reports are 1-based and count every physical line.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use swipenav_core::{PanEvent, Position, Size};

use crate::error::{ReplayError, Result};

/// One recorded host interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Frame size reported by the host.
    Layout { width: f64, height: f64 },
    /// A peripheral view was attached.
    Attach { position: Position },
    /// A peripheral view was detached.
    Detach { position: Position },
    /// Pan gesture started.
    Began,
    /// Incremental pan translation since the previous report.
    Changed { dx: f64, dy: f64 },
    /// Pan gesture finished.
    Ended,
    /// Direct navigation.
    Show { position: Position },
    /// Animation clock advanced.
    Tick { ms: u64 },
}

impl Step {
    /// Frame size for a `layout` step.
    pub fn frame(&self) -> Option<Size> {
        match *self {
            Step::Layout { width, height } => Some(Size::new(width, height)),
            _ => None,
        }
    }
}

impl From<PanEvent> for Step {
    fn from(event: PanEvent) -> Self {
        match event {
            PanEvent::Began => Step::Began,
            PanEvent::Changed(v) => Step::Changed { dx: v.dx, dy: v.dy },
            PanEvent::Ended => Step::Ended,
        }
    }
}

/// A parsed step with its source line number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLine {
    pub line: usize,
    pub step: Step,
}

/// Parse a JSONL trace.
pub fn parse_trace(input: &str) -> Result<Vec<TraceLine>> {
    let mut steps = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let line = idx + 1;
        let step = serde_json::from_str(text).map_err(|source| ReplayError::Parse { line, source })?;
        steps.push(TraceLine { line, step });
    }
    Ok(steps)
}

/// Serialize steps as JSONL, one per line with a trailing newline.
pub fn to_jsonl(steps: &[Step]) -> Result<String> {
    let mut out = String::new();
    for step in steps {
        let json = serde_json::to_string(step).map_err(ReplayError::Encode)?;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{json}");
    }
    Ok(out)
}

/// Build the steps for a full pan: begin, each translation, end.
pub fn pan(translations: &[(f64, f64)]) -> Vec<Step> {
    std::iter::once(Step::Began)
        .chain(
            translations
                .iter()
                .map(|&(dx, dy)| Step::Changed { dx, dy }),
        )
        .chain(std::iter::once(Step::Ended))
        .collect()
}
