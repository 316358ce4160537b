use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use swipenav_core::SwipeConfig;

use crate::error::{ReplayError, Result};
use crate::replay::{Notification, ReplayReport, replay_file};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "swipenav-replay",
    about = "Replay a JSONL gesture trace against the swipe controller",
    version
)]
pub struct ReplayArgs {
    /// JSONL trace to replay.
    #[arg(long)]
    pub trace: PathBuf,

    /// JSON file with a controller configuration; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Commit transition duration in milliseconds.
    #[arg(long = "duration-ms")]
    pub duration_ms: Option<u64>,

    /// Snap fraction for both axes.
    #[arg(long)]
    pub fraction: Option<f64>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ReplayArgs {
    /// Build the controller configuration from the config file and flags.
    pub fn swipe_config(&self) -> Result<SwipeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ReplayError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| ReplayError::ConfigFile {
                    path: path.clone(),
                    source,
                })?
            }
            None => SwipeConfig::default(),
        };
        if let Some(ms) = self.duration_ms {
            config = config.with_transition_duration(Duration::from_millis(ms));
        }
        if let Some(fraction) = self.fraction {
            config = config.with_snap_fraction(fraction);
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn run_from_env() -> Result<()> {
    run(ReplayArgs::parse())
}

pub fn run(args: ReplayArgs) -> Result<()> {
    let config = args.swipe_config()?;
    tracing::debug!(trace = %args.trace.display(), ?config, "starting replay");
    let report = replay_file(&args.trace, config)?;

    let mut out = io::stdout().lock();
    let written = if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(ReplayError::Encode)?;
        writeln!(out, "{json}")
    } else {
        write_summary(&mut out, &report)
    };
    written.map_err(|source| ReplayError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

/// Human-readable report.
pub fn write_summary(out: &mut impl Write, report: &ReplayReport) -> io::Result<()> {
    writeln!(out, "steps: {}", report.steps)?;
    for n in &report.notifications {
        let kind = match n {
            Notification::WillShow { .. } => "will_show",
            Notification::DidShow { .. } => "did_show",
        };
        writeln!(out, "  line {:>4}  {kind:<9} {}", n.line(), n.position())?;
    }
    match report.final_offset {
        Some(offset) => writeln!(out, "offset: ({}, {})", offset.dx, offset.dy)?,
        None => writeln!(out, "offset: not laid out")?,
    }
    match report.active_position {
        Some(position) => writeln!(out, "active: {position}")?,
        None => writeln!(out, "active: between positions")?,
    }
    if report.animating {
        writeln!(out, "transition still running")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use swipenav_core::{Position, Vector};

    #[test]
    fn command_definition_is_valid() {
        ReplayArgs::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let args = ReplayArgs::try_parse_from([
            "swipenav-replay",
            "--trace",
            "t.jsonl",
            "--duration-ms",
            "0",
            "--fraction",
            "0.25",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.trace, PathBuf::from("t.jsonl"));
        assert!(args.json);
        let config = args.swipe_config().unwrap();
        assert_eq!(config.transition_duration, Duration::ZERO);
        assert_eq!(config.horizontal_snap_fraction, 0.25);
        assert_eq!(config.vertical_snap_fraction, 0.25);
    }

    #[test]
    fn trace_is_required() {
        assert!(ReplayArgs::try_parse_from(["swipenav-replay"]).is_err());
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        let args =
            ReplayArgs::try_parse_from(["swipenav-replay", "--trace", "t", "--fraction", "0.7"])
                .unwrap();
        assert!(matches!(args.swipe_config(), Err(ReplayError::Config(_))));
    }

    #[test]
    fn summary_lists_notifications() {
        let report = ReplayReport {
            steps: 3,
            notifications: vec![
                Notification::WillShow { line: 2, position: Position::Top },
                Notification::DidShow { line: 3, position: Position::Top },
            ],
            final_offset: Some(Vector::vertical(600.0)),
            active_position: Some(Position::Top),
            ..ReplayReport::default()
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("steps: 3"));
        assert!(text.contains("will_show"));
        assert!(text.contains("active: top"));
        assert!(!text.contains("transition still running"));
    }
}
