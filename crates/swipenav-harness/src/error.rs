use std::path::PathBuf;

use swipenav_core::SwipeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid trace step: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] SwipeError),
    #[error("line {line}: {source}")]
    Step {
        line: usize,
        #[source]
        source: SwipeError,
    },
}

impl ReplayError {
    /// Process exit code for the replay binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 66,
            Self::Parse { .. } | Self::ConfigFile { .. } | Self::Config(_) => 65,
            Self::Encode(_) => 70,
            Self::Step { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplayError>;
