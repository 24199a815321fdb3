// ============================================================
// Pipeline Errors
// ============================================================
// Typed errors raised by the data and infra layers.
// The application and CLI layers wrap these in anyhow with
// extra context (which label, which command).
//
// Two families matter to callers:
//   - I/O failures (missing root, unreadable file, bad output dir)
//   - decoding failures (a matched file is not valid UTF-8)
// The rest (codec, config) come from the serialization crates.

use std::{io, path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The directory walk itself failed (missing root, permission denied
    /// on a subdirectory, symlink loop).
    #[error("cannot walk corpus tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not valid UTF-8: {source}", .path.display())]
    Decode {
        path:   PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("artifact '{}' could not be encoded/decoded: {source}", .path.display())]
    Codec {
        path:   PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// A config that parses but cannot describe a sensible build
    #[error("invalid build config '{}': {reason}", .path.display())]
    InvalidConfig {
        path:   PathBuf,
        reason: String,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Config {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for per-file failures that `ScanPolicy::SkipUnreadable`
    /// is allowed to step over.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
