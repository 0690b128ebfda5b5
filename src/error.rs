//! Error types for scanning and reporting

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A recoverable failure encountered while walking the tree.
///
/// Neither variant stops the walk. `Directory` prunes the subtree rooted at
/// `path`; `Entry` skips a single entry and the enclosing directory carries on.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read directory '{}': {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read file details for '{}': {source}", path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    pub fn path(&self) -> &Path {
        match self {
            WalkError::Directory { path, .. } | WalkError::Entry { path, .. } => path,
        }
    }

    /// True when the failure pruned a whole subtree.
    pub fn is_directory(&self) -> bool {
        matches!(self, WalkError::Directory { .. })
    }
}

/// Run-terminating errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': not a readable directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("invalid extension '{0}'")]
    InvalidExtension(String),

    #[error("unknown extension preset '{0}' (expected stream, image or doc)")]
    UnknownPreset(String),

    #[error("error writing file '{}': {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("malformed report line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
