//! The record produced for every matching file

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A matched file and its size in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    path: PathBuf,
    size: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}
