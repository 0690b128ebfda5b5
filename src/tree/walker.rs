//! TreeWalker - depth-first scan feeding matching files into a tracker

use std::fs::{self, DirEntry};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::WalkError;
use crate::record::FileRecord;
use crate::tracker::TopNTracker;

use super::config::ScanConfig;
use super::observer::{LogObserver, WalkObserver};
use super::utils::should_ignore_path;

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Directories successfully enumerated (root included)
    pub directories: usize,
    /// Non-directory entries seen
    pub files: usize,
    /// Files whose extension matched and whose size was offered to the tracker
    pub matched: usize,
    /// Entries skipped because their details could not be read
    pub entry_errors: usize,
    /// Directories that could not be enumerated
    pub skipped_directories: usize,
}

/// One directory on the work stack. Entries are read up front, so the
/// directory handle is already closed while its children are visited.
struct DirFrame {
    entries: std::vec::IntoIter<DirEntry>,
    depth: usize,
}

/// Depth-first walker using an explicit work stack.
///
/// Subdirectories are entered as soon as they are met, in name order, so the
/// order in which files reach the tracker is the same pre-order a recursive
/// walk would produce. Failures never escape: a directory that cannot be read
/// is pruned and an entry that cannot be inspected is skipped.
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `root`, logging failures.
    pub fn walk(&self, root: &Path, tracker: &mut TopNTracker) -> ScanStats {
        self.walk_with(root, tracker, &mut LogObserver::default())
    }

    /// Walk `root`, handing every recoverable failure to `observer`.
    pub fn walk_with<O: WalkObserver>(
        &self,
        root: &Path,
        tracker: &mut TopNTracker,
        observer: &mut O,
    ) -> ScanStats {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        let mut stats = ScanStats::default();

        info!(
            root = %root.display(),
            extensions = self.config.extensions.len(),
            limit = tracker.limit(),
            "scan started"
        );

        let mut stack: Vec<DirFrame> = Vec::new();
        if let Some(frame) = open_dir(&root, 0, &mut stats, observer) {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let depth = frame.depth;
            let path = entry.path();

            if should_ignore_path(&path, &self.config.ignore_patterns) {
                trace!(path = %path.display(), "ignored");
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(source) => {
                    stats.entry_errors += 1;
                    observer.on_error(&WalkError::Entry { path, source });
                    continue;
                }
            };

            if file_type.is_dir() {
                if self.descends_into(depth + 1) {
                    if let Some(child) = open_dir(&path, depth + 1, &mut stats, observer) {
                        stack.push(child);
                    }
                }
                continue;
            }

            stats.files += 1;

            // Every file is stat-ed before its name is looked at, so an
            // unreadable entry is reported whatever its extension. Links are
            // followed for size; a dangling one fails here.
            let metadata = if file_type.is_symlink() {
                fs::metadata(&path)
            } else {
                entry.metadata()
            };
            let meta = match metadata {
                Ok(meta) => meta,
                Err(source) => {
                    stats.entry_errors += 1;
                    observer.on_error(&WalkError::Entry { path, source });
                    continue;
                }
            };
            if meta.is_dir() {
                debug!(path = %path.display(), "not descending into directory link");
                continue;
            }

            if self.config.extensions.matches(&path) {
                stats.matched += 1;
                tracker.offer(FileRecord::new(path, meta.len()));
            }
        }

        info!(
            directories = stats.directories,
            files = stats.files,
            matched = stats.matched,
            entry_errors = stats.entry_errors,
            skipped_directories = stats.skipped_directories,
            "scan finished"
        );
        stats
    }

    fn descends_into(&self, depth: usize) -> bool {
        self.config.max_depth.is_none_or(|max| depth < max)
    }
}

/// Enumerate a directory into a frame, or report it as skipped.
fn open_dir<O: WalkObserver>(
    path: &Path,
    depth: usize,
    stats: &mut ScanStats,
    observer: &mut O,
) -> Option<DirFrame> {
    let read_dir = match fs::read_dir(path) {
        Ok(r) => r,
        Err(source) => {
            stats.skipped_directories += 1;
            observer.on_error(&WalkError::Directory {
                path: path.to_path_buf(),
                source,
            });
            return None;
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(e) => entries.push(e),
            Err(source) => {
                stats.entry_errors += 1;
                observer.on_error(&WalkError::Entry {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
    entries.sort_by_key(|e| e.file_name());

    stats.directories += 1;
    trace!(path = %path.display(), entries = entries.len(), depth, "entered directory");
    Some(DirFrame {
        entries: entries.into_iter(),
        depth,
    })
}
