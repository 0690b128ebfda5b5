//! One-call scan: validate the root, walk it, return the largest records

use std::path::Path;

use crate::error::{Error, Result};
use crate::record::FileRecord;
use crate::tracker::TopNTracker;
use crate::tree::{ScanConfig, ScanStats, TreeWalker, WalkObserver};

/// Outcome of a scan: the retained records, largest first, and the counters.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub stats: ScanStats,
}

/// Scan `root` with `config`, reporting recoverable failures to `observer`.
///
/// Only a root that is not a directory fails the call. Everything below it
/// that cannot be read is skipped and counted.
pub fn scan<O: WalkObserver>(
    root: &Path,
    config: ScanConfig,
    observer: &mut O,
) -> Result<ScanOutcome> {
    if !root.is_dir() {
        return Err(Error::InvalidRoot(root.to_path_buf()));
    }

    let mut tracker = TopNTracker::new(config.limit);
    let walker = TreeWalker::new(config);
    let stats = walker.walk_with(root, &mut tracker, observer);

    Ok(ScanOutcome {
        records: tracker.into_records(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalkError;
    use crate::extensions::ExtensionSet;
    use tempfile::TempDir;

    fn ignore_errors(_: &WalkError) {}

    #[test]
    fn test_scan_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.pdf");
        std::fs::write(&file, b"x").unwrap();
        let err = scan(&file, ScanConfig::default(), &mut ignore_errors).unwrap_err();
        assert!(matches!(err, Error::InvalidRoot(_)));
    }

    #[test]
    fn test_scan_keeps_limit() {
        let dir = TempDir::new().unwrap();
        for (i, len) in [10usize, 50, 5, 100, 50].iter().enumerate() {
            std::fs::write(dir.path().join(format!("f{}.bmp", i)), vec![0u8; *len]).unwrap();
        }
        let config = ScanConfig {
            extensions: ExtensionSet::parse(["bmp"]).unwrap(),
            limit: 3,
            ..Default::default()
        };
        let outcome = scan(dir.path(), config, &mut ignore_errors).unwrap();
        let sizes: Vec<u64> = outcome.records.iter().map(FileRecord::size).collect();
        assert_eq!(sizes, vec![100, 50, 50]);
        assert_eq!(outcome.stats.matched, 5);
    }
}
