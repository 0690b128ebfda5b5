//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Files are filled with zero bytes so their size is exactly what was asked
/// for. The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of `size` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![0u8; size]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Nest directories under `path` until their absolute path is longer
    /// than `PATH_MAX`, so the deepest ones cannot be listed by any user,
    /// root included. Returns the shallowest directory that is out of reach.
    ///
    /// The chain is built in two halves joined by a rename, so no single
    /// call ever names a path that is too long.
    #[cfg(target_os = "linux")]
    pub fn add_overlong_dir(&self, path: &str) -> PathBuf {
        const PATH_MAX: usize = 4096;
        const LEVELS: usize = 12;
        let segment = "n".repeat(200);
        let nest = |base: PathBuf| {
            let mut deepest = base;
            for _ in 0..LEVELS {
                deepest.push(&segment);
            }
            fs::create_dir_all(&deepest).expect("Failed to create nested dirs");
            deepest
        };

        let head = nest(self.dir.path().join(path));
        let staging = self.dir.path().join(".overlong");
        let tail = nest(staging.clone());
        let joint = head.join("more");
        fs::rename(&staging, &joint).expect("Failed to join nested dirs");

        let deepest = joint.join(tail.strip_prefix(&staging).expect("tail is under staging"));
        deepest
            .ancestors()
            .take_while(|p| p.as_os_str().len() >= PATH_MAX)
            .last()
            .expect("nested path should exceed PATH_MAX")
            .to_path_buf()
    }

    /// Populate `dirs` directories of `files_per_dir` files each, spread over
    /// a few nesting levels, with varying sizes and extensions.
    pub fn populate(&self, dirs: usize, files_per_dir: usize) {
        const EXTS: [&str; 4] = ["mp4", "pdf", "txt", "png"];
        for d in 0..dirs {
            let dir = format!("level{}/dir{}", d % 3, d);
            for f in 0..files_per_dir {
                let ext = EXTS[(d + f) % EXTS.len()];
                self.add_file(&format!("{}/file{}.{}", dir, f, ext), (d * 31 + f * 7) % 512);
            }
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_has_requested_size() {
        let tree = TestTree::new();
        let path = tree.add_file("a/b/c.pdf", 42);
        assert_eq!(fs::metadata(path).unwrap().len(), 42);
    }

    #[test]
    fn test_populate_creates_files() {
        let tree = TestTree::new();
        tree.populate(4, 3);
        assert!(tree.path().join("level0/dir0/file0.mp4").exists());
        assert!(tree.path().join("level0/dir3/file1.mp4").exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_overlong_dir_cannot_be_listed() {
        let tree = TestTree::new();
        let blocked = tree.add_overlong_dir("deep");
        assert!(blocked.starts_with(tree.path().join("deep")));
        assert!(fs::read_dir(&blocked).is_err());
        assert!(fs::read_dir(blocked.parent().unwrap()).is_ok());
        assert!(!tree.path().join(".overlong").exists());
    }
}
