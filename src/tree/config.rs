//! Configuration types for the tree walker

use crate::extensions::ExtensionSet;
use crate::tracker::DEFAULT_LIMIT;

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Extensions whose files are recorded
    pub extensions: ExtensionSet,
    /// Number of largest files to keep
    pub limit: usize,
    /// Descend at most this many levels below the root
    pub max_depth: Option<usize>,
    /// Entry names (or globs) that are neither descended nor recorded
    pub ignore_patterns: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ExtensionSet::default(),
            limit: DEFAULT_LIMIT,
            max_depth: None,
            ignore_patterns: Vec::new(),
        }
    }
}
