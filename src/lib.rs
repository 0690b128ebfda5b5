//! Heft - find the largest files of the types you care about

pub mod error;
pub mod extensions;
pub mod logging;
pub mod output;
pub mod record;
pub mod scan;
pub mod tracker;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result, WalkError};
pub use extensions::{ExtensionSet, extension_of};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use output::{
    OutputConfig, ReportRow, parse_csv, print_summary, rows, save_csv, save_json, write_csv,
    write_json,
};
pub use record::FileRecord;
pub use scan::{ScanOutcome, scan};
pub use tracker::{DEFAULT_LIMIT, TopNTracker};
pub use tree::{LogObserver, ScanConfig, ScanStats, TreeWalker, WalkObserver, format_size};
