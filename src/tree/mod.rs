//! Directory tree walking
//!
//! `TreeWalker` visits every directory below a root with an explicit work
//! stack and offers each file whose extension matches to a `TopNTracker`.
//! Failures are routed to a `WalkObserver` instead of being returned.

mod config;
mod observer;
mod utils;
mod walker;

// Re-export public types
pub use config::ScanConfig;
pub use observer::{LogObserver, WalkObserver};
pub use utils::{format_size, glob_match};
pub use walker::{ScanStats, TreeWalker};
