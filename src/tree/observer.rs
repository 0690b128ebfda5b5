//! Receivers for recoverable walk failures

use std::io::Write;

use tracing::warn;

use crate::error::WalkError;

/// Receives every recoverable failure the walker runs into.
pub trait WalkObserver {
    fn on_error(&mut self, error: &WalkError);
}

impl<F: FnMut(&WalkError)> WalkObserver for F {
    fn on_error(&mut self, error: &WalkError) {
        self(error)
    }
}

/// Reports failures through `tracing` at `warn`.
///
/// Skipped directories can also print an `X` on stderr as a progress marker.
#[derive(Debug, Default)]
pub struct LogObserver {
    markers: bool,
    markers_printed: usize,
}

impl LogObserver {
    pub fn with_markers(markers: bool) -> Self {
        Self {
            markers,
            markers_printed: 0,
        }
    }

    /// Number of `X` markers written so far.
    pub fn markers_printed(&self) -> usize {
        self.markers_printed
    }
}

impl WalkObserver for LogObserver {
    fn on_error(&mut self, error: &WalkError) {
        match error {
            WalkError::Directory { path, source } => {
                warn!(path = %path.display(), error = %source, "skipping directory");
                if self.markers {
                    let mut stderr = std::io::stderr().lock();
                    let _ = write!(stderr, "X");
                    let _ = stderr.flush();
                    self.markers_printed += 1;
                }
            }
            WalkError::Entry { path, source } => {
                warn!(path = %path.display(), error = %source, "a problem occurred getting file details");
            }
        }
    }
}
