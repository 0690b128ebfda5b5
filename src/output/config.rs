//! Output configuration types

const DEFAULT_SUMMARY_ROWS: usize = 10;

/// Configuration for the console summary.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Rows shown in the console table; `None` shows every row
    pub summary_rows: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            summary_rows: Some(DEFAULT_SUMMARY_ROWS),
        }
    }
}
