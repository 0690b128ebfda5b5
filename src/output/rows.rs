//! Report rows with duplicate-size markers

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::record::FileRecord;

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Same size as the row directly above
    #[serde(rename = "dup")]
    pub duplicate: bool,
    pub size: u64,
    pub path: PathBuf,
}

/// Turn size-ordered records into report rows.
///
/// A row is marked when its size equals the size of the row before it, so in
/// a run of equal sizes every row but the first carries the marker.
pub fn rows(records: &[FileRecord]) -> Vec<ReportRow> {
    let mut last_size = None;
    records
        .iter()
        .map(|record| {
            let duplicate = last_size == Some(record.size());
            last_size = Some(record.size());
            ReportRow {
                duplicate,
                size: record.size(),
                path: record.path().to_path_buf(),
            }
        })
        .collect()
}
