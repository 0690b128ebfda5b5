//! JSON output formatting

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::FileRecord;

use super::rows::rows;

/// Write the report rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, records: &[FileRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &rows(records))?;
    writeln!(writer)?;
    Ok(())
}

/// Write the JSON report to `path`, replacing any existing file.
pub fn save_json(path: &Path, records: &[FileRecord]) -> Result<()> {
    let report_err = |source| Error::Report {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(report_err)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, records).map_err(|e| match e {
        Error::Io(source) => report_err(source),
        Error::Json(e) if e.is_io() => report_err(e.into()),
        other => other,
    })?;
    writer.flush().map_err(report_err)
}
