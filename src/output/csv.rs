//! Delimited report file: `Dup,Size,Full_Path`
//!
//! Fields are written bare unless they contain a comma, a double quote or a
//! line break, in which case they are wrapped in double quotes with inner
//! quotes doubled. Rows end with `\n`. On Unix, paths are written as their
//! raw name bytes.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::FileRecord;

use super::rows::{ReportRow, rows};

pub const HEADER: [&str; 3] = ["Dup", "Size", "Full_Path"];
const DUP_MARKER: &str = "*";

/// Write the header and one row per record.
pub fn write_csv<W: Write>(mut writer: W, records: &[FileRecord]) -> std::io::Result<()> {
    let header = HEADER.map(str::as_bytes);
    write_fields(&mut writer, &header)?;
    for row in rows(records) {
        let dup = if row.duplicate { DUP_MARKER } else { "" };
        let size = row.size.to_string();
        let path = path_bytes(&row.path);
        write_fields(&mut writer, &[dup.as_bytes(), size.as_bytes(), &path])?;
    }
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
pub fn save_csv(path: &Path, records: &[FileRecord]) -> Result<()> {
    let report_err = |source| Error::Report {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(report_err)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, records).map_err(report_err)?;
    writer.flush().map_err(report_err)
}

/// Read a report produced by [`write_csv`].
pub fn parse_csv<R: Read>(mut reader: R) -> Result<Vec<ReportRow>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut records = split_records(&bytes)?.into_iter();
    match records.next() {
        Some((_, header)) if header.iter().map(Vec::as_slice).eq(HEADER.map(str::as_bytes)) => {}
        Some((line, _)) => {
            return Err(Error::Parse {
                line,
                reason: format!("expected header {}", HEADER.join(",")),
            });
        }
        None => {
            return Err(Error::Parse {
                line: 1,
                reason: "empty report".to_string(),
            });
        }
    }

    records
        .map(|(line, fields)| {
            let [dup, size, path]: [Vec<u8>; 3] =
                fields.try_into().map_err(|f: Vec<Vec<u8>>| Error::Parse {
                    line,
                    reason: format!("expected 3 fields, found {}", f.len()),
                })?;
            let duplicate = match dup.as_slice() {
                b"" => false,
                marker if marker == DUP_MARKER.as_bytes() => true,
                other => {
                    return Err(Error::Parse {
                        line,
                        reason: format!("unexpected marker '{}'", String::from_utf8_lossy(other)),
                    });
                }
            };
            let size = std::str::from_utf8(&size)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| Error::Parse {
                    line,
                    reason: format!("invalid size '{}'", String::from_utf8_lossy(&size)),
                })?;
            Ok(ReportRow {
                duplicate,
                size,
                path: path_from_bytes(path),
            })
        })
        .collect()
}

/// Path as written to the report. Unix names are raw bytes, so a name that
/// is not UTF-8 reads back unchanged; elsewhere it is converted lossily.
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(path.as_os_str().as_bytes())
    }
    #[cfg(not(unix))]
    {
        match path.to_string_lossy() {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        }
    }
}

fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        PathBuf::from(std::ffi::OsString::from_vec(bytes))
    }
    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn write_fields<W: Write>(writer: &mut W, fields: &[&[u8]]) -> std::io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        if field.iter().any(|&b| matches!(b, b',' | b'"' | b'\n' | b'\r')) {
            writer.write_all(b"\"")?;
            let mut parts = field.split(|&b| b == b'"');
            if let Some(first) = parts.next() {
                writer.write_all(first)?;
            }
            for part in parts {
                writer.write_all(b"\"\"")?;
                writer.write_all(part)?;
            }
            writer.write_all(b"\"")?;
        } else {
            writer.write_all(field)?;
        }
    }
    writer.write_all(b"\n")
}

/// Split raw report bytes into records of fields, tagged with their
/// starting line.
fn split_records(bytes: &[u8]) -> Result<Vec<(usize, Vec<Vec<u8>>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = Vec::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut iter = bytes.iter().copied().peekable();

    while let Some(b) = iter.next() {
        if in_quotes {
            match b {
                b'"' if iter.peek() == Some(&b'"') => {
                    iter.next();
                    field.push(b'"');
                }
                b'"' => in_quotes = false,
                b'\n' => {
                    line += 1;
                    field.push(b);
                }
                _ => field.push(b),
            }
            continue;
        }

        match b {
            b'"' if field.is_empty() => in_quotes = true,
            b',' => fields.push(std::mem::take(&mut field)),
            b'\r' if iter.peek() == Some(&b'\n') => {}
            b'\n' => {
                fields.push(std::mem::take(&mut field));
                records.push((record_line, std::mem::take(&mut fields)));
                line += 1;
                record_line = line;
            }
            _ => field.push(b),
        }
    }

    if in_quotes {
        return Err(Error::Parse {
            line: record_line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }
    Ok(records)
}
