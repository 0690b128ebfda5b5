//! Report output
//!
//! - `rows` - duplicate-size marking over the sorted records
//! - `csv` - the `Dup,Size,Full_Path` report file
//! - `json` - JSON report file
//! - `summary` - colored console table

mod config;
mod csv;
mod json;
mod rows;
mod summary;

// Re-export public types and functions
pub use config::OutputConfig;
pub use csv::{HEADER, parse_csv, save_csv, write_csv};
pub use json::{save_json, write_json};
pub use rows::{ReportRow, rows};
pub use summary::{print_summary, write_summary};
