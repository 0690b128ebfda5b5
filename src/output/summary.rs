//! Console summary of a finished scan

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::record::FileRecord;
use crate::tree::{ScanStats, format_size};

use super::config::OutputConfig;
use super::rows::rows;

/// Print the summary table to stdout.
pub fn print_summary(
    records: &[FileRecord],
    stats: &ScanStats,
    config: &OutputConfig,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(config));
    write_summary(&mut stdout, records, stats, config)
}

/// The caller has already weighed the terminal and the environment, so
/// `use_color` is final.
fn color_choice(config: &OutputConfig) -> ColorChoice {
    if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// Write the largest records as a table followed by the scan counters.
pub fn write_summary<W: WriteColor>(
    out: &mut W,
    records: &[FileRecord],
    stats: &ScanStats,
    config: &OutputConfig,
) -> io::Result<()> {
    let shown = config
        .summary_rows
        .map_or(records.len(), |n| n.min(records.len()));

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    writeln!(out, "Largest files")?;
    out.reset()?;

    for row in rows(&records[..shown]) {
        let marker = if row.duplicate { "*" } else { " " };
        write!(out, "{} ", marker)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>8}", format_size(row.size))?;
        out.reset()?;
        writeln!(out, "  {}", row.path.display())?;
    }
    if shown < records.len() {
        writeln!(out, "  ... {} more in report", records.len() - shown)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} directories, {} files, {} matched",
        stats.directories, stats.files, stats.matched
    )?;
    if stats.entry_errors > 0 || stats.skipped_directories > 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(
            out,
            "{} unreadable entries, {} skipped directories",
            stats.entry_errors, stats.skipped_directories
        )?;
        out.reset()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render(records: &[FileRecord], stats: &ScanStats, rows: Option<usize>) -> String {
        let mut out = NoColor::new(Vec::new());
        let config = OutputConfig {
            use_color: false,
            summary_rows: rows,
        };
        write_summary(&mut out, records, stats, &config).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_summary_lists_and_truncates() {
        let records = vec![
            FileRecord::new("/v/a.mp4", 2048),
            FileRecord::new("/v/b.mp4", 2048),
            FileRecord::new("/v/c.mp4", 10),
        ];
        let stats = ScanStats {
            directories: 1,
            files: 4,
            matched: 3,
            ..Default::default()
        };
        let text = render(&records, &stats, Some(2));
        assert!(text.contains("    2.0K  /v/a.mp4"));
        assert!(text.contains("*     2.0K  /v/b.mp4"));
        assert!(!text.contains("/v/c.mp4"));
        assert!(text.contains("1 more in report"));
        assert!(text.contains("1 directories, 4 files, 3 matched"));
        assert!(!text.contains("skipped"));
    }

    #[test]
    fn test_summary_mentions_failures() {
        let stats = ScanStats {
            entry_errors: 2,
            skipped_directories: 1,
            ..Default::default()
        };
        let text = render(&[], &stats, None);
        assert!(text.contains("2 unreadable entries, 1 skipped directories"));
    }

    #[test]
    fn test_color_request_is_not_second_guessed() {
        let on = OutputConfig {
            use_color: true,
            ..Default::default()
        };
        let off = OutputConfig {
            use_color: false,
            ..Default::default()
        };
        assert_eq!(color_choice(&on), ColorChoice::Always);
        assert_eq!(color_choice(&off), ColorChoice::Never);
    }
}
