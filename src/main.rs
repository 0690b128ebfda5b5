//! CLI entry point for heft

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use heft::{
    ExtensionSet, LogFormat, LogObserver, LoggingConfig, OutputConfig, ScanConfig, ScanOutcome,
    init_logging, print_summary, save_csv, save_json, scan,
};
use tracing::warn;

const DEFAULT_CSV_OUTPUT: &str = "largest_files.csv";
const DEFAULT_JSON_OUTPUT: &str = "largest_files.json";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "heft")]
#[command(about = "Find the largest files of selected types and write them to a report")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Report file (default: largest_files.csv, or .json with --json)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of largest files to keep
    #[arg(short = 'n', long = "top", default_value_t = heft::DEFAULT_LIMIT)]
    top: usize,

    /// File extensions to include, comma separated or repeated (e.g. -e pdf,mp4)
    #[arg(short = 'e', long = "ext", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Extension families to include: stream, image, doc
    #[arg(long = "preset", value_delimiter = ',')]
    presets: Vec<String>,

    /// Skip entries matching name or glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Write the report as JSON instead of CSV
    #[arg(long = "json")]
    json: bool,

    /// Do not print the summary table
    #[arg(long = "no-summary")]
    no_summary: bool,

    /// Print an X on stderr for every directory that cannot be read
    #[arg(long = "markers")]
    markers: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// More diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Diagnostic log format: text, json
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

/// Combine explicit extensions and presets; neither means the default set.
fn build_extensions(args: &Args) -> heft::Result<ExtensionSet> {
    if args.extensions.is_empty() && args.presets.is_empty() {
        return Ok(ExtensionSet::default());
    }
    let mut set = ExtensionSet::parse(&args.extensions)?;
    for preset in &args.presets {
        set.extend(ExtensionSet::preset(preset)?);
    }
    Ok(set)
}

fn run(args: &Args) -> heft::Result<()> {
    let use_color = should_use_color(args.color);

    init_logging(&LoggingConfig {
        verbosity: args.verbose,
        quiet: args.quiet,
        format: args.log_format,
        color: use_color,
    })?;

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let config = ScanConfig {
        extensions: build_extensions(args)?,
        limit: args.top,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
    };

    let mut observer = LogObserver::with_markers(args.markers);
    let outcome = scan(&root, config, &mut observer);
    if observer.markers_printed() > 0 {
        eprintln!();
    }
    let outcome = outcome?;

    let output = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(if args.json {
            DEFAULT_JSON_OUTPUT
        } else {
            DEFAULT_CSV_OUTPUT
        })
    });
    if args.json {
        save_json(&output, &outcome.records)?;
    } else {
        save_csv(&output, &outcome.records)?;
    }

    if let Err(e) = print_results(&output, &outcome, args, use_color) {
        warn!(error = %e, "could not print results");
    }
    Ok(())
}

/// Console output once the report is saved. Failures here leave the report
/// intact, so they are logged rather than returned.
fn print_results(
    output: &Path,
    outcome: &ScanOutcome,
    args: &Args,
    use_color: bool,
) -> io::Result<()> {
    {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Results written to {}", output.display())?;
        if args.no_summary {
            return Ok(());
        }
        writeln!(stdout)?;
    }
    let output_config = OutputConfig {
        use_color,
        ..Default::default()
    };
    print_summary(&outcome.records, &outcome.stats, &output_config)
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("heft: {}", e);
        process::exit(1);
    }
}
