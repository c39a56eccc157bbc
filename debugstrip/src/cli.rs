//! Command-line interface for stripping debug logging statements.
//!
//! `debugstrip` discovers all source files with a given extension under a
//! directory, removes debug-level logging calls (including multi-line calls and
//! field-attachment chains), rewrites the files that changed, and prints a
//! summary of what was modified.

#[macro_use]
mod logs;
mod args;
mod orchestrate;
mod report;
mod worker;

use args::{print_usage, Args};
use debugstrip_core::load_config;
use debugstrip_sweep::{discover_files, DiscoverOptions};
use std::io;
use std::path::Path;

const DEFAULT_EXTENSION: &str = "go";

/// Entry point for the `debugstrip` command-line interface.
///
/// # Errors
///
/// Returns an [`io::Error`] if:
/// - command-line argument parsing fails,
/// - the configuration file cannot be read or is invalid,
/// - or the source directory cannot be walked.
///
/// Per-file read and write failures are reported in the summary instead, and
/// make the process exit with a non-zero status.
pub fn main() -> io::Result<()> {
    let args: Args = facet_args::from_std_args()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{e}")))?;

    if args.help {
        print_usage();
        std::process::exit(0);
    }

    let source_path = Path::new(&args.source);
    if !source_path.exists() {
        eprintln!("Error: Source path does not exist: {}", args.source);
        std::process::exit(1);
    }

    let config = load_config(source_path, args.config.as_deref().map(Path::new))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let extension = args
        .ext
        .clone()
        .or(config.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let options = DiscoverOptions {
        extension,
        respect_ignore: args.gitignore,
    };

    vlog!(args, {"Source directory: {}", source_path.display()});
    vlog!(args, {"Extension: .{}", options.extension.trim_start_matches('.')});
    vlog!(args, {"Debug call marker: {}", config.markers.debug_call});
    vlog!(args, {"Dry run: {}", args.dry_run});
    vlog!(args, {});

    let files = discover_files(source_path, &options).map_err(io::Error::other)?;

    vlog!(args, {"Found {} file(s)", files.len()});
    vlog_if!(args, files.is_empty(), {"Nothing to do."});

    if args.dry_run {
        eprintln!("Previewing removal of debug logging statements...");
    } else {
        eprintln!("Removing debug logging statements...");
    }
    eprintln!();

    let results = orchestrate::strip_all(&files, &args, &config.markers);
    let summary = report::aggregate_results(results);
    report::print_summary(&summary, &args, source_path);

    if !summary.errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
