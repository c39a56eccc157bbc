//! Aggregation and reporting for `debugstrip` CLI.

use super::args::Args;
use super::worker::ProcessResult;
use std::path::{Path, PathBuf};

/// Aggregated results of a CLI run.
#[derive(Debug, Default)]
pub(crate) struct Summary {
    pub files_scanned: usize,
    pub statements_removed: usize,
    pub lines_removed: usize,
    pub modified: Vec<PathBuf>,
    pub retained: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Aggregate a vector of `ProcessResult` into counts and paths.
pub(crate) fn aggregate_results(results: Vec<ProcessResult>) -> Summary {
    let mut summary = Summary::default();

    for result in results {
        summary.files_scanned += 1;
        match result {
            ProcessResult::Stripped { path, removals } => {
                summary.statements_removed += removals.len();
                summary.lines_removed += removals.iter().map(|r| r.line_count()).sum::<usize>();
                summary.modified.push(path);
            }
            ProcessResult::Retained { path } => summary.retained.push(path),
            ProcessResult::NoMarker => {}
            ProcessResult::Error(e) => summary.errors.push(e),
        }
    }

    summary
}

fn relative<'a>(path: &'a Path, root: &Path) -> std::path::Display<'a> {
    path.strip_prefix(root).unwrap_or(path).display()
}

/// Print a CLI summary report based on aggregated results.
pub(crate) fn print_summary(summary: &Summary, args: &Args, root: &Path) {
    for path in &summary.modified {
        eprintln!("  ✓ {}", relative(path, root));
    }

    if args.verbose && !summary.retained.is_empty() {
        eprintln!();
        eprintln!("Debug markers left in place:");
        for path in &summary.retained {
            eprintln!("  - {}", relative(path, root));
        }
    }

    eprintln!();
    if args.dry_run {
        eprintln!("=== Dry Run Summary ===");
        eprintln!("Scanned {} file(s)", summary.files_scanned);
        eprintln!("Would modify {} file(s)", summary.modified.len());
        eprintln!(
            "Would remove {} statement(s) ({} line(s))",
            summary.statements_removed, summary.lines_removed
        );
    } else {
        eprintln!("=== Strip Summary ===");
        eprintln!("Scanned {} file(s)", summary.files_scanned);
        eprintln!("Files modified: {}", summary.modified.len());
        eprintln!(
            "Removed {} statement(s) ({} line(s))",
            summary.statements_removed, summary.lines_removed
        );
    }
    if !summary.retained.is_empty() {
        eprintln!(
            "Left debug markers in {} file(s) (comments or unterminated calls)",
            summary.retained.len()
        );
    }

    if !summary.errors.is_empty() {
        eprintln!();
        eprintln!("Errors: {}", summary.errors.len());
        for error in &summary.errors {
            eprintln!("  - {}", error);
        }
    }

    if args.dry_run && !args.verbose {
        eprintln!();
        eprintln!("Dry run complete. Use -v to see detailed changes.");
    }
}
