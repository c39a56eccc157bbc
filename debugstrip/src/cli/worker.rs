use super::args::Args;
use debugstrip_core::{Markers, Removal};
use debugstrip_sweep::{process_file, FileOutcome};
use std::path::{Path, PathBuf};

/// Enum to represent the result of processing a single file
#[derive(Debug)]
pub enum ProcessResult {
    Stripped {
        path: PathBuf,
        removals: Vec<Removal>,
    },
    Retained {
        path: PathBuf,
    },
    NoMarker,
    Error(String),
}

/// Process a single file (called by worker threads)
pub fn strip_file(file_path: &Path, args: &Args, markers: &Markers) -> ProcessResult {
    vlog!(args, {"Processing: {}", file_path.display()});

    match process_file(file_path, markers, args.dry_run) {
        Ok(FileOutcome::Stripped { removals }) => {
            let lines: usize = removals.iter().map(Removal::line_count).sum();
            if args.dry_run {
                vlog!(args, {"  Would remove {} statement(s), {} line(s)", removals.len(), lines});
            } else {
                vlog!(args, {"  Removed {} statement(s), {} line(s)", removals.len(), lines});
            }
            ProcessResult::Stripped {
                path: file_path.to_path_buf(),
                removals,
            }
        }
        Ok(FileOutcome::Retained) => {
            vlog!(args, {"  Debug marker present but nothing removable"});
            ProcessResult::Retained {
                path: file_path.to_path_buf(),
            }
        }
        Ok(FileOutcome::NoMarker) => ProcessResult::NoMarker,
        Err(e) => {
            let error_msg = e.to_string();
            vlog!(args, {"  Warning: {}", error_msg});
            ProcessResult::Error(error_msg)
        }
    }
}
