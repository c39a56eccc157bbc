// debugstrip-sweep/src/process.rs

use crate::discover::SweepError;
use debugstrip_core::{debugstrip_debug, strip_source, Markers, Removal};
use std::fs;
use std::path::Path;

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file never mentions the debug call; it was not touched.
    NoMarker,
    /// The file mentions the debug call but nothing was removed (comments,
    /// unresolved constructs); it was not touched.
    Retained,
    /// Statements were removed. The file was rewritten unless in dry-run mode.
    Stripped { removals: Vec<Removal> },
}

impl FileOutcome {
    /// True if the file content changed (or would change in dry-run mode).
    pub fn modified(&self) -> bool {
        matches!(self, FileOutcome::Stripped { .. })
    }
}

/// Strip debug statements from a source text already in memory.
///
/// Returns the new text alongside the outcome; the text is `None` unless
/// something was removed.
pub fn process_source(source: &str, markers: &Markers) -> (Option<String>, FileOutcome) {
    match strip_source(source, markers) {
        None => (None, FileOutcome::NoMarker),
        Some((_, removals)) if removals.is_empty() => (None, FileOutcome::Retained),
        Some((stripped, removals)) => (Some(stripped), FileOutcome::Stripped { removals }),
    }
}

/// Read, strip and rewrite one file in place.
///
/// The file is only written when at least one statement was removed and
/// `dry_run` is false.
pub fn process_file(path: &Path, markers: &Markers, dry_run: bool) -> Result<FileOutcome, SweepError> {
    let source = fs::read_to_string(path).map_err(|source| SweepError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (stripped, outcome) = process_source(&source, markers);
    if let Some(stripped) = stripped {
        if dry_run {
            debugstrip_debug!("dry run, not writing {}", path.display());
        } else {
            fs::write(path, stripped).map_err(|source| SweepError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(outcome)
}
