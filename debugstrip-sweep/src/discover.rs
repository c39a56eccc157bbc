// debugstrip-sweep/src/discover.rs

use debugstrip_core::debugstrip_debug;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Errors that can occur while discovering or processing files
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("source path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options controlling which files are discovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverOptions {
    /// Extension to match, without the leading dot.
    pub extension: String,
    /// Honour `.gitignore`, global git excludes and hidden-file rules.
    pub respect_ignore: bool,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            extension: "go".to_string(),
            respect_ignore: false,
        }
    }
}

/// Recursively discovers all files with the requested extension under `root`
///
/// Returns a sorted vector of paths for deterministic processing.
pub fn discover_files(root: &Path, options: &DiscoverOptions) -> Result<Vec<PathBuf>, SweepError> {
    if !root.exists() {
        return Err(SweepError::MissingRoot(root.to_path_buf()));
    }

    let extension = options.extension.trim_start_matches('.');
    let walker = WalkBuilder::new(root)
        .standard_filters(options.respect_ignore)
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| SweepError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if path.extension() == Some(OsStr::new(extension)) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    debugstrip_debug!(
        "discovered {} .{} file(s) under {}",
        files.len(),
        extension,
        root.display()
    );
    Ok(files)
}
