#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # debugstrip
//!
//! Removes debug-level logging statements from a source tree, rewriting files
//! in place.
//!
//! The line scanner lives in [`debugstrip_core`], file discovery and per-file
//! rewriting in [`debugstrip_sweep`]; this crate re-exports both and, with the
//! `cli` feature, provides the `debugstrip` command.

pub use debugstrip_core::{
    load_config, strip, strip_lines, strip_source, Config, ConfigError, Markers, Origin, Removal,
    Stripped, Unterminated,
};
pub use debugstrip_sweep::{
    discover_files, process_file, process_source, DiscoverOptions, FileOutcome, SweepError,
};

/// Command-line interface for stripping debug statements.
#[cfg(feature = "cli")]
pub mod cli;
