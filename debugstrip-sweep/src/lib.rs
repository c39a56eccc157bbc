// debugstrip-sweep/src/lib.rs

pub mod discover;
pub mod process;

// Re-export core's macro
pub use debugstrip_core::debugstrip_debug;

pub use discover::{discover_files, DiscoverOptions, SweepError};
pub use process::{process_file, process_source, FileOutcome};

#[cfg(test)]
mod tests;
