//! debugstrip-core: line scanner that removes debug logging statements
//!
//! The scanner is a pure transform over a file's lines: it never reads or
//! writes files and keeps no state between calls.
pub mod config;
pub mod debug;
pub mod markers;
pub mod strip;

pub use config::{find_config_file, load_config, Config, ConfigError, CONFIG_FILE_NAME};
pub use markers::{Markers, Unterminated};
pub use strip::{strip, strip_lines, strip_source, Origin, Removal, Stripped};
