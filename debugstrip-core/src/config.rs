//! Loading the marker vocabulary from a `.debugstrip.toml` file.
//!
//! Only the `[debugstrip]` section is read. Each line is `key = value`, values
//! may be wrapped in double or single quotes, and `field-opener` may repeat.
//! Double-quoted values understand `\"`, `\\` and `\t`; nothing else of TOML
//! is supported.

use crate::debugstrip_debug;
use crate::markers::{Markers, Unterminated};
use ropey::Rope;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use textum::{Boundary, BoundaryMode, Snippet, Target};

/// File name looked up in the source directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".debugstrip.toml";

const SECTION_HEADER: &str = "[debugstrip]";

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("[debugstrip] section not found in {}", .0.display())]
    MissingSection(PathBuf),
    #[error("invalid value for `unterminated`: {0:?} (expected \"keep\" or \"drop\")")]
    InvalidPolicy(String),
    #[error("`{0}` must not be empty")]
    EmptyValue(String),
}

/// Settings read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub markers: Markers,
    /// Default file extension to discover, without the leading dot.
    pub extension: Option<String>,
}

/// Find the config file by walking up from a given directory
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load settings for `source_dir`, using `explicit` when given.
///
/// With no explicit path and no config file in `source_dir` or above it, the
/// defaults are returned.
pub fn load_config(source_dir: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config_file(source_dir) {
            Some(path) => path,
            None => {
                debugstrip_debug!("no {} above {}", CONFIG_FILE_NAME, source_dir.display());
                return Ok(Config::default());
            }
        },
    };
    debugstrip_debug!("reading config from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let section = section_text(&content).ok_or(ConfigError::MissingSection(path))?;
    parse_section(&section)
}

/// Slice out the body of the `[debugstrip]` section, up to the next header or EOF.
fn section_text(content: &str) -> Option<String> {
    let rope = Rope::from_str(content);

    // Try to find the section text - handle both cases: another section exists or EOF
    let between = Snippet::Between {
        start: Boundary::new(
            Target::Literal(SECTION_HEADER.to_string()),
            BoundaryMode::Exclude,
        ),
        end: Boundary::new(Target::Literal("\n[".to_string()), BoundaryMode::Exclude),
    };
    if let Ok(resolution) = between.resolve(&rope) {
        return Some(rope.slice(resolution.start..resolution.end).to_string());
    }

    let snippet = Snippet::From(Boundary::new(
        Target::Literal(SECTION_HEADER.to_string()),
        BoundaryMode::Exclude,
    ));
    let resolution = snippet.resolve(&rope).ok()?;
    Some(rope.slice(resolution.start..resolution.end).to_string())
}

fn parse_section(section: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let mut openers: Option<Vec<String>> = None;

    for line in section.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value.trim());

        let markers = &mut config.markers;
        match key {
            "debug-call" => markers.debug_call = non_empty(key, &value)?,
            "field-opener" => openers
                .get_or_insert_with(Vec::new)
                .push(non_empty(key, &value)?),
            "comment-prefix" => markers.comment_prefix = value.into_owned(),
            "string-quote" => markers.string_quote = non_empty(key, &value)?,
            "call-close" => markers.call_close = non_empty(key, &value)?,
            "field-close" => markers.field_close = non_empty(key, &value)?,
            "unterminated" => markers.unterminated = parse_policy(&value)?,
            "extension" => {
                config.extension = Some(non_empty(key, &value)?.trim_start_matches('.').to_string())
            }
            other => debugstrip_debug!("ignoring unknown config key {other:?}"),
        }
    }

    if let Some(openers) = openers {
        config.markers.field_openers = openers;
    }
    Ok(config)
}

fn parse_policy(value: &str) -> Result<Unterminated, ConfigError> {
    match value {
        "keep" => Ok(Unterminated::Keep),
        "drop" => Ok(Unterminated::DropToEnd),
        other => Err(ConfigError::InvalidPolicy(other.to_string())),
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::EmptyValue(key.to_string()))
    } else {
        Ok(value.to_string())
    }
}

/// Strip one pair of matching outer quotes, if present.
///
/// Double-quoted values accept the `\"`, `\\` and `\t` escapes; single-quoted
/// values are literal.
fn unquote(value: &str) -> Cow<'_, str> {
    if let Some(inner) = value.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        return unescape(inner);
    }
    if let Some(inner) = value.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        return Cow::Borrowed(inner);
    }
    Cow::Borrowed(value)
}

fn unescape(inner: &str) -> Cow<'_, str> {
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            // unknown escapes stay as written
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
