//! The fixed vocabulary of substrings the scanner recognises.
//!
//! Defaults target logrus-style Go logging (`log.Debug(...)`,
//! `log.WithField(...).Debug(...)`, `log.WithFields(log.Fields{...}).Debug(...)`).
//! Every token can be replaced through [`crate::config`] to strip a different
//! logging API's debug calls.

/// What to do with a direct debug call whose closing line never appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unterminated {
    /// Keep the opening line and carry on line by line (fail open).
    #[default]
    Keep,
    /// Drop everything from the opening line to the end of the input.
    DropToEnd,
}

/// Token vocabulary and policy for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Substring identifying a debug-severity log invocation.
    pub debug_call: String,
    /// Fluent calls attaching structured fields before the severity method.
    pub field_openers: Vec<String>,
    /// Prefix of a line comment.
    pub comment_prefix: String,
    /// Opening character of a quoted continuation line.
    pub string_quote: String,
    /// Token a line ends with when it closes a call.
    pub call_close: String,
    /// Token closing a field map literal together with its call.
    pub field_close: String,
    /// Policy for unterminated direct calls.
    pub unterminated: Unterminated,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            debug_call: ".Debug(".to_string(),
            field_openers: vec![".WithFields(log.Fields{".to_string(), ".WithField(".to_string()],
            comment_prefix: "//".to_string(),
            string_quote: "\"".to_string(),
            call_close: ")".to_string(),
            field_close: "})".to_string(),
            unterminated: Unterminated::Keep,
        }
    }
}

impl Markers {
    /// True if the line invokes the debug method.
    pub fn is_debug_call(&self, line: &str) -> bool {
        line.contains(&self.debug_call)
    }

    /// True if the line starts with the marker minus its leading `.`.
    ///
    /// This is how a field-attachment chain continues after a line ending in
    /// `.`, so it only counts inside a chain.
    pub fn continues_debug_call(&self, line: &str) -> bool {
        let continued = self.debug_call.trim_start_matches('.');
        !continued.is_empty()
            && continued.len() < self.debug_call.len()
            && line.trim_start().starts_with(continued)
    }

    /// True if the trimmed line starts with the comment prefix.
    pub fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.trim().starts_with(&self.comment_prefix)
    }

    /// True if the line opens a field-attachment chain.
    pub fn opens_fields(&self, line: &str) -> bool {
        self.field_openers
            .iter()
            .any(|opener| line.contains(opener.as_str()))
    }

    /// True if the line, ignoring trailing whitespace, closes a call.
    pub fn closes_call(&self, line: &str) -> bool {
        line.trim_end().ends_with(&self.call_close)
    }

    /// True if the trimmed line begins with the field-close token.
    pub fn closes_fields(&self, line: &str) -> bool {
        line.trim().starts_with(&self.field_close)
    }

    /// True if the trimmed line is a quoted string continuation.
    pub fn is_quoted_continuation(&self, line: &str) -> bool {
        line.trim().starts_with(&self.string_quote)
    }

    /// True if any line of the text is a debug call, or continues one after
    /// a field-attachment line.
    pub fn mentions_debug(&self, text: &str) -> bool {
        let mut chain_seen = false;
        for line in text.split('\n') {
            if self.is_debug_call(line) || (chain_seen && self.continues_debug_call(line)) {
                return true;
            }
            chain_seen |= self.opens_fields(line);
        }
        false
    }
}
