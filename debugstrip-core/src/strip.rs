//! Line scanner that removes debug logging statements.
//!
//! The scanner walks the lines once with a cursor that only moves forward.
//! Lines are either kept verbatim or dropped as part of a [`Removal`]; no line
//! is ever edited.

use crate::debugstrip_debug;
use crate::markers::{Markers, Unterminated};

/// How a removed statement was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A debug call with no field-attachment chain in front of it.
    Direct,
    /// A field-attachment chain that ended in a debug call.
    Chain,
}

/// An inclusive range of removed lines (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub start: usize,
    pub end: usize,
    pub origin: Origin,
}

impl Removal {
    /// Number of lines covered.
    pub fn line_count(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// Result of a scan: the retained lines and what was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    pub lines: Vec<&'a str>,
    pub removals: Vec<Removal>,
}

impl Stripped<'_> {
    /// True if at least one statement was removed.
    pub fn changed(&self) -> bool {
        !self.removals.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    /// Looking for the line that closes a call opened at `start`.
    InDirectCall {
        start: usize,
        probe: usize,
        origin: Origin,
    },
    /// Deciding whether the chain opened at `start` ends in a debug call.
    InChainLookahead { start: usize, probe: usize },
}

struct Scanner<'m, 'a> {
    markers: &'m Markers,
    lines: &'m [&'a str],
    /// Next line not yet decided. Never moves backwards.
    cursor: usize,
    state: State,
    kept: Vec<&'a str>,
    removals: Vec<Removal>,
}

impl<'m, 'a> Scanner<'m, 'a> {
    fn new(lines: &'m [&'a str], markers: &'m Markers) -> Self {
        Self {
            markers,
            lines,
            cursor: 0,
            state: State::Normal,
            kept: Vec::with_capacity(lines.len()),
            removals: Vec::new(),
        }
    }

    fn run(mut self) -> Stripped<'a> {
        while self.cursor < self.lines.len() {
            self.state = match self.state {
                State::Normal => self.normal(),
                State::InDirectCall {
                    start,
                    probe,
                    origin,
                } => self.direct_call(start, probe, origin),
                State::InChainLookahead { start, probe } => self.chain_lookahead(start, probe),
            };
        }
        Stripped {
            lines: self.kept,
            removals: self.removals,
        }
    }

    fn normal(&mut self) -> State {
        let line = self.lines[self.cursor];
        let start = self.cursor;

        if self.markers.is_comment(line) {
            self.keep_current();
            return State::Normal;
        }

        if self.markers.is_debug_call(line) {
            if self.markers.closes_call(line) {
                self.remove(start, start, Origin::Direct);
                return State::Normal;
            }
            return State::InDirectCall {
                start,
                probe: start + 1,
                origin: Origin::Direct,
            };
        }

        if self.markers.opens_fields(line) {
            return State::InChainLookahead {
                start,
                probe: start + 1,
            };
        }

        self.keep_current();
        State::Normal
    }

    fn direct_call(&mut self, start: usize, probe: usize, origin: Origin) -> State {
        let Some(&line) = self.lines.get(probe) else {
            return self.unterminated(start, origin);
        };
        if self.markers.closes_call(line) {
            self.remove(start, probe, origin);
            return State::Normal;
        }
        State::InDirectCall {
            start,
            probe: probe + 1,
            origin,
        }
    }

    fn chain_lookahead(&mut self, start: usize, probe: usize) -> State {
        let Some(&line) = self.lines.get(probe) else {
            debugstrip_debug!("chain at line {} unresolved at end of input, kept", start + 1);
            self.keep_current();
            return State::Normal;
        };

        let debug_line =
            self.markers.is_debug_call(line) || self.markers.continues_debug_call(line);
        if debug_line && !self.markers.is_comment(line) {
            if self.markers.closes_call(line) {
                self.remove(start, probe, Origin::Chain);
                return State::Normal;
            }
            return State::InDirectCall {
                start,
                probe: probe + 1,
                origin: Origin::Chain,
            };
        }

        if self.markers.closes_fields(line) {
            debugstrip_debug!(
                "chain at line {} closed at line {} without a debug call",
                start + 1,
                probe + 1
            );
            self.keep_current();
            return State::Normal;
        }

        if self.markers.is_quoted_continuation(line) || line.trim() == "}" {
            return State::InChainLookahead {
                start,
                probe: probe + 1,
            };
        }

        self.keep_current();
        State::Normal
    }

    fn unterminated(&mut self, start: usize, origin: Origin) -> State {
        match (origin, self.markers.unterminated) {
            (Origin::Direct, Unterminated::DropToEnd) => {
                debugstrip_debug!("call at line {} never closes, dropping to end", start + 1);
                let end = self.lines.len() - 1;
                self.remove(start, end, origin);
            }
            _ => {
                debugstrip_debug!("call at line {} never closes, kept", start + 1);
                self.keep_current();
            }
        }
        State::Normal
    }

    fn keep_current(&mut self) {
        self.kept.push(self.lines[self.cursor]);
        self.cursor += 1;
    }

    fn remove(&mut self, start: usize, end: usize, origin: Origin) {
        debugstrip_debug!("removing lines {}..={} ({:?})", start + 1, end + 1, origin);
        self.removals.push(Removal { start, end, origin });
        self.cursor = end + 1;
    }
}

/// Scan `lines` and drop every debug logging statement recognised by `markers`.
pub fn strip<'a>(lines: &[&'a str], markers: &Markers) -> Stripped<'a> {
    Scanner::new(lines, markers).run()
}

/// Strip with the default vocabulary and return only the retained lines.
pub fn strip_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    strip(lines, &Markers::default()).lines
}

/// Strip a whole source text, splitting and re-joining on `'\n'`.
///
/// Returns `None` when the text never mentions the debug call, so callers can
/// leave such files untouched.
pub fn strip_source(source: &str, markers: &Markers) -> Option<(String, Vec<Removal>)> {
    if !markers.mentions_debug(source) {
        return None;
    }
    let lines: Vec<&str> = source.split('\n').collect();
    let stripped = strip(&lines, markers);
    Some((stripped.lines.join("\n"), stripped.removals))
}
