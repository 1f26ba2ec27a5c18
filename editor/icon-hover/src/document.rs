//! Host document access.
//!
//! [`HoverDocument`] is the only thing the hover logic needs from an editor:
//! the text of a line and the word under a position. Editors (or the language
//! server's document store) implement it; [`SourceText`] covers plain strings.

use crate::context::word_range_in_line;
use crate::types::{Position, Range};

/// Read-only view of a document supplied by the host.
pub trait HoverDocument {
    /// Text of a 1-based line, without the line terminator.
    fn line_text(&self, line: u32) -> Option<&str>;

    /// Range of the `[A-Za-z0-9_-]+` word under `position`, if any.
    fn word_range_at(&self, position: Position) -> Option<Range> {
        let text = self.line_text(position.line)?;
        let (start, end) = word_range_in_line(text, position.column)?;
        Some(line_span(position.line, start, end))
    }
}

/// 1-based range for a 0-based character span `start..end` of `line`.
pub(crate) fn line_span(line: u32, start: u32, end: u32) -> Range {
    Range {
        start_line: line,
        start_col: start + 1,
        end_line: line,
        end_col: end + 1,
    }
}

/// A document held in memory as a single string.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    source: &'a str,
}

impl<'a> SourceText<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl HoverDocument for SourceText<'_> {
    fn line_text(&self, line: u32) -> Option<&str> {
        line_of(self.source, line)
    }
}

impl HoverDocument for str {
    fn line_text(&self, line: u32) -> Option<&str> {
        line_of(self, line)
    }
}

/// 1-based line lookup shared by the string-backed documents.
pub fn line_of(source: &str, line: u32) -> Option<&str> {
    let index = line.checked_sub(1)? as usize;
    source
        .split('\n')
        .nth(index)
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
}
