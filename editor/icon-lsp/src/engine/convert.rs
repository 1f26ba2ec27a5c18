//! Type conversions from hover types to LSP types
//!
//! LSP counts `character` in UTF-16 code units; the hover library counts
//! characters. Conversions go through the document's line text.

use icon_hover::{HoverDocument, HoverInfo, Range};
use tower_lsp::lsp_types::{
    Hover, HoverContents, MarkupContent, MarkupKind, Position as LspPosition, Range as LspRange,
};

/// Convert hover info to an LSP hover.
///
/// LSP markdown has no trust flags; clients that render HTML in markdown
/// keep the `<img>` tags.
pub fn to_lsp_hover<D>(info: &HoverInfo, document: &D) -> Hover
where
    D: HoverDocument + ?Sized,
{
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: info.contents.clone(),
        }),
        range: info.range.as_ref().map(|range| to_lsp_range(range, document)),
    }
}

/// Convert a 1-based character range to a 0-based LSP range
pub fn to_lsp_range<D>(range: &Range, document: &D) -> LspRange
where
    D: HoverDocument + ?Sized,
{
    LspRange {
        start: to_lsp_position(document, range.start_line, range.start_col),
        end: to_lsp_position(document, range.end_line, range.end_col),
    }
}

fn to_lsp_position<D>(document: &D, line: u32, column: u32) -> LspPosition
where
    D: HoverDocument + ?Sized,
{
    let text = document.line_text(line).unwrap_or_default();
    LspPosition {
        line: line.saturating_sub(1),
        character: chars_to_utf16(text, column.saturating_sub(1)),
    }
}

/// Convert a 0-based LSP position to 1-based line/column
pub fn from_lsp_position<D>(position: LspPosition, document: &D) -> (u32, u32)
where
    D: HoverDocument + ?Sized,
{
    let line = position.line + 1;
    let text = document.line_text(line).unwrap_or_default();
    (line, utf16_to_chars(text, position.character) + 1)
}

/// Characters covered by `units` UTF-16 code units of `text`.
///
/// An offset inside a surrogate pair stays on that character. Offsets past
/// the end of the line keep their distance from it.
pub fn utf16_to_chars(text: &str, units: u32) -> u32 {
    let mut consumed = 0;
    let mut chars = 0;
    for c in text.chars() {
        let next = consumed + c.len_utf16() as u32;
        if next > units {
            return chars;
        }
        consumed = next;
        chars += 1;
    }
    chars + (units - consumed)
}

/// UTF-16 code units of the first `chars` characters of `text`.
pub fn chars_to_utf16(text: &str, chars: u32) -> u32 {
    let mut units = 0;
    let mut counted = 0;
    for c in text.chars().take(chars as usize) {
        units += c.len_utf16() as u32;
        counted += 1;
    }
    units + (chars - counted)
}
