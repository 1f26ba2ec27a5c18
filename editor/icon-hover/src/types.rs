//! Core types for icon hover.
//!
//! - [`IconCatalog`] / [`IconDefinition`] - the loaded icon data
//! - [`HoverInfo`] - the hover result with formatted content
//! - [`Range`] / [`Position`] - source locations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Intrinsic SVG size used when a definition omits `width`/`height`.
pub const DEFAULT_ICON_SIZE: u32 = 16;

/// Display width of the hover image when a definition omits `width`.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 100;

/// Display height of the hover image when a definition omits `height`.
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 0;

/// Icon catalog, shaped like the resource file: `{ "icons": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconCatalog {
    /// Icon definitions indexed by icon key.
    pub icons: HashMap<String, IconDefinition>,
}

impl IconCatalog {
    /// Get an icon definition by key.
    pub fn get(&self, key: &str) -> Option<&IconDefinition> {
        self.icons.get(key)
    }

    /// Number of icons in the catalog.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the catalog holds no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl FromIterator<(String, IconDefinition)> for IconCatalog {
    fn from_iter<T: IntoIterator<Item = (String, IconDefinition)>>(iter: T) -> Self {
        Self {
            icons: iter.into_iter().collect(),
        }
    }
}

/// A single icon: raw SVG child markup plus optional dimensions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IconDefinition {
    /// SVG child elements, embedded verbatim inside the `<svg>` root.
    pub body: String,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,
}

impl IconDefinition {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Pixel size of the generated SVG document.
    pub fn svg_size(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(DEFAULT_ICON_SIZE),
            self.height.unwrap_or(DEFAULT_ICON_SIZE),
        )
    }

    /// Size declared on the hover `<img>` tag.
    ///
    /// Falls back to 100x0, not the 16x16 of [`svg_size`](Self::svg_size).
    pub fn display_size(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(DEFAULT_DISPLAY_WIDTH),
            self.height.unwrap_or(DEFAULT_DISPLAY_HEIGHT),
        )
    }
}

/// Cursor position. Both fields are 1-based; columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Source range for highlighting.
///
/// All positions are 1-based; `end_col` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

/// Hover information result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverInfo {
    /// Markdown content, possibly with inline HTML
    pub contents: String,

    /// Range in source that this hover applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,

    /// Content may run host commands/links without sanitizing
    pub is_trusted: bool,

    /// Inline HTML (the `<img>` tags) must be rendered, not stripped
    pub supports_html: bool,
}

impl HoverInfo {
    /// Create plain markdown hover info.
    pub fn new(contents: String) -> Self {
        Self {
            contents,
            range: None,
            is_trusted: false,
            supports_html: false,
        }
    }

    /// Create hover info whose inline HTML must be kept by the host.
    pub fn rich(contents: String) -> Self {
        Self {
            contents,
            range: None,
            is_trusted: true,
            supports_html: true,
        }
    }

    /// Add a source range to the hover info.
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }
}
