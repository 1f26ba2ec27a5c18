//! # icon-hover
//!
//! Hover provider that previews icon classes as inline images.
//!
//! When the cursor is on a line whose `class="..."` attribute contains
//! `my-icons-*` classes, every such class is looked up in an icon catalog,
//! rendered to a PNG and embedded in the hover as a base64 `<img>`.
//!
//! ## Features
//!
//! - Catalog loading from a packaged or development location, cached once loaded
//! - Class extraction from HTML/Vue `class` attributes
//! - SVG templating and rasterization (resvg) per icon, failures contained per icon
//! - Host-agnostic document access through [`HoverDocument`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use icon_hover::{CatalogLoader, IconHoverProvider, SourceText};
//!
//! let provider = IconHoverProvider::new(CatalogLoader::new(Path::new(".")));
//!
//! let source = r#"<i class="my-icons-home"></i>"#;
//! if let Some(info) = provider.hover(&SourceText::new(source), 1, 2) {
//!     println!("{}", info.contents);
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! icon-hover index.html 10 15 --root ./my-extension
//! ```

mod context;
mod document;
mod hover;
mod loader;
mod render;
mod types;

pub use context::{
    class_attribute_value, extract_icon_classes, icon_key, keyword_range_in_line, word_range_in_line,
    ICON_CLASS_PREFIX,
};
pub use document::{line_of, HoverDocument, SourceText};
pub use hover::{HoverMode, IconHoverProvider};
pub use loader::{CatalogLoader, LoadError, DEVELOPMENT_CATALOG, PACKAGED_CATALOG};
pub use render::{
    build_svg_document, png_data_uri, IconRenderer, Rasterizer, RenderError, ResvgRasterizer,
    MAX_RASTER_SIZE,
};
pub use types::{
    HoverInfo, IconCatalog, IconDefinition, Position, Range, DEFAULT_DISPLAY_HEIGHT,
    DEFAULT_DISPLAY_WIDTH, DEFAULT_ICON_SIZE,
};
