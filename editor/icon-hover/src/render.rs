//! Icon rendering for hover content.
//!
//! Each icon class becomes one block of the hover message: the catalog
//! entry is wrapped in a standalone SVG document, rasterized to PNG and
//! embedded as a base64 data URI in an `<img>` tag.

use crate::context::icon_key;
use crate::types::{IconCatalog, IconDefinition};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use resvg::{tiny_skia, usvg};
use thiserror::Error;

/// Largest raster edge, in pixels.
pub const MAX_RASTER_SIZE: u32 = 4096;

/// Errors that can occur while rasterizing a single icon.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The generated SVG document could not be parsed.
    #[error("invalid SVG: {0}")]
    Svg(#[from] usvg::Error),

    /// Zero or oversized raster dimensions.
    #[error("unsupported dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Converts an SVG document into PNG bytes.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError>;
}

/// [`Rasterizer`] backed by resvg.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 || width > MAX_RASTER_SIZE || height > MAX_RASTER_SIZE {
            return Err(RenderError::Dimensions { width, height });
        }

        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg, &options)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::Dimensions { width, height })?;

        // viewBox and pixel size match, so the tree maps 1:1 onto the pixmap
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }
}

/// Build the standalone SVG document for an icon.
pub fn build_svg_document(key: &str, icon: &IconDefinition) -> String {
    let (width, height) = icon.svg_size();
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="currentColor" aria-label="{label}">{body}</svg>"#
        ),
        w = width,
        h = height,
        label = escape_attribute(key),
        body = icon.body,
    )
}

/// Wrap PNG bytes as a `data:` URI.
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Backslash-escape markdown punctuation so text cannot form links or markup.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '(' | ')' | '<' | '>' | '#' | '!' | '|' | '~'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders icon classes into hover markdown.
pub struct IconRenderer {
    rasterizer: Box<dyn Rasterizer>,
}

impl IconRenderer {
    /// Renderer using [`ResvgRasterizer`].
    pub fn new() -> Self {
        Self::with_rasterizer(ResvgRasterizer)
    }

    pub fn with_rasterizer<R: Rasterizer + 'static>(rasterizer: R) -> Self {
        Self {
            rasterizer: Box::new(rasterizer),
        }
    }

    /// Rasterize one icon and return its `<img>` tag.
    pub fn render_icon(&self, key: &str, icon: &IconDefinition) -> Result<String, RenderError> {
        let svg = build_svg_document(key, icon);
        let (width, height) = icon.svg_size();
        let png = self.rasterizer.rasterize(&svg, width, height)?;

        let (display_width, display_height) = icon.display_size();
        Ok(format!(
            r#"<img src="{}" width="{}" height="{}" />"#,
            png_data_uri(&png),
            display_width,
            display_height
        ))
    }

    /// Render every class, in order, one block per class.
    ///
    /// Classes are rendered one after another. A class missing from the
    /// catalog or failing to rasterize gets a notice instead of an image;
    /// the remaining classes are still rendered.
    pub fn render_icon_classes(&self, classes: &[String], catalog: &IconCatalog) -> String {
        let blocks: Vec<String> = classes
            .iter()
            .map(|class| {
                let key = icon_key(class);
                let Some(icon) = catalog.get(key) else {
                    tracing::debug!("Icon not found: {}", key);
                    return format!("**{}** - icon not found", escape_markdown(class));
                };

                match self.render_icon(key, icon) {
                    Ok(image) => image,
                    Err(e) => {
                        tracing::warn!("Failed to render icon {}: {}", key, e);
                        format!(
                            "**{}** - failed to render icon: {}",
                            escape_markdown(class),
                            escape_markdown(&e.to_string())
                        )
                    }
                }
            })
            .collect();

        blocks.join("\n\n")
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}
