//! Core hover logic

use crate::context::{extract_icon_classes, keyword_range_in_line};
use crate::document::{line_span, HoverDocument};
use crate::loader::CatalogLoader;
use crate::render::{IconRenderer, Rasterizer};
use crate::types::{HoverInfo, Position};
use serde::Deserialize;

/// What the provider answers with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoverMode {
    /// Render the icon classes of the hovered line.
    #[default]
    Icons,
    /// Show a fixed message when hovering `class`, also inside `my-class`.
    Keyword { message: String },
}

/// Icon hover provider
pub struct IconHoverProvider {
    loader: CatalogLoader,
    renderer: IconRenderer,
    mode: HoverMode,
}

impl IconHoverProvider {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            renderer: IconRenderer::new(),
            mode: HoverMode::default(),
        }
    }

    pub fn with_rasterizer<R: Rasterizer + 'static>(mut self, rasterizer: R) -> Self {
        self.renderer = IconRenderer::with_rasterizer(rasterizer);
        self
    }

    pub fn with_mode(mut self, mode: HoverMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Get hover information for a 1-based line/column.
    pub fn hover<D>(&self, document: &D, line: u32, column: u32) -> Option<HoverInfo>
    where
        D: HoverDocument + ?Sized,
    {
        match &self.mode {
            HoverMode::Icons => {
                let range = document.word_range_at(Position::new(line, column))?;
                let classes = extract_icon_classes(document.line_text(line)?, column);
                if classes.is_empty() {
                    return None;
                }

                tracing::debug!("Hover over {} icon classes", classes.len());
                let catalog = self.loader.load_icons();
                let contents = self.renderer.render_icon_classes(&classes, &catalog);
                Some(HoverInfo::rich(contents).with_range(range))
            }
            HoverMode::Keyword { message } => {
                let (start, end) = keyword_range_in_line(document.line_text(line)?, column)?;
                Some(HoverInfo::new(message.clone()).with_range(line_span(line, start, end)))
            }
        }
    }
}
