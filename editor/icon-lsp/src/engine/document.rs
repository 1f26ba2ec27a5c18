//! Document management for the LSP engine
//!
//! Manages open documents in the LSP session with thread-safe access.

use dashmap::DashMap;
use icon_hover::{line_of, HoverDocument};
use tower_lsp::lsp_types::Url;

/// Manages open documents in the LSP session
#[derive(Debug, Default)]
pub struct DocumentManager {
    /// Map of document URI to content
    documents: DashMap<Url, DocumentState>,
}

/// Snapshot of an open document
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Document content
    pub content: String,
    /// Document version
    pub version: i32,
    /// Language id reported by the client
    pub language_id: String,
}

impl HoverDocument for DocumentState {
    fn line_text(&self, line: u32) -> Option<&str> {
        line_of(&self.content, line)
    }
}

impl DocumentManager {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open a document
    pub fn open(&self, uri: Url, language_id: String, content: String, version: i32) {
        self.documents.insert(
            uri,
            DocumentState {
                content,
                version,
                language_id,
            },
        );
    }

    /// Update a document (full content replacement)
    pub fn update(&self, uri: &Url, content: String, version: i32) {
        if let Some(mut doc) = self.documents.get_mut(uri) {
            doc.content = content;
            doc.version = version;
        }
    }

    /// Close a document
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get a snapshot of the document
    pub fn get(&self, uri: &Url) -> Option<DocumentState> {
        self.documents.get(uri).map(|doc| doc.clone())
    }
}
