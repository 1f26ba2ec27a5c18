//! Icon hover language server
//!
//! Tracks open HTML/Vue documents and answers hover requests with icon
//! previews.

use super::config::EngineConfig;
use super::convert;
use super::document::DocumentManager;
use icon_hover::IconHoverProvider;
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

/// Icon hover language server
pub struct LspServer {
    /// LSP client for sending notifications
    client: Client,
    /// Document manager
    documents: DocumentManager,
    /// Hover provider, owns the process-wide catalog cache
    provider: Arc<IconHoverProvider>,
    /// Engine configuration
    config: EngineConfig,
}

impl LspServer {
    /// Create a server with the provider described by `config`
    pub fn new(client: Client, config: EngineConfig) -> Self {
        let provider =
            IconHoverProvider::new(config.catalog_loader()).with_mode(config.hover.clone());
        Self::with_provider(client, config, provider)
    }

    pub fn with_provider(client: Client, config: EngineConfig, provider: IconHoverProvider) -> Self {
        Self {
            client,
            documents: DocumentManager::new(),
            provider: Arc::new(provider),
            config,
        }
    }

    /// Server capabilities: full text sync and hover
    pub fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    ..Default::default()
                },
            )),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            ..Default::default()
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("{} initializing", self.config.engine.name);

        for candidate in self.provider.loader().candidates() {
            tracing::debug!("Icon catalog candidate: {}", candidate.display());
        }

        Ok(InitializeResult {
            capabilities: self.capabilities(),
            server_info: Some(ServerInfo {
                name: self.config.engine.name.clone(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("{} initialized", self.config.engine.name);
        self.client
            .log_message(
                MessageType::INFO,
                format!("{} ready", self.config.engine.name),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("{} shutting down", self.config.engine.name);
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        tracing::debug!("Document opened: {} ({})", doc.uri, doc.language_id);
        self.documents
            .open(doc.uri, doc.language_id, doc.text, doc.version);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents.update(&uri, change.text, version);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!("Document closed: {}", uri);
        self.documents.close(&uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };
        if !self.config.handles(&doc.language_id, uri.as_str()) {
            return Ok(None);
        }

        let provider = Arc::clone(&self.provider);

        // Catalog I/O and rasterization block; a cancelled request still runs to completion.
        let hover = tokio::task::spawn_blocking(move || {
            let (line, column) = convert::from_lsp_position(position, &doc);
            tracing::debug!("Hover at {}:{} (version {})", line, column, doc.version);
            provider
                .hover(&doc, line, column)
                .map(|info| convert::to_lsp_hover(&info, &doc))
        })
        .await;

        match hover {
            Ok(hover) => Ok(hover),
            Err(e) => {
                tracing::warn!("Hover task failed: {}", e);
                Ok(None)
            }
        }
    }
}
