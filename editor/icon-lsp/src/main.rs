//! Icon hover language server executable
//!
//! Speaks LSP over stdio; logs go to stderr.

use icon_lsp::{EngineConfig, LspServer};
use tower_lsp::{LspService, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let (config, warnings) = std::env::current_dir()
        .map(|dir| EngineConfig::load_default(&dir))
        .unwrap_or_default();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.engine.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting {}", config.engine.name);
    tracing::info!("Icon install root: {}", config.install_root().display());

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| LspServer::new(client, config));
    Server::new(stdin, stdout, socket).serve(service).await;
}
