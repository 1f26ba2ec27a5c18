//! LSP engine core
//!
//! Language server that serves icon hovers for configured document languages.

pub mod config;
pub mod convert;
pub mod document;
pub mod server;

pub use config::EngineConfig;
pub use document::{DocumentManager, DocumentState};
pub use server::LspServer;
