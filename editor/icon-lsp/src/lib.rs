//! Icon hover Language Server Protocol implementation
//!
//! Shows a preview of `my-icons-*` classes when hovering a line of an HTML
//! or Vue document that carries them in a `class` attribute. The hover
//! logic lives in `icon-hover`; this crate is the editor-facing surface:
//!
//! - **Engine**: `tower-lsp` server with full document sync and hover
//! - **Config**: YAML-based configuration
//!
//! # Usage
//!
//! Run the language server via stdio:
//!
//! ```bash
//! icon-lsp
//! ```
//!
//! # Configuration
//!
//! Create a `.icon-lsp.yaml` in the directory the server is started from:
//!
//! ```yaml
//! engine:
//!   name: icon-lsp
//!   log_level: info
//!
//! icons:
//!   install_root: /path/to/extension
//!   candidates:
//!     - dist/icons.json
//!     - assets/icons.json
//!
//! languages:
//!   ids: [html, vue]
//! ```

pub mod engine;

pub use engine::{DocumentManager, EngineConfig, LspServer};
