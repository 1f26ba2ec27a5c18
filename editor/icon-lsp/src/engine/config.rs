//! Configuration loading for the LSP engine
//!
//! Loads settings from YAML configuration files.

use icon_hover::{CatalogLoader, HoverMode, DEVELOPMENT_CATALOG, PACKAGED_CATALOG};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EngineConfig {
    /// Engine settings
    pub engine: EngineSettings,
    /// Icon catalog settings
    pub icons: IconSettings,
    /// Hover behaviour
    pub hover: HoverMode,
    /// Document languages served
    pub languages: LanguageSettings,
}

/// Core engine settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Server name
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where the icon catalog lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// Install root; defaults to the directory of the server executable
    pub install_root: Option<PathBuf>,
    /// Catalog paths relative to the install root, tried in order
    pub candidates: Vec<String>,
}

/// Languages the hover is registered for
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    /// Language identifiers (as sent in `didOpen`)
    pub ids: Vec<String>,
    /// File extensions, used when the client sends no usable language id
    pub extensions: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: "icon-lsp".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            install_root: None,
            candidates: vec![PACKAGED_CATALOG.to_string(), DEVELOPMENT_CATALOG.to_string()],
        }
    }
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            ids: vec!["html".to_string(), "vue".to_string()],
            extensions: vec!["html".to_string(), "htm".to_string(), "vue".to_string()],
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from default locations
    ///
    /// Files that fail to load are skipped. One warning per skipped file is
    /// returned, since logging is usually not set up yet at this point.
    pub fn load_default(dir: &Path) -> (Self, Vec<String>) {
        let candidates = [
            dir.join(".icon-lsp.yaml"),
            dir.join(".icon-lsp.yml"),
            dir.join("icon-lsp.yaml"),
            dir.join("icon-lsp.yml"),
        ];

        let mut warnings = Vec::new();
        for candidate in &candidates {
            if candidate.exists() {
                match Self::load(candidate) {
                    Ok(config) => return (config, warnings),
                    Err(e) => warnings.push(format!("Ignoring {}: {}", candidate.display(), e)),
                }
            }
        }

        (Self::default(), warnings)
    }

    /// Install root the catalog candidates are resolved against
    pub fn install_root(&self) -> PathBuf {
        if let Some(root) = &self.icons.install_root {
            return root.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Catalog loader for the configured locations
    pub fn catalog_loader(&self) -> CatalogLoader {
        let root = self.install_root();
        CatalogLoader::with_candidates(
            self.icons
                .candidates
                .iter()
                .map(|candidate| root.join(candidate))
                .collect(),
        )
    }

    /// Whether hover is served for a document
    pub fn handles(&self, language_id: &str, uri: &str) -> bool {
        if self.languages.ids.iter().any(|id| id == language_id) {
            return true;
        }

        let file = uri.rsplit('/').next().unwrap_or(uri);
        file.rsplit_once('.').is_some_and(|(_, ext)| {
            self.languages
                .extensions
                .iter()
                .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
    }
}
