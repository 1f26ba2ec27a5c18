//! Load the icon catalog for hover.
//!
//! The catalog is a single JSON file resolved from a fixed list of
//! candidate locations under the install root, first existing path wins.
//! [`CatalogLoader`] caches a successfully loaded catalog for the rest of
//! the process.

use crate::types::IconCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Catalog location inside a packaged install.
pub const PACKAGED_CATALOG: &str = "dist/icons.json";

/// Catalog location inside a development checkout.
pub const DEVELOPMENT_CATALOG: &str = "assets/icons.json";

/// Errors that can occur when loading the icon catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read the catalog file.
    #[error("Failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the catalog file (invalid JSON or wrong shape).
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: PathBuf,
        source: serde_json::Error,
    },

    /// None of the candidate paths exists.
    #[error("icon catalog not found, tried: {}", format_paths(.0))]
    NotFound(Vec<PathBuf>),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl IconCatalog {
    /// Load a catalog from a JSON file shaped `{ "icons": { ... } }`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| LoadError::Read {
            file: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            file: path.to_path_buf(),
            source: e,
        })
    }
}

/// Resolves, loads and caches the icon catalog.
///
/// Only a non-empty catalog is cached. A failed load, or a file that
/// legitimately holds zero icons, yields an empty catalog and is retried
/// on the next call.
#[derive(Debug)]
pub struct CatalogLoader {
    candidates: Vec<PathBuf>,
    cache: OnceLock<Arc<IconCatalog>>,
    reads: AtomicUsize,
}

impl CatalogLoader {
    /// Loader using the packaged then development location under `install_root`.
    pub fn new(install_root: &Path) -> Self {
        Self::with_candidates(vec![
            install_root.join(PACKAGED_CATALOG),
            install_root.join(DEVELOPMENT_CATALOG),
        ])
    }

    /// Loader trying `candidates` in order.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            cache: OnceLock::new(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Loader that always serves `catalog`, never touching the filesystem.
    pub fn preloaded(catalog: IconCatalog) -> Self {
        let loader = Self::with_candidates(Vec::new());
        let _ = loader.cache.set(Arc::new(catalog));
        loader
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Number of catalog reads attempted so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// First candidate path that exists.
    pub fn resolve_path(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }

    /// Get the icon catalog, loading it on first use.
    ///
    /// Never fails: every error is logged and degrades to an empty catalog.
    pub fn load_icons(&self) -> Arc<IconCatalog> {
        if let Some(catalog) = self.cache.get() {
            return Arc::clone(catalog);
        }

        match self.try_load() {
            Ok(catalog) if !catalog.is_empty() => {
                // A racing caller may have filled the cell first; both loaded the same file.
                Arc::clone(self.cache.get_or_init(|| Arc::new(catalog)))
            }
            Ok(_) => {
                tracing::warn!("Icon catalog is empty, will retry on next hover");
                Arc::new(IconCatalog::default())
            }
            Err(e) => {
                tracing::warn!("Failed to load icon catalog: {}", e);
                Arc::new(IconCatalog::default())
            }
        }
    }

    fn try_load(&self) -> Result<IconCatalog, LoadError> {
        let path = self
            .resolve_path()
            .ok_or_else(|| LoadError::NotFound(self.candidates.clone()))?;

        tracing::info!("Loading icon catalog from {}", path.display());
        self.reads.fetch_add(1, Ordering::Relaxed);

        let catalog = IconCatalog::load(path)?;
        tracing::info!("Loaded {} icons", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
        "icons": {
            "foo": {"body": "<circle r=\"5\"/>", "width": 20, "height": 20},
            "bar": {"body": "<rect width=\"4\" height=\"4\"/>"}
        }
    }"#;

    fn write_catalog(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_file() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(temp.path(), "icons.json", CATALOG);

        let catalog = IconCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("foo").unwrap().width, Some(20));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(temp.path(), "icons.json", "not valid json");

        let result = IconCatalog::load(&path);
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = IconCatalog::load(Path::new("/nonexistent/icons.json"));
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn test_packaged_location_wins() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path(), PACKAGED_CATALOG, CATALOG);
        write_catalog(
            temp.path(),
            DEVELOPMENT_CATALOG,
            r#"{"icons": {"dev": {"body": "<rect/>"}}}"#,
        );

        let loader = CatalogLoader::new(temp.path());
        let catalog = loader.load_icons();
        assert!(catalog.get("foo").is_some());
        assert!(catalog.get("dev").is_none());
    }

    #[test]
    fn test_falls_back_to_development_location() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path(), DEVELOPMENT_CATALOG, CATALOG);

        let loader = CatalogLoader::new(temp.path());
        assert_eq!(
            loader.resolve_path(),
            Some(temp.path().join(DEVELOPMENT_CATALOG).as_path())
        );
        assert_eq!(loader.load_icons().len(), 2);
    }

    #[test]
    fn test_second_call_uses_cache() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path(), PACKAGED_CATALOG, CATALOG);

        let loader = CatalogLoader::new(temp.path());
        let first = loader.load_icons();
        let second = loader.load_icons();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.read_count(), 1);
    }

    #[test]
    fn test_cached_catalog_survives_file_removal() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(temp.path(), PACKAGED_CATALOG, CATALOG);

        let loader = CatalogLoader::new(temp.path());
        assert_eq!(loader.load_icons().len(), 2);

        fs::remove_file(path).unwrap();
        assert_eq!(loader.load_icons().len(), 2);
    }

    #[test]
    fn test_missing_catalog_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let loader = CatalogLoader::new(temp.path());

        assert!(loader.load_icons().is_empty());
        assert_eq!(loader.read_count(), 0);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path(), PACKAGED_CATALOG, "{ broken");

        let loader = CatalogLoader::new(temp.path());
        assert!(loader.load_icons().is_empty());

        write_catalog(temp.path(), PACKAGED_CATALOG, CATALOG);
        assert_eq!(loader.load_icons().len(), 2);
        assert_eq!(loader.read_count(), 2);
    }

    // A catalog holding zero icons is never cached, so every call re-reads it.
    #[test]
    fn test_empty_catalog_is_reread_every_call() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path(), PACKAGED_CATALOG, r#"{"icons": {}}"#);

        let loader = CatalogLoader::new(temp.path());
        assert!(loader.load_icons().is_empty());
        assert!(loader.load_icons().is_empty());
        assert_eq!(loader.read_count(), 2);
    }

    #[test]
    fn test_preloaded_never_reads() {
        let catalog: IconCatalog = serde_json::from_str(CATALOG).unwrap();
        let loader = CatalogLoader::preloaded(catalog);

        assert_eq!(loader.load_icons().len(), 2);
        assert_eq!(loader.read_count(), 0);
    }

    #[test]
    fn test_not_found_error_display() {
        let err = LoadError::NotFound(vec![PathBuf::from("/a/icons.json"), PathBuf::from("/b")]);
        let message = err.to_string();
        assert!(message.contains("/a/icons.json"));
        assert!(message.contains("/b"));
    }
}
