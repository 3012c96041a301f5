//! Catalog Store
//!
//! Caches the parsed catalog and re-reads the CSV whenever its modification
//! time changes, so edits to the file take effect without a restart.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use super::error::CatalogResult;
use super::loader::CatalogLoader;
use super::policy::PolicyCatalog;

struct Cached {
    modified: Option<SystemTime>,
    catalog: Arc<PolicyCatalog>,
}

/// Shared, file-backed policy catalog
pub struct CatalogStore {
    path: PathBuf,
    loader: CatalogLoader,
    cached: RwLock<Option<Cached>>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>, default_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            loader: CatalogLoader::new(default_url),
            cached: RwLock::new(None),
        }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current catalog, reloading if the file changed.
    ///
    /// A catalog that cannot be read is logged and served as empty.
    pub fn current(&self) -> Arc<PolicyCatalog> {
        match self.check() {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Failed to load policy catalog {:?}: {}", self.path, e);
                Arc::new(PolicyCatalog::default())
            }
        }
    }

    /// Cached catalog while the file is unchanged, otherwise a fresh load.
    ///
    /// Unlike [`CatalogStore::current`], a missing or broken file is an error.
    pub fn check(&self) -> CatalogResult<Arc<PolicyCatalog>> {
        let modified = self.modified_time();

        {
            let cached = self.cached.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = cached.as_ref() {
                if modified.is_some() && cached.modified == modified {
                    return Ok(Arc::clone(&cached.catalog));
                }
            }
        }

        self.reload()
    }

    /// Force a reload from disk, replacing the cached catalog on success
    pub fn reload(&self) -> CatalogResult<Arc<PolicyCatalog>> {
        let modified = self.modified_time();
        let catalog = Arc::new(self.loader.load(&self.path)?);

        tracing::info!(
            "Loaded {} policies from {:?}",
            catalog.len(),
            self.path
        );

        let mut cached = self.cached.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(Cached {
            modified,
            catalog: Arc::clone(&catalog),
        });

        Ok(catalog)
    }

    fn modified_time(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()
    }
}
