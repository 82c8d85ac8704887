//! Catalog file storage with XDG path support.
//!
//! A catalog is stored as JSON, by default at `~/.local/share/shop/catalog.json`.
//! Both a synchronous [`CatalogStore::load`] and an asynchronous
//! [`CatalogStore::load_async`] are provided; every load validates the
//! catalog before returning it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use storefront_catalog::{Catalog, CatalogError};
use thiserror::Error;

/// Default catalog filename.
const CATALOG_FILENAME: &str = "catalog.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "shop";

/// Errors that can occur while reading or writing a catalog file.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write catalog file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create catalog directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed but the catalog breaks an invariant.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

impl CatalogStoreError {
    /// Returns true if the error is a read of a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogStoreError::ReadError { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// Persistent storage for a product catalog.
///
/// # Example
///
/// ```no_run
/// use storefront_query::CatalogStore;
///
/// let store = CatalogStore::new()?;
/// let catalog = store.load_or_builtin()?;
/// store.save(&catalog)?;
/// # Ok::<(), storefront_query::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a store for a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default catalog path.
    ///
    /// On Unix: `~/.local/share/shop/catalog.json`
    /// On macOS: `~/Library/Application Support/shop/catalog.json`
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogStoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(CATALOG_FILENAME))
    }

    /// Returns the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// - `CatalogStoreError::ReadError` if the file cannot be read.
    /// - `CatalogStoreError::Json` if the file is not a catalog.
    /// - `CatalogStoreError::Invalid` if the catalog fails validation.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|e| CatalogStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        self.parse(&contents)
    }

    /// Loads the catalog, falling back to the built-in catalog if the file
    /// does not exist.
    pub fn load_or_builtin(&self) -> Result<Catalog> {
        match self.load() {
            Ok(catalog) => Ok(catalog),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %self.path.display(), "no catalog file, using built-in catalog");
                Ok(Catalog::builtin())
            }
            Err(e) => Err(e),
        }
    }

    /// Async equivalent of [`load()`](Self::load).
    pub async fn load_async(&self) -> Result<Catalog> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| CatalogStoreError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })?;
        self.parse(&contents)
    }

    /// Saves the catalog as pretty-printed JSON.
    ///
    /// Creates the parent directory if needed. The file is written to a
    /// temporary sibling and renamed into place.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CatalogStoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(catalog)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| CatalogStoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| CatalogStoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            products = catalog.products.len(),
            "saved catalog"
        );
        Ok(())
    }

    /// Returns true if the catalog file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn parse(&self, contents: &str) -> Result<Catalog> {
        let catalog: Catalog = serde_json::from_str(contents)?;
        catalog.validate()?;
        tracing::debug!(
            path = %self.path.display(),
            products = catalog.products.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
