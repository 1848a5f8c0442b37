//! Catalog backed by a JSON array file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::adapters::json_file::read_document;
use crate::domain::catalog::TechnologyRecord;
use crate::errors::domain::DomainError;
use crate::repos::catalog::CatalogSource;

/// Reads the catalog file on every call, so edits to the file take effect
/// on the next request.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<TechnologyRecord>, DomainError> {
        read_document(&self.path).await
    }
}
