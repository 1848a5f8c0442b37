//! Whole-file JSON read/write shared by the file-backed adapters.

use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Read `path` and parse it as one JSON document.
pub async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::infra(
            InfraErrorKind::StorageRead,
            format!("Error reading {}: {e}", path.display()),
        )
    })?;

    let doc = serde_json::from_str(&raw).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Malformed JSON in {}: {e}", path.display()),
        )
    })?;

    debug!(path = %path.display(), bytes = raw.len(), "document read");
    Ok(doc)
}

/// Replace the contents of `path` with `doc`, pretty-printed with two-space
/// indentation. Concurrent readers see either the previous document or the
/// new one, never a partial write.
pub async fn write_document<T: Serialize + Sync>(path: &Path, doc: &T) -> Result<(), DomainError> {
    let body = serde_json::to_string_pretty(doc).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("serialize".into()),
            format!("Could not serialize document for {}: {e}", path.display()),
        )
    })?;
    let bytes = body.len();

    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || replace_file(&target, body.as_bytes()))
        .await
        .map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("join".into()),
                format!("Write task for {} failed: {e}", path.display()),
            )
        })?
        .map_err(|e| {
            DomainError::infra(
                InfraErrorKind::StorageWrite,
                format!("Error writing {}: {e}", path.display()),
            )
        })?;

    debug!(path = %path.display(), bytes, "document written");
    Ok(())
}

/// Write `bytes` to a temp file next to `path`, then rename it into place.
fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
