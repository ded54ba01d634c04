//! Blob and metadata store interfaces with filesystem implementations.
//!
//! Storage is opaque to the stages: raw input is read from a [`BlobStore`],
//! rendered artifacts are written back to one, and template metadata is
//! upserted into a [`MetadataStore`]. Store failures are surfaced to the
//! caller unchanged; no retry happens at this layer.
//!
//! Both filesystem implementations overwrite on repeated writes, which is
//! what keeps content-addressed writes idempotent.

use crate::meta::TemplateMeta;
use crate::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Read/write access to opaque blobs addressed by string keys.
pub trait BlobStore {
    /// Fetch a blob by key.
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Write a blob, overwriting any existing object under the key.
    fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<()>;
}

/// Upsert access to template metadata records keyed by template id.
pub trait MetadataStore {
    /// Insert or overwrite the record for `meta.template_id`.
    fn upsert(&self, meta: &TemplateMeta) -> Result<()>;

    /// Fetch a record by template id, if present.
    fn get(&self, template_id: &str) -> Result<Option<TemplateMeta>>;
}

/// Filesystem-backed blob store rooted at a directory.
///
/// Keys map to relative paths under the root. Absolute keys and keys with
/// parent-directory components are rejected.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf> {
        let rel = Path::new(key);
        let escapes = rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
        if key.is_empty() || escapes {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(rel))
    }
}

impl BlobStore for FsBlobStore {
    fn get(&self, key: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve(key)?)?)
    }

    fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
        debug!(key, bytes = body.len(), content_type, "blob written");
        Ok(())
    }
}

/// Filesystem-backed metadata store: one JSON document per template id.
pub struct FsMetadataStore {
    root: PathBuf,
}

impl FsMetadataStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, template_id: &str) -> Result<PathBuf> {
        if template_id.is_empty() || !template_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidKey(template_id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", template_id)))
    }
}

impl MetadataStore for FsMetadataStore {
    fn upsert(&self, meta: &TemplateMeta) -> Result<()> {
        let path = self.record_path(&meta.template_id)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, serde_json::to_string_pretty(meta)?)?;
        debug!(template_id = %meta.template_id, "metadata record upserted");
        Ok(())
    }

    fn get(&self, template_id: &str) -> Result<Option<TemplateMeta>> {
        let path = self.record_path(template_id)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
