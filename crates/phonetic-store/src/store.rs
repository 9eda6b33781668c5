//! Single-object JSON document store
//!
//! Documents are persisted as a single-element JSON array wrapping the
//! object. The wrapper carries no meaning of its own but is the layout
//! existing documents already use, so both directions preserve it.

use crate::error::StoreError;
use crate::path::DocPath;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Store for typed single-object documents under a fixed root
///
/// All locations are [`DocPath`] values resolved against the root; the
/// resolved path must be absolute and end with `.json`. Writes go
/// through a sibling temp file and a rename, so a failed write leaves
/// the prior document untouched.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Root every document path resolves against
    root: PathBuf,
    /// Whether `write` may create missing parent directories
    create_directories: bool,
}

impl DocumentStore {
    /// Create store rooted at the given directory
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            create_directories: true,
        }
    }

    /// Create store rooted at the process working directory
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the working directory cannot be
    /// determined.
    pub fn current_dir() -> Result<Self, StoreError> {
        let root = std::env::current_dir().map_err(|e| StoreError::io_error(PathBuf::new(), e))?;
        Ok(Self::new(root))
    }

    /// With directory creation enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_create_directories(mut self, create: bool) -> Self {
        self.create_directories = create;
        self
    }

    /// Get the store root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate a document path and resolve it against the root
    fn resolve_document(&self, path: &DocPath) -> Result<PathBuf, StoreError> {
        if !path.is_document() {
            return Err(StoreError::Extension(path.to_string()));
        }
        let resolved = path.resolve(&self.root);
        if resolved.as_os_str().is_empty() || !resolved.is_absolute() {
            return Err(StoreError::InvalidPath(resolved.display().to_string()));
        }
        Ok(resolved)
    }

    /// Resolve a directory path against the root, no extension check
    fn resolve_directory(&self, dir: &DocPath) -> Result<PathBuf, StoreError> {
        let resolved = dir.resolve(&self.root);
        if resolved.as_os_str().is_empty() || !resolved.is_absolute() {
            return Err(StoreError::InvalidPath(resolved.display().to_string()));
        }
        Ok(resolved)
    }

    /// Write a value as a document at the given path
    ///
    /// # Errors
    /// - [`StoreError::Extension`] / [`StoreError::InvalidPath`] on a
    ///   bad location
    /// - [`StoreError::DirectoryNotFound`] if the parent directory is
    ///   missing and directory creation is disabled
    /// - [`StoreError::Io`] if the document cannot be written
    pub fn write<T: Serialize>(&self, path: &DocPath, value: &T) -> Result<(), StoreError> {
        let resolved = self.resolve_document(path)?;

        // check (and create) the parent directory
        if let Some(parent) = resolved.parent() {
            if !parent.exists() {
                if self.create_directories {
                    fs::create_dir_all(parent)
                        .map_err(|e| StoreError::io_error(parent.to_path_buf(), e))?;
                } else {
                    return Err(StoreError::DirectoryNotFound(parent.to_path_buf()));
                }
            }
        }

        // single-element wrapper, see module docs
        let json = serde_json::to_string(&[value])
            .map_err(|e| StoreError::schema_invalid(&resolved, e))?;

        // write beside the target, then rename over it
        let temp = resolved.with_extension("json.tmp");
        fs::write(&temp, json).map_err(|e| StoreError::io_error(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &resolved) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::io_error(&resolved, e));
        }

        tracing::debug!("wrote document {}", resolved.display());
        Ok(())
    }

    /// Read a document, returning the sole wrapped element
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] if the file is absent
    /// - [`StoreError::SchemaInvalid`] if parsing fails
    /// - [`StoreError::DocumentEmpty`] if the wrapper is null or holds
    ///   zero elements
    pub fn read<T: DeserializeOwned>(&self, path: &DocPath) -> Result<T, StoreError> {
        let resolved = self.resolve_document(path)?;

        let json = match fs::read_to_string(&resolved) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(resolved));
            }
            Err(e) => return Err(StoreError::io_error(&resolved, e)),
        };

        let contents: Option<Vec<T>> = serde_json::from_str(&json)
            .map_err(|e| StoreError::schema_invalid(&resolved, e))?;
        let Some(contents) = contents else {
            return Err(StoreError::DocumentEmpty(resolved));
        };
        contents
            .into_iter()
            .next()
            .ok_or(StoreError::DocumentEmpty(resolved))
    }

    /// Delete a document
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] if the file is absent
    /// - [`StoreError::Io`] if removal fails
    pub fn delete(&self, path: &DocPath) -> Result<(), StoreError> {
        let resolved = self.resolve_document(path)?;
        if !resolved.is_file() {
            return Err(StoreError::NotFound(resolved));
        }
        fs::remove_file(&resolved).map_err(|e| StoreError::io_error(&resolved, e))?;
        tracing::debug!("deleted document {}", resolved.display());
        Ok(())
    }

    /// Check whether a document exists at the given path
    #[must_use]
    pub fn exists(&self, path: &DocPath) -> bool {
        self.resolve_document(path)
            .map(|resolved| resolved.is_file())
            .unwrap_or(false)
    }

    /// List document names (file stems) in a directory, sorted
    ///
    /// Files without the `.json` extension are ignored. A missing
    /// directory reads as [`StoreError::NotFound`].
    pub fn scan(&self, dir: &DocPath) -> Result<Vec<String>, StoreError> {
        let resolved = self.resolve_directory(dir)?;
        if !resolved.is_dir() {
            return Err(StoreError::NotFound(resolved));
        }

        let mut names = Vec::new();
        let entries = fs::read_dir(&resolved).map_err(|e| StoreError::io_error(&resolved, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io_error(&resolved, e))?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
