//! Error types for the document store

use std::path::PathBuf;

/// Errors during document store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Path does not end with the document extension
    #[error("path does not end with a .json document: '{0}'")]
    Extension(String),

    /// Resolved path is empty or not absolute
    #[error("path is not a valid absolute location: '{0}'")]
    InvalidPath(String),

    /// Parent directory is missing and directory creation is disabled
    #[error("not an existing directory: {0}")]
    DirectoryNotFound(PathBuf),

    /// Target document does not exist
    #[error("not an existing file: {0}")]
    NotFound(PathBuf),

    /// Document failed to parse against the expected schema
    #[error("document {path} is not valid JSON for the expected type: {source}")]
    SchemaInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document wrapper is null or holds no elements
    #[error("document has no contents: {0}")]
    DocumentEmpty(PathBuf),

    /// IO error during read, write or delete
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create schema error for path
    pub fn schema_invalid(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SchemaInvalid {
            path: path.into(),
            source,
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error marks a single unreadable document rather
    /// than a broken store
    ///
    /// Catalog loading skips documents that fail this way instead of
    /// aborting the whole scan.
    #[inline]
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::DocumentEmpty(_) | Self::SchemaInvalid { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_error_display() {
        let err = StoreError::Extension("file.txt".to_string());
        assert_eq!(
            err.to_string(),
            "path does not end with a .json document: 'file.txt'"
        );
    }

    #[test]
    fn not_found_display() {
        let err = StoreError::NotFound(PathBuf::from("/x/y.json"));
        assert!(err.to_string().contains("not an existing file"));
    }

    #[test]
    fn skippable_classification() {
        assert!(StoreError::NotFound(PathBuf::new()).is_skippable());
        assert!(StoreError::DocumentEmpty(PathBuf::new()).is_skippable());
        assert!(!StoreError::Extension(String::new()).is_skippable());
        assert!(!StoreError::DirectoryNotFound(PathBuf::new()).is_skippable());
    }
}
