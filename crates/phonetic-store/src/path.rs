//! Document paths for addressing within a store
//!
//! Provides [`DocPath`] for segment-based addressing of documents
//! relative to a store root.

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Filename extension every document must carry
pub const DOC_EXTENSION: &str = ".json";

/// Relative path to a document or directory inside a store
///
/// Held as ordered segments rather than a platform string so callers
/// can build paths without worrying about separators.
///
/// # Examples
/// - `["Phonetics", "Sections.json"]` → `Phonetics/Sections.json`
/// - `["Phonetics", "Lists"]` → `Phonetics/Lists` (directory)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocPath(Vec<String>);

impl DocPath {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Create path from a single segment
    #[inline]
    #[must_use]
    pub fn single(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path has no segments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get last segment, the file or directory name
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(|s| s.as_str())
    }

    /// Append a segment, returning a new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Check if the last segment carries the document extension
    #[inline]
    #[must_use]
    pub fn is_document(&self) -> bool {
        self.last().is_some_and(|s| s.ends_with(DOC_EXTENSION))
    }

    /// Resolve against a root directory into a filesystem path
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut full = root.to_path_buf();
        for segment in &self.0 {
            full.push(segment);
        }
        full
    }
}

impl Display for DocPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl From<Vec<String>> for DocPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for DocPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| (*s).to_string()).collect())
    }
}
