//! Section registry
//!
//! Sections are named categories of catalog entries, each with an
//! optional user-facing warning. Two built-ins occupy fixed positions;
//! the rest come from a configuration document. Any problem with the
//! configured sections is fatal to the whole catalog load.

use crate::error::ConfigError;
use phonetic_store::{DocPath, DocumentStore};
use serde::{Deserialize, Serialize};

/// Name of the built-in section at index 0, excluded from the catalog
pub const NONE_SECTION: &str = "None";

/// Name of the built-in section at index 1 for user-made entries
pub const CUSTOM_SECTION: &str = "Custom";

/// Registry index of the `None` built-in
pub const NONE_INDEX: usize = 0;

/// Registry index of the `Custom` built-in
pub const CUSTOM_INDEX: usize = 1;

const CUSTOM_WARNING: &str =
    "This section is made by other users and should be used carefully!";

/// Named category of catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name, unique within a registry
    pub name: String,
    /// Optional warning surfaced when the section is selected
    #[serde(default)]
    pub warning: Option<String>,
}

impl Section {
    /// Create new section
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, warning: Option<String>) -> Self {
        Self {
            name: name.into(),
            warning,
        }
    }

    /// Check if the section carries a warning
    #[inline]
    #[must_use]
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }
}

/// Loaded shape of a configured section, tolerating a null name so the
/// error can name the offender instead of failing as a schema error
#[derive(Debug, Deserialize)]
struct SectionRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    warning: Option<String>,
}

/// Ordered, uniquely-named collection of sections
///
/// Index 0 is always [`NONE_SECTION`] and index 1 [`CUSTOM_SECTION`].
/// A registry is built whole by [`SectionRegistry::load`] and swapped
/// wholesale on reload; it is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Registry holding only the two built-ins
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sections: vec![
                Section::new(NONE_SECTION, None),
                Section::new(CUSTOM_SECTION, Some(CUSTOM_WARNING.to_string())),
            ],
        }
    }

    /// Load the registry from a sections document
    ///
    /// The built-ins are placed first, then each configured section is
    /// appended after checking that it has a non-empty name unique
    /// across the registry (built-ins included).
    ///
    /// # Errors
    /// Any [`ConfigError`] is fatal; no partial registry is produced.
    pub fn load(store: &DocumentStore, path: &DocPath) -> Result<Self, ConfigError> {
        let loaded: Vec<SectionRecord> = store.read(path)?;

        let mut registry = Self::builtin();
        for record in loaded {
            let name = match record.name {
                Some(name) if !name.is_empty() => name,
                _ => {
                    return Err(ConfigError::UnnamedSection {
                        warning: record.warning,
                    });
                }
            };
            if registry.position(&name).is_some() {
                return Err(ConfigError::DuplicateSection(name));
            }
            registry.sections.push(Section::new(name, record.warning));
        }

        tracing::debug!("loaded {} sections", registry.len());
        Ok(registry)
    }

    /// Get section by registry index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Find the index of a section by exact name
    #[inline]
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    /// Check if an index addresses a section
    #[inline]
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.sections.len()
    }

    /// Get number of sections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the registry is empty (never true for a built one)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
