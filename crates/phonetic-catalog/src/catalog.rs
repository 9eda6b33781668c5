//! Catalog index
//!
//! Groups entries by section, synthesizes header pseudo-entries, and
//! flattens the two-level structure into a stable pointer list for
//! selection. The index is derived state: every load rebuilds it
//! wholesale, nothing is updated incrementally.

use crate::encoder;
use crate::entry::CatalogEntry;
use crate::error::{CatalogError, WordListError};
use crate::section::{Section, SectionRegistry, CUSTOM_INDEX, CUSTOM_SECTION, NONE_SECTION};
use indexmap::IndexMap;
use phonetic_store::{DocPath, DocumentStore};
use serde::{Deserialize, Serialize};

/// Catalog load settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Location of the sections document
    pub sections_path: DocPath,
    /// Directory holding the entry documents
    pub lists_dir: DocPath,
    /// Entry name to preselect after a load, if present
    pub default_selection: Option<String>,
}

impl CatalogConfig {
    /// Create config with the standard document layout
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a default selection name
    #[inline]
    #[must_use]
    pub fn with_default_selection(mut self, name: impl Into<String>) -> Self {
        self.default_selection = Some(name.into());
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sections_path: CatalogEntry::base_path().child("Sections.json"),
            lists_dir: CatalogEntry::lists_path(),
            default_selection: None,
        }
    }
}

/// Address of an entry within the catalog's section/slot structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pointer {
    /// Section group name
    pub section: String,
    /// Slot within the group; slot 0 is the header
    pub slot: usize,
}

impl Pointer {
    /// Create new pointer
    #[inline]
    #[must_use]
    pub fn new(section: impl Into<String>, slot: usize) -> Self {
        Self {
            section: section.into(),
            slot,
        }
    }
}

/// Set of pointers eligible for sampling by the encoder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionGroup(Vec<Pointer>);

impl SelectionGroup {
    /// Get the pointers in the group
    #[inline]
    #[must_use]
    pub fn pointers(&self) -> &[Pointer] {
        &self.0
    }

    /// Get number of pointers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the group is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the pointers
    pub fn iter(&self) -> impl Iterator<Item = &Pointer> {
        self.0.iter()
    }
}

/// The loaded catalog: registry, section groups and flat pointer list
///
/// Built whole by [`Catalog::load`]; reload means building a new value
/// and swapping it in. Single-threaded by design, callers wanting
/// shared access wrap it in their own synchronization.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: SectionRegistry,
    groups: IndexMap<String, Vec<CatalogEntry>>,
    pointers: Vec<Pointer>,
    default_index: Option<usize>,
}

impl Catalog {
    /// Load the catalog from a document store
    ///
    /// 1. Loads the section registry (fatal on any config problem).
    /// 2. Opens one group per section, seeded with a synthetic header;
    ///    `None` is excluded entirely and `Custom` always goes last.
    /// 3. Scans the lists directory, loading each entry document. A
    ///    document that is missing, empty or malformed is skipped; an
    ///    entry resolving to the `None` section is discarded.
    /// 4. Flattens groups into the pointer list, dropping groups that
    ///    hold only their header.
    ///
    /// # Errors
    /// - [`CatalogError::Config`] (fatal) from the section registry
    /// - [`CatalogError::Store`] if the lists directory is unreadable
    pub fn load(store: &DocumentStore, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let registry = SectionRegistry::load(store, &config.sections_path)?;

        // one group per section, header first; Custom is appended last
        let mut groups: IndexMap<String, Vec<CatalogEntry>> = IndexMap::new();
        for (index, section) in registry.iter().enumerate() {
            if section.name.eq_ignore_ascii_case(NONE_SECTION)
                || section.name.eq_ignore_ascii_case(CUSTOM_SECTION)
            {
                continue;
            }
            groups.insert(
                section.name.clone(),
                vec![CatalogEntry::header(index as i64, &registry)],
            );
        }
        groups.insert(
            CUSTOM_SECTION.to_string(),
            vec![CatalogEntry::header(CUSTOM_INDEX as i64, &registry)],
        );

        // sort loaded entries into their groups, skipping bad documents
        let names = store.scan(&config.lists_dir)?;
        let mut skipped = 0usize;
        for name in &names {
            let entry = match CatalogEntry::load(store, name, &registry) {
                Ok(entry) => entry,
                Err(e) if e.is_skippable() => {
                    tracing::warn!("skipping phonetic set '{name}': {e}");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let Some(section_name) = registry.get(entry.section_index()).map(|s| s.name.clone())
            else {
                continue;
            };
            if section_name.eq_ignore_ascii_case(NONE_SECTION) {
                tracing::debug!("discarding '{name}', it belongs to the None section");
                continue;
            }
            if let Some(group) = groups.get_mut(&section_name) {
                group.push(entry);
            }
        }

        // flatten groups into the pointer list; header-only groups are
        // invisible to selection
        let mut pointers = Vec::new();
        let mut default_index = None;
        for (section_name, group) in &groups {
            if group.len() <= 1 {
                continue;
            }
            for (slot, entry) in group.iter().enumerate() {
                pointers.push(Pointer::new(section_name.clone(), slot));
                if default_index.is_none()
                    && config
                        .default_selection
                        .as_deref()
                        .is_some_and(|d| d == entry.name())
                {
                    default_index = Some(pointers.len() - 1);
                }
            }
        }

        tracing::info!(
            "catalog loaded: {} sections, {} selectable entries, {} skipped",
            registry.len(),
            pointers.len(),
            skipped
        );

        Ok(Self {
            registry,
            groups,
            pointers,
            default_index,
        })
    }

    /// Get the section registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Get the flat pointer list
    #[inline]
    #[must_use]
    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    /// Flat position of the configured default selection, if present
    #[inline]
    #[must_use]
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    /// Resolve a pointer to its entry
    #[inline]
    #[must_use]
    pub fn entry(&self, pointer: &Pointer) -> Option<&CatalogEntry> {
        self.groups.get(&pointer.section)?.get(pointer.slot)
    }

    /// UI names for the flat pointer list, in order
    #[must_use]
    pub fn display_names(&self) -> Vec<String> {
        self.pointers
            .iter()
            .filter_map(|p| self.entry(p))
            .map(|e| e.display_name(&self.registry))
            .collect()
    }

    /// Warning attached to a pointer's section, if any
    #[must_use]
    pub fn warning_for(&self, pointer: &Pointer) -> Option<&str> {
        self.registry
            .iter()
            .find(|s| s.name == pointer.section)
            .and_then(|s: &Section| s.warning.as_deref())
    }

    /// Resolve a flat index into a selection group
    ///
    /// A header pointer expands to every non-header pointer of its
    /// section; a concrete pointer yields a singleton.
    ///
    /// # Panics
    /// If `index` is outside the flat pointer list; out-of-range
    /// selection is a caller error.
    #[must_use]
    pub fn select(&self, index: usize) -> SelectionGroup {
        let target = &self.pointers[index];
        let is_header = self.entry(target).is_some_and(CatalogEntry::is_header);
        if is_header {
            let members = self
                .pointers
                .iter()
                .filter(|p| p.section == target.section)
                .filter(|p| self.entry(p).is_some_and(|e| !e.is_header()))
                .cloned()
                .collect();
            SelectionGroup(members)
        } else {
            SelectionGroup(vec![target.clone()])
        }
    }

    /// Expand input text into its phonetic rendering
    ///
    /// Each character samples one group member at random. An empty
    /// group produces empty output.
    ///
    /// # Errors
    /// [`WordListError::NotAlphabetic`] if the text holds an alphabetic
    /// character outside a–z.
    pub fn encode(&self, text: &str, group: &SelectionGroup) -> Result<String, WordListError> {
        self.encode_with(text, group, &mut rand::rng())
    }

    /// [`Catalog::encode`] with a caller-supplied random source
    pub fn encode_with<R: rand::Rng + ?Sized>(
        &self,
        text: &str,
        group: &SelectionGroup,
        rng: &mut R,
    ) -> Result<String, WordListError> {
        let entries: Vec<&CatalogEntry> = group.iter().filter_map(|p| self.entry(p)).collect();
        encoder::encode(text, &entries, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_group_default_is_empty() {
        let group = SelectionGroup::default();
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
    }

    #[test]
    fn pointer_equality() {
        assert_eq!(Pointer::new("Nato", 1), Pointer::new("Nato", 1));
        assert_ne!(Pointer::new("Nato", 1), Pointer::new("Nato", 2));
    }

    #[test]
    fn config_default_layout() {
        let config = CatalogConfig::new();
        assert_eq!(config.sections_path.to_string(), "Phonetics/Sections.json");
        assert_eq!(config.lists_dir.to_string(), "Phonetics/Lists");
        assert_eq!(config.default_selection, None);
    }

    #[test]
    fn config_with_default_selection() {
        let config = CatalogConfig::new().with_default_selection("HelpDesk");
        assert_eq!(config.default_selection.as_deref(), Some("HelpDesk"));
    }
}
