//! Catalog entries
//!
//! A [`CatalogEntry`] is a named phonetic alphabet: a word list plus a
//! section reference, an author and a header flag. Non-header entries
//! are backed by a document whose location is fully determined by the
//! entry name; header entries are synthetic and never persisted.

use crate::error::CatalogError;
use crate::identity::current_username;
use crate::section::SectionRegistry;
use crate::word_list::WordList;
use phonetic_store::{DocPath, DocumentStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Maximum length an entry name may have; longer names are truncated
pub const NAME_MAX_LEN: usize = 30;

/// Author recorded on synthetic entries
pub const SYSTEM_AUTHOR: &str = "System";

/// Name given to entries before one is chosen
pub const DEFAULT_NAME: &str = "default";

const HEADER_PRECURSOR: &str = " --- ";
const HEADER_POSTCURSOR: &str = " Section --- ";

/// Validation policy for entry fields
///
/// Every silently-recovering rule lives here so the policy can be
/// tightened in one place. Current behavior: truncate, retain, or
/// substitute rather than fail.
mod policy {
    use super::NAME_MAX_LEN;
    use crate::section::SectionRegistry;
    use crate::word_list::WordList;

    /// Names longer than the cap are truncated, never rejected
    pub(super) fn accept_name(name: &str) -> String {
        match name.char_indices().nth(NAME_MAX_LEN) {
            Some((byte, _)) => name[..byte].to_string(),
            None => name.to_string(),
        }
    }

    /// Out-of-range section indexes keep the current value
    pub(super) fn accept_section(
        current: usize,
        proposed: i64,
        registry: &SectionRegistry,
    ) -> usize {
        match usize::try_from(proposed) {
            Ok(index) if registry.contains_index(index) => index,
            _ => current,
        }
    }

    /// Invalid word lists are replaced by the placeholder list
    pub(super) fn accept_words(words: Vec<String>) -> WordList {
        match WordList::new(words) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("invalid word list substituted with defaults: {e}");
                WordList::defaults()
            }
        }
    }
}

/// Persisted shape of a catalog entry
///
/// Lives at `Phonetics/Lists/<name>.json`, wrapped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Entry name
    pub name: String,
    /// Section registry index
    pub section: i64,
    /// Author username
    pub author: String,
    /// The 26 substitute words
    pub word_list: Vec<String>,
}

/// Named phonetic alphabet within a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: String,
    section: usize,
    author: String,
    words: WordList,
    is_header: bool,
}

impl CatalogEntry {
    /// Create a fresh entry authored by the current user
    ///
    /// Fields pass through the validation policy: the name may be
    /// truncated, an out-of-range section falls back to `None` and an
    /// invalid word list is replaced with the placeholder list.
    #[must_use]
    pub fn new(
        name: &str,
        section: i64,
        words: Option<Vec<String>>,
        registry: &SectionRegistry,
    ) -> Self {
        let mut entry = Self::default();
        entry.author = current_username();
        entry.set_name(name);
        entry.set_section(section, registry);
        if let Some(words) = words {
            entry.set_words(words);
        }
        entry
    }

    /// Create an empty draft authored by the current user
    ///
    /// Starting point for the interactive create/modify flow.
    #[must_use]
    pub fn draft() -> Self {
        Self {
            author: current_username(),
            ..Self::default()
        }
    }

    /// Create the synthetic header entry for a section
    ///
    /// Headers carry the placeholder word list, are authored by
    /// [`SYSTEM_AUTHOR`] and are never persisted.
    #[must_use]
    pub fn header(section: i64, registry: &SectionRegistry) -> Self {
        let mut entry = Self {
            name: DEFAULT_NAME.to_string(),
            section: 0,
            author: SYSTEM_AUTHOR.to_string(),
            words: WordList::defaults(),
            is_header: true,
        };
        entry.set_section(section, registry);
        entry
    }

    /// Load an entry from its backing document
    ///
    /// The loaded record passes through the same validation policy as
    /// fresh entries; only store failures surface.
    ///
    /// # Errors
    /// Any [`StoreError`] from reading the document.
    pub fn load(
        store: &DocumentStore,
        name: &str,
        registry: &SectionRegistry,
    ) -> Result<Self, StoreError> {
        let path = Self::lists_path().child(format!("{name}{}", phonetic_store::DOC_EXTENSION));
        let record: EntryRecord = store.read(&path)?;

        let mut entry = Self {
            name: name.to_string(),
            ..Self::default()
        };
        entry.set_name(&record.name);
        entry.set_section(record.section, registry);
        entry.set_author(record.author);
        entry.set_words(record.word_list);
        Ok(entry)
    }

    /// Directory every catalog document lives under
    #[must_use]
    pub fn base_path() -> DocPath {
        DocPath::single("Phonetics")
    }

    /// Directory holding the entry documents
    #[must_use]
    pub fn lists_path() -> DocPath {
        Self::base_path().child("Lists")
    }

    /// Backing document location, derived from the entry name
    #[must_use]
    pub fn document_path(&self) -> DocPath {
        Self::lists_path().child(format!("{}{}", self.name, phonetic_store::DOC_EXTENSION))
    }

    /// Get the entry name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the section registry index
    #[inline]
    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section
    }

    /// Get the author username
    #[inline]
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the word list
    #[inline]
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Check if this is a synthetic section header
    #[inline]
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.is_header
    }

    /// Set the name, truncating past [`NAME_MAX_LEN`]
    pub fn set_name(&mut self, name: &str) {
        self.name = policy::accept_name(name);
    }

    /// Set the section index; out-of-range values keep the current one
    pub fn set_section(&mut self, section: i64, registry: &SectionRegistry) {
        self.section = policy::accept_section(self.section, section, registry);
    }

    /// Set the author, accepted verbatim
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Replace the word list; invalid lists become the placeholder list
    pub fn set_words(&mut self, words: Vec<String>) {
        self.words = policy::accept_words(words);
    }

    /// Set a single word by letter
    ///
    /// # Errors
    /// [`crate::WordListError::NotAlphabetic`] if the letter is outside
    /// the alphabet.
    pub fn set_word(
        &mut self,
        letter: char,
        word: impl Into<String>,
    ) -> Result<(), crate::error::WordListError> {
        self.words.set(letter, word)
    }

    /// Check whether the given identity authored this entry
    #[inline]
    #[must_use]
    pub fn current_user_is_author(&self, identity: &str) -> bool {
        self.author == identity
    }

    /// UI name: headers render as a framed section title
    #[must_use]
    pub fn display_name(&self, registry: &SectionRegistry) -> String {
        if self.is_header {
            let section = registry
                .get(self.section)
                .map(|s| s.name.as_str())
                .unwrap_or(DEFAULT_NAME);
            format!("{HEADER_PRECURSOR}{}{HEADER_POSTCURSOR}", name_case(section))
        } else {
            self.name.clone()
        }
    }

    /// Write the entry at its derived document path
    ///
    /// # Errors
    /// Any [`StoreError`] from the write.
    pub fn store(&self, store: &DocumentStore) -> Result<(), StoreError> {
        store.write(&self.document_path(), &self.to_record())
    }

    /// Delete the backing document, without an authorship check
    ///
    /// Callers acting on behalf of a user go through
    /// [`crate::delete`], which gates on the author first.
    ///
    /// # Errors
    /// - [`CatalogError::CannotDelete`] if this is a header
    /// - [`CatalogError::Store`] if the document cannot be removed
    pub fn remove(&self, store: &DocumentStore) -> Result<(), CatalogError> {
        if self.is_header {
            return Err(CatalogError::CannotDelete(self.name.clone()));
        }
        store.delete(&self.document_path())?;
        Ok(())
    }

    /// Persisted shape of this entry
    #[must_use]
    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            name: self.name.clone(),
            section: self.section as i64,
            author: self.author.clone(),
            word_list: self.words.words().to_vec(),
        }
    }
}

impl Default for CatalogEntry {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            section: 0, // None
            author: SYSTEM_AUTHOR.to_string(),
            words: WordList::default(),
            is_header: false,
        }
    }
}

impl Display for CatalogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (section {}, author {})",
            self.name, self.section, self.author
        )
    }
}

/// Capitalize the first letter, leaving the rest untouched
fn name_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
