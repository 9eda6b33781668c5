//! Error types for the catalog
//!
//! Taxonomy in three tiers:
//! - [`ConfigError`] is fatal: section configuration must be sound or
//!   the whole catalog load aborts.
//! - [`StoreError`] on a single entry document is skippable: the entry
//!   is dropped and the load continues.
//! - Everything else is recoverable at the call site.

use phonetic_store::StoreError;

/// Fatal errors while loading the section configuration
///
/// No partial registry survives any of these; callers abort the
/// catalog load.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Sections document missing, malformed or empty
    #[error("sections document could not be read: {0}")]
    Sections(#[from] StoreError),

    /// Loaded section carries no name
    #[error("section names cannot be empty (warning: {warning:?})")]
    UnnamedSection { warning: Option<String> },

    /// Loaded section name collides with an existing one
    #[error("two sections cannot have the same name: {0}")]
    DuplicateSection(String),
}

/// Errors from word list operations
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// Letter is outside the alphabet
    #[error("the provided letter is not alphabetic: '{0}'")]
    NotAlphabetic(char),

    /// Replacement list does not hold one word per letter
    #[error("a word list can only have a length of 26, got {0}")]
    WrongLength(usize),

    /// Word does not lead with its slot's letter
    #[error("word list invalid, expected '{expected}' leading word \"{word}\"")]
    LeadingLetterMismatch { word: String, expected: char },
}

/// Errors from catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Fatal section configuration failure
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document store failure outside the per-entry skip set
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Attempted deletion of a synthetic section header
    #[error("{0}: this is a section header; it cannot be deleted")]
    CannotDelete(String),
}

/// Errors from the create/modify edit flow
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// Another request is outstanding; only one may be pending
    #[error("another create/modify request is already pending")]
    Pending,

    /// No request is outstanding
    #[error("no pending create/modify request to complete")]
    NotPending,

    /// Section headers cannot be modified
    #[error("{0}: section headers cannot be modified")]
    IsHeader(String),

    /// Current user is not the author of the target entry
    #[error("'{user}' cannot change this set, it is authored by '{author}'")]
    Permission { user: String, author: String },

    /// Creating would overwrite an existing document
    #[error("a phonetic set named '{0}' already exists")]
    AlreadyExists(String),

    /// Document store failure while committing
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Catalog failure while committing
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl EditError {
    /// Create permission error for a user/author pair
    pub fn permission(user: impl Into<String>, author: impl Into<String>) -> Self {
        Self::Permission {
            user: user.into(),
            author: author.into(),
        }
    }
}
