//! Phonetic Alphabet Catalog
//!
//! Maintains a catalog of named phonetic alphabets (one substitute
//! word per letter a–z) organized into sections, persisted as JSON
//! documents, and used to expand arbitrary input text into a phonetic
//! rendering.
//!
//! # Core Concepts
//!
//! - [`WordList`]: fixed 26-slot, alphabet-ordered word container
//! - [`SectionRegistry`]: named categories with optional warnings
//! - [`CatalogEntry`]: named document = word list + section + author
//! - [`Catalog`]: section groups, synthetic headers, flat pointer list
//! - [`SelectionGroup`]: entries eligible for encoder sampling
//! - [`EditBroker`]: single-pending create/modify request flow
//!
//! # Example
//!
//! ```rust,ignore
//! use phonetic_catalog::{Catalog, CatalogConfig};
//! use phonetic_store::DocumentStore;
//!
//! let store = DocumentStore::current_dir()?;
//! let catalog = Catalog::load(&store, &CatalogConfig::new())?;
//! let group = catalog.select(0);
//! let output = catalog.encode("Hello", &group)?;
//! ```
//!
//! This crate is a library consumed by a presentation layer; it has no
//! command-line surface and installs no tracing subscriber.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod catalog;
mod edit;
mod encoder;
mod entry;
mod error;
mod identity;
mod section;
mod word_list;

pub use catalog::{Catalog, CatalogConfig, Pointer, SelectionGroup};
pub use edit::{commit, delete, EditBroker, EditOutcome};
pub use encoder::{encode, NUMBER_PREFIX, SEPARATOR};
pub use entry::{CatalogEntry, EntryRecord, DEFAULT_NAME, NAME_MAX_LEN, SYSTEM_AUTHOR};
pub use error::{CatalogError, ConfigError, EditError, WordListError};
pub use identity::{current_username, UNKNOWN_USER};
pub use section::{
    Section, SectionRegistry, CUSTOM_INDEX, CUSTOM_SECTION, NONE_INDEX, NONE_SECTION,
};
pub use word_list::{WordList, ALPHABET, ALPHABET_LEN};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
