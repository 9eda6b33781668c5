//! Phonetic Document Store
//!
//! Generic read/write/delete of single-object JSON documents with
//! path validation.
//!
//! # Core Concepts
//!
//! - [`DocumentStore`]: typed document IO under a fixed root
//! - [`DocPath`]: segment-based relative document address
//! - [`StoreError`]: store error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use phonetic_store::{DocPath, DocumentStore};
//!
//! let store = DocumentStore::current_dir()?;
//! let path = DocPath::from(["Phonetics", "Sections.json"].as_slice());
//! let sections: Vec<Section> = store.read(&path)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod path;
mod store;

pub use error::StoreError;
pub use path::{DocPath, DOC_EXTENSION};
pub use store::DocumentStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
