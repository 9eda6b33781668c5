//! Testing utilities for the phonetic catalog workspace
//!
//! Shared fixtures: temp-rooted stores, canned word lists and helpers
//! for seeding catalog documents on disk.

#![allow(missing_docs)]

use phonetic_catalog::{CatalogEntry, EntryRecord, Section, ALPHABET};
use phonetic_store::{DocPath, DocumentStore};
use tempfile::TempDir;

/// Store rooted in a fresh temp directory; keep the guard alive
pub fn temp_store() -> (TempDir, DocumentStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = DocumentStore::new(dir.path());
    (dir, store)
}

/// 26 words of the shape `<letter><suffix>`
pub fn letter_words(suffix: &str) -> Vec<String> {
    ALPHABET.chars().map(|c| format!("{c}{suffix}")).collect()
}

/// The NATO alphabet, a realistic valid word list
pub fn nato_words() -> Vec<String> {
    [
        "alfa", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliett", "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo",
        "sierra", "tango", "uniform", "victor", "whiskey", "xray", "yankee", "zulu",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Write the sections configuration document
pub fn write_sections(store: &DocumentStore, sections: &[(&str, Option<&str>)]) {
    let sections: Vec<Section> = sections
        .iter()
        .map(|(name, warning)| Section::new(*name, warning.map(str::to_string)))
        .collect();
    store
        .write(&sections_path(), &sections)
        .expect("write sections");
}

/// Write an empty sections configuration (built-ins only after load)
pub fn write_empty_sections(store: &DocumentStore) {
    write_sections(store, &[]);
}

/// Write an entry document directly, bypassing entry validation
pub fn write_entry_record(
    store: &DocumentStore,
    name: &str,
    section: i64,
    author: &str,
    words: Vec<String>,
) {
    let record = EntryRecord {
        name: name.to_string(),
        section,
        author: author.to_string(),
        word_list: words,
    };
    store
        .write(&entry_path(name), &record)
        .expect("write entry record");
}

/// Write raw bytes at a path under the store root, for malformed docs
pub fn write_raw(store: &DocumentStore, relative: &str, contents: &str) {
    let path = store.root().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, contents).expect("write raw file");
}

/// Location of the sections document
pub fn sections_path() -> DocPath {
    CatalogEntry::base_path().child("Sections.json")
}

/// Location of an entry document by name
pub fn entry_path(name: &str) -> DocPath {
    CatalogEntry::lists_path().child(format!("{name}.json"))
}

/// Make sure the lists directory exists even when no entries are seeded
pub fn ensure_lists_dir(store: &DocumentStore) {
    let dir = store.root().join("Phonetics").join("Lists");
    std::fs::create_dir_all(dir).expect("create lists dir");
}
