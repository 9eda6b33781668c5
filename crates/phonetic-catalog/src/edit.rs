//! Interactive create/modify flow
//!
//! The dialog collaborator is modeled as a blocking request/response
//! exchange: the [`EditBroker`] holds at most one pending draft, the
//! collaborator mutates it, and resolution is always one of
//! [`EditOutcome::Success`] or [`EditOutcome::Cancelled`]. Closing the
//! collaborator without an explicit success resolves to `Cancelled`.

use crate::entry::CatalogEntry;
use crate::error::EditError;
use crate::section::{SectionRegistry, CUSTOM_INDEX};
use phonetic_store::DocumentStore;

/// Resolution of a create/modify request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The collaborator confirmed; the finished entry is attached
    Success(CatalogEntry),
    /// The collaborator was dismissed without confirming
    Cancelled,
}

/// Pending request state
#[derive(Debug, Clone)]
struct PendingEdit {
    draft: CatalogEntry,
}

/// Single-slot broker for create/modify requests
///
/// At most one request is outstanding at a time; a second `begin_*`
/// while one is pending is rejected with [`EditError::Pending`].
#[derive(Debug, Clone, Default)]
pub struct EditBroker {
    pending: Option<PendingEdit>,
}

impl EditBroker {
    /// Create new idle broker
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a request is outstanding
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a create request with an empty draft
    ///
    /// # Errors
    /// [`EditError::Pending`] if a request is already outstanding.
    pub fn begin_create(&mut self) -> Result<&mut CatalogEntry, EditError> {
        if self.pending.is_some() {
            return Err(EditError::Pending);
        }
        let pending = self.pending.insert(PendingEdit {
            draft: CatalogEntry::draft(),
        });
        Ok(&mut pending.draft)
    }

    /// Start a modify request derived from an existing entry
    ///
    /// Permission is checked before anything else happens: headers are
    /// never editable, and only the author may modify an entry. No
    /// document is touched here.
    ///
    /// # Errors
    /// - [`EditError::Pending`] if a request is already outstanding
    /// - [`EditError::IsHeader`] for a section header
    /// - [`EditError::Permission`] if `identity` is not the author
    pub fn begin_modify(
        &mut self,
        existing: &CatalogEntry,
        identity: &str,
    ) -> Result<&mut CatalogEntry, EditError> {
        if self.pending.is_some() {
            return Err(EditError::Pending);
        }
        if existing.is_header() {
            return Err(EditError::IsHeader(existing.name().to_string()));
        }
        if !existing.current_user_is_author(identity) {
            return Err(EditError::permission(identity, existing.author()));
        }

        let mut draft = CatalogEntry::draft();
        draft.set_name(existing.name());
        draft.set_words(existing.words().words().to_vec());
        let pending = self.pending.insert(PendingEdit { draft });
        Ok(&mut pending.draft)
    }

    /// Get the pending draft for the collaborator to fill in
    #[inline]
    pub fn draft_mut(&mut self) -> Option<&mut CatalogEntry> {
        self.pending.as_mut().map(|p| &mut p.draft)
    }

    /// Resolve the pending request successfully
    ///
    /// Finished sets always land in the `Custom` section.
    ///
    /// # Errors
    /// [`EditError::NotPending`] if no request is outstanding.
    pub fn complete_success(
        &mut self,
        registry: &SectionRegistry,
    ) -> Result<EditOutcome, EditError> {
        let pending = self.pending.take().ok_or(EditError::NotPending)?;
        let mut entry = pending.draft;
        entry.set_section(CUSTOM_INDEX as i64, registry);
        Ok(EditOutcome::Success(entry))
    }

    /// Resolve the pending request as cancelled
    ///
    /// Also used when the collaborator closes without confirming. Safe
    /// to call while idle.
    pub fn cancel(&mut self) -> EditOutcome {
        self.pending = None;
        EditOutcome::Cancelled
    }
}

/// Persist a successfully completed edit
///
/// For a fresh create (`replacing` is `None`), an entry whose document
/// already exists is refused so creates never silently overwrite. For
/// a modify that renamed the entry, the old document is removed first.
/// Callers reload the catalog afterwards.
///
/// # Errors
/// - [`EditError::AlreadyExists`] on a create name collision
/// - [`EditError::Store`] / [`EditError::Catalog`] on IO failure
pub fn commit(
    store: &DocumentStore,
    entry: &CatalogEntry,
    replacing: Option<&CatalogEntry>,
) -> Result<(), EditError> {
    match replacing {
        Some(old) => {
            if old.name() != entry.name() {
                old.remove(store)?;
            }
        }
        None => {
            if store.exists(&entry.document_path()) {
                return Err(EditError::AlreadyExists(entry.name().to_string()));
            }
        }
    }
    entry.store(store)?;
    Ok(())
}

/// Delete an entry's backing document on behalf of an identity
///
/// Gated the same way as modification: headers are never deletable and
/// only the author may delete. Both checks happen before the store is
/// touched.
///
/// # Errors
/// - [`EditError::IsHeader`] for a section header
/// - [`EditError::Permission`] if `identity` is not the author
/// - [`EditError::Catalog`] if removal fails
pub fn delete(
    store: &DocumentStore,
    entry: &CatalogEntry,
    identity: &str,
) -> Result<(), EditError> {
    if entry.is_header() {
        return Err(EditError::IsHeader(entry.name().to_string()));
    }
    if !entry.current_user_is_author(identity) {
        return Err(EditError::permission(identity, entry.author()));
    }
    entry.remove(store)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::current_username;
    use crate::word_list::ALPHABET;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn registry() -> SectionRegistry {
        SectionRegistry::builtin()
    }

    fn valid_words() -> Vec<String> {
        ALPHABET.chars().map(|c| format!("{c}_word")).collect()
    }

    fn owned_entry(name: &str) -> CatalogEntry {
        CatalogEntry::new(name, 1, Some(valid_words()), &registry())
    }

    #[test]
    fn begin_create_gives_current_user_draft() {
        let mut broker = EditBroker::new();
        let draft = broker.begin_create().unwrap();
        assert_eq!(draft.author(), current_username());
        assert!(broker.is_pending());
    }

    #[test]
    fn second_begin_is_rejected_while_pending() {
        let mut broker = EditBroker::new();
        broker.begin_create().unwrap();
        let result = broker.begin_create();
        assert!(matches!(result, Err(EditError::Pending)));
    }

    #[test]
    fn begin_modify_rejects_header() {
        let mut broker = EditBroker::new();
        let header = CatalogEntry::header(1, &registry());
        let result = broker.begin_modify(&header, &current_username());
        assert!(matches!(result, Err(EditError::IsHeader(_))));
        assert!(!broker.is_pending());
    }

    #[test]
    fn begin_modify_rejects_non_author() {
        let mut broker = EditBroker::new();
        let entry = owned_entry("theirs");
        let result = broker.begin_modify(&entry, "somebody_else");
        assert!(matches!(result, Err(EditError::Permission { .. })));
    }

    #[test]
    fn begin_modify_copies_name_and_words() {
        let mut broker = EditBroker::new();
        let entry = owned_entry("mine");
        let draft = broker.begin_modify(&entry, &current_username()).unwrap();
        assert_eq!(draft.name(), "mine");
        assert_eq!(draft.words(), entry.words());
    }

    #[test]
    fn complete_success_lands_in_custom() {
        let mut broker = EditBroker::new();
        let draft = broker.begin_create().unwrap();
        draft.set_name("fresh");
        draft.set_words(valid_words());

        let outcome = broker.complete_success(&registry()).unwrap();
        let EditOutcome::Success(entry) = outcome else {
            panic!("expected success");
        };
        assert_eq!(entry.section_index(), CUSTOM_INDEX);
        assert!(!broker.is_pending());
    }

    #[test]
    fn complete_without_pending_is_rejected() {
        let mut broker = EditBroker::new();
        let result = broker.complete_success(&registry());
        assert!(matches!(result, Err(EditError::NotPending)));
    }

    #[test]
    fn cancel_resolves_cancelled_and_clears_pending() {
        let mut broker = EditBroker::new();
        broker.begin_create().unwrap();
        assert_eq!(broker.cancel(), EditOutcome::Cancelled);
        assert!(!broker.is_pending());

        // idle cancel is still a cancellation
        assert_eq!(broker.cancel(), EditOutcome::Cancelled);
    }

    #[test]
    fn delete_by_author_removes_document() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());
        let entry = owned_entry("mine");
        entry.store(&store).unwrap();

        delete(&store, &entry, &current_username()).unwrap();
        assert!(!store.exists(&entry.document_path()));
    }

    #[test]
    fn delete_by_non_author_is_rejected_before_any_write() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());
        let mut entry = owned_entry("theirs");
        entry.set_author("somebody_else");
        entry.store(&store).unwrap();

        let result = delete(&store, &entry, &current_username());
        assert!(matches!(result, Err(EditError::Permission { .. })));
        assert!(store.exists(&entry.document_path()));
    }

    #[test]
    fn delete_header_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());
        let header = CatalogEntry::header(1, &registry());

        let result = delete(&store, &header, &current_username());
        assert!(matches!(result, Err(EditError::IsHeader(_))));
    }

    #[test]
    fn commit_create_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());
        let existing = owned_entry("taken");
        existing.store(&store).unwrap();

        let fresh = owned_entry("taken");
        let result = commit(&store, &fresh, None);
        assert!(matches!(result, Err(EditError::AlreadyExists(_))));
    }

    #[test]
    fn commit_modify_with_rename_removes_old_document() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());
        let old = owned_entry("before");
        old.store(&store).unwrap();

        let renamed = owned_entry("after");
        commit(&store, &renamed, Some(&old)).unwrap();

        assert!(!store.exists(&old.document_path()));
        assert!(store.exists(&renamed.document_path()));
    }

    #[test]
    fn commit_modify_same_name_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());
        let old = owned_entry("same");
        old.store(&store).unwrap();

        let mut updated = owned_entry("same");
        updated.set_word('a', "anchor").unwrap();
        commit(&store, &updated, Some(&old)).unwrap();

        let loaded = CatalogEntry::load(&store, "same", &registry()).unwrap();
        assert_eq!(loaded.words().get('a').unwrap(), "anchor");
    }
}
