//! End-to-end catalog tests against documents on disk

use phonetic_catalog::{
    commit, current_username, delete, Catalog, CatalogConfig, CatalogError, EditBroker,
    EditError, EditOutcome, SelectionGroup,
};
use phonetic_test_utils::{
    ensure_lists_dir, entry_path, letter_words, nato_words, temp_store, write_entry_record,
    write_raw, write_sections,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// One "Nato" section with three entries, one custom entry
fn seeded() -> (TempDir, phonetic_store::DocumentStore, CatalogConfig) {
    let (dir, store) = temp_store();
    write_sections(&store, &[("Nato", None)]);
    // "Nato" lands at registry index 2, after the two built-ins
    write_entry_record(&store, "alpha_set", 2, "author_a", letter_words("_one"));
    write_entry_record(&store, "beta_set", 2, "author_b", letter_words("_two"));
    write_entry_record(&store, "gamma_set", 2, "author_c", letter_words("_three"));
    write_entry_record(&store, "custom_set", 1, "author_d", nato_words());
    (dir, store, CatalogConfig::new())
}

#[test]
fn load_builds_flat_list_with_custom_last() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    assert_eq!(
        catalog.display_names(),
        vec![
            " --- Nato Section --- ".to_string(),
            "alpha_set".to_string(),
            "beta_set".to_string(),
            "gamma_set".to_string(),
            " --- Custom Section --- ".to_string(),
            "custom_set".to_string(),
        ]
    );
}

#[test]
fn malformed_entry_is_skipped_not_fatal() {
    let (_dir, store, config) = seeded();
    write_raw(&store, "Phonetics/Lists/broken.json", "{ not json");

    let catalog = Catalog::load(&store, &config).unwrap();
    let names = catalog.display_names();
    assert!(!names.iter().any(|n| n.contains("broken")));
    assert!(names.contains(&"alpha_set".to_string()));
}

#[test]
fn empty_entry_document_is_skipped_not_fatal() {
    let (_dir, store, config) = seeded();
    write_raw(&store, "Phonetics/Lists/hollow.json", "[]");

    let catalog = Catalog::load(&store, &config).unwrap();
    assert!(!catalog
        .display_names()
        .iter()
        .any(|n| n.contains("hollow")));
}

#[test]
fn none_section_entries_are_discarded() {
    let (_dir, store, config) = seeded();
    write_entry_record(&store, "hidden", 0, "author_x", letter_words("_none"));

    let catalog = Catalog::load(&store, &config).unwrap();
    assert!(!catalog.display_names().contains(&"hidden".to_string()));
}

#[test]
fn out_of_range_section_falls_back_to_none_and_is_discarded() {
    let (_dir, store, config) = seeded();
    write_entry_record(&store, "stray", 99, "author_x", letter_words("_oor"));

    let catalog = Catalog::load(&store, &config).unwrap();
    assert!(!catalog.display_names().contains(&"stray".to_string()));
}

#[test]
fn header_only_sections_are_invisible() {
    let (_dir, store) = temp_store();
    write_sections(&store, &[("Empty", None)]);
    ensure_lists_dir(&store);

    let catalog = Catalog::load(&store, &CatalogConfig::new()).unwrap();
    assert!(catalog.pointers().is_empty());
    assert_eq!(catalog.default_index(), None);
}

#[test]
fn duplicate_section_name_aborts_the_whole_load() {
    let (_dir, store) = temp_store();
    write_sections(&store, &[("Custom", None)]);
    ensure_lists_dir(&store);

    let result = Catalog::load(&store, &CatalogConfig::new());
    assert!(matches!(result, Err(CatalogError::Config(_))));
}

#[test]
fn default_index_points_at_configured_entry() {
    let (_dir, store, _) = seeded();
    let config = CatalogConfig::new().with_default_selection("beta_set");
    let catalog = Catalog::load(&store, &config).unwrap();
    // flat order: header, alpha_set, beta_set, ...
    assert_eq!(catalog.default_index(), Some(2));
}

#[test]
fn default_index_is_none_when_name_is_absent() {
    let (_dir, store, _) = seeded();
    let config = CatalogConfig::new().with_default_selection("nonexistent");
    let catalog = Catalog::load(&store, &config).unwrap();
    assert_eq!(catalog.default_index(), None);
}

#[test]
fn selecting_header_expands_to_section_members() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let group = catalog.select(0); // Nato header
    assert_eq!(group.len(), 3);
    for pointer in group.iter() {
        assert_eq!(pointer.section, "Nato");
        assert!(!catalog.entry(pointer).unwrap().is_header());
    }
}

#[test]
fn selecting_concrete_entry_yields_singleton() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let group = catalog.select(2); // beta_set
    assert_eq!(group.len(), 1);
    assert_eq!(
        catalog.entry(&group.pointers()[0]).unwrap().name(),
        "beta_set"
    );
}

#[test]
fn warning_surfaces_for_custom_section() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let custom_header = catalog
        .pointers()
        .iter()
        .position(|p| p.section == "Custom")
        .unwrap();
    let pointer = &catalog.pointers()[custom_header];
    assert!(catalog.warning_for(pointer).is_some());

    let nato_pointer = &catalog.pointers()[0];
    assert_eq!(catalog.warning_for(nato_pointer), None);
}

#[test]
fn encode_renders_one_line_per_character() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    // singleton group over the NATO entry, sampling cannot vary
    let custom_index = catalog
        .pointers()
        .iter()
        .position(|p| p.section == "Custom" && p.slot == 1)
        .unwrap();
    let group = catalog.select(custom_index);

    let mut rng = StdRng::seed_from_u64(42);
    let output = catalog.encode_with("Ab1 !", &group, &mut rng).unwrap();
    assert_eq!(output, "A  -  ALFA\nb  -  bravo\nThe number 1\n\n!\n");
}

#[test]
fn encode_with_empty_group_is_empty() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let output = catalog
        .encode("anything", &SelectionGroup::default())
        .unwrap();
    assert_eq!(output, "");
}

#[test]
fn deleted_entry_disappears_after_reload() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let group = catalog.select(2); // beta_set, authored by "author_b"
    let entry = catalog.entry(&group.pointers()[0]).unwrap();
    delete(&store, entry, "author_b").unwrap();

    let reloaded = Catalog::load(&store, &config).unwrap();
    assert!(!reloaded.display_names().contains(&"beta_set".to_string()));
}

#[test]
fn delete_by_non_author_is_rejected_and_document_survives() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let group = catalog.select(2); // beta_set, authored by "author_b"
    let entry = catalog.entry(&group.pointers()[0]).unwrap();
    let result = delete(&store, entry, "not_the_author");
    assert!(matches!(result, Err(EditError::Permission { .. })));

    let reloaded = Catalog::load(&store, &config).unwrap();
    assert!(reloaded.display_names().contains(&"beta_set".to_string()));
}

#[test]
fn removing_header_is_a_domain_error() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let header = catalog.entry(&catalog.pointers()[0]).unwrap();
    let result = header.remove(&store);
    assert!(matches!(result, Err(CatalogError::CannotDelete(_))));
}

#[test]
fn modify_by_non_author_is_rejected_before_any_write() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let group = catalog.select(1); // alpha_set, authored by "author_a"
    let entry = catalog.entry(&group.pointers()[0]).unwrap();

    let mut broker = EditBroker::new();
    let result = broker.begin_modify(entry, "not_the_author");
    assert!(matches!(result, Err(EditError::Permission { .. })));

    // the backing document is untouched
    let record: phonetic_catalog::EntryRecord = store.read(&entry_path("alpha_set")).unwrap();
    assert_eq!(record.author, "author_a");
    assert_eq!(record.word_list, letter_words("_one"));
}

#[test]
fn create_flow_commits_and_shows_up_after_reload() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let mut broker = EditBroker::new();
    let draft = broker.begin_create().unwrap();
    draft.set_name("mine");
    draft.set_words(nato_words());

    let outcome = broker.complete_success(catalog.registry()).unwrap();
    let EditOutcome::Success(entry) = outcome else {
        panic!("expected success");
    };
    assert_eq!(entry.author(), current_username());
    commit(&store, &entry, None).unwrap();

    let reloaded = Catalog::load(&store, &config).unwrap();
    assert!(reloaded.display_names().contains(&"mine".to_string()));
}

#[test]
fn word_list_round_trips_through_the_store() {
    let (_dir, store, config) = seeded();
    let catalog = Catalog::load(&store, &config).unwrap();

    let group = catalog.select(1); // alpha_set
    let entry = catalog.entry(&group.pointers()[0]).unwrap();
    assert_eq!(entry.words().words(), letter_words("_one").as_slice());
}
