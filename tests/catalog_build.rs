//! Catalog construction tests
//!
//! Builds the checked-in fixture hunt, plus scratch trees for every fatal
//! failure mode.

use poozles::{Catalog, CatalogError};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hunt")
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Scratch tree with a valid index and one valid puzzle
fn scratch_hunt() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("index.html"), "<h1>Scratch</h1>");
    write(
        &dir.path().join("good/index.html"),
        "<!--\ntitle: Good\nanswers: [yes]\n-->\n<p>ok</p>\n",
    );
    dir
}

#[test]
fn test_build_fixture_hunt() -> poozles::Result<()> {
    let catalog = Catalog::build(&fixture_root())?;

    assert_eq!(catalog.len(), 3);
    similar_asserts::assert_eq!(
        catalog.ids().collect::<Vec<_>>(),
        vec!["cipher", "treasure", "vault"]
    );
    assert!(catalog.index().contains("The Vault Hunt"));

    let vault = catalog.get("vault").unwrap();
    assert_eq!(vault.title(), "Vault");
    assert_eq!(vault.metadata.answers, vec!["gold key"]);
    assert_eq!(vault.metadata.hints, vec!["It's shiny", "It opens locks"]);
    assert!(vault.content.starts_with("<p>The door will not budge."));
    assert!(!vault.content.contains("answers"));
    // success.html and index.html are not downloads
    assert_eq!(vault.files, vec!["map.txt"]);

    let treasure = catalog.get("treasure").unwrap();
    assert_eq!(treasure.metadata.answers, vec!["chest", "coffer"]);
    assert!(treasure.files.is_empty());

    let cipher = catalog.get("cipher").unwrap();
    assert_eq!(cipher.metadata.answers, vec!["1984"]);
    assert_eq!(cipher.files, vec!["grid.csv"]);

    Ok(())
}

#[test]
fn test_stored_strings_are_normalized() -> poozles::Result<()> {
    let catalog = Catalog::build(&fixture_root())?;
    for puzzle in catalog.puzzles() {
        for answer in &puzzle.metadata.answers {
            assert_eq!(answer, &poozles::puzzle::normalize(answer));
        }
        for triggers in puzzle.metadata.unlocks.values() {
            for trigger in triggers {
                assert_eq!(trigger, &poozles::puzzle::normalize(trigger));
            }
        }
    }
    Ok(())
}

#[test]
fn test_scratch_hunt_builds() {
    let dir = scratch_hunt();
    let catalog = Catalog::build(dir.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.index(), "<h1>Scratch</h1>");
}

#[test]
fn test_empty_hunt_builds() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("index.html"), "");
    let catalog = Catalog::build(dir.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_missing_primary_document_is_fatal() {
    let dir = scratch_hunt();
    write(&dir.path().join("broken/notes.txt"), "no index here");

    match Catalog::build(dir.path()) {
        Err(CatalogError::MissingDocument(path)) => {
            assert!(path.ends_with("broken/index.html"), "{}", path.display());
        }
        other => panic!("expected MissingDocument, got {other:?}"),
    }
}

#[test]
fn test_missing_index_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("good/index.html"),
        "<!--\ntitle: Good\nanswers: [yes]\n-->\n",
    );
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::MissingDocument(_))
    ));
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Catalog::build(&dir.path().join("puzzles")),
        Err(CatalogError::MissingRoot(_))
    ));
}

#[test]
fn test_no_frontmatter_is_fatal() {
    let dir = scratch_hunt();
    write(&dir.path().join("plain/index.html"), "<p>Just a page</p>\n");
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::NoFrontMatter(_))
    ));
}

#[test]
fn test_unclosed_frontmatter_is_fatal() {
    let dir = scratch_hunt();
    write(
        &dir.path().join("open/index.html"),
        "<!--\ntitle: Open\nanswers: [a]\n<p>never closed</p>\n",
    );
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::NoFrontMatter(_))
    ));
}

#[test]
fn test_malformed_metadata_is_fatal() {
    let dir = scratch_hunt();
    write(
        &dir.path().join("bad/index.html"),
        "<!--\ntitle: [Bad\n-->\n",
    );
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::InvalidMetadata { .. })
    ));
}

#[test]
fn test_missing_title_is_fatal() {
    let dir = scratch_hunt();
    write(
        &dir.path().join("untitled/index.html"),
        "<!--\ntitle: ''\nanswers: [a]\n-->\n",
    );
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::MissingTitle(id)) if id == "untitled"
    ));
}

#[test]
fn test_empty_answers_is_fatal() {
    let dir = scratch_hunt();
    write(
        &dir.path().join("unanswerable/index.html"),
        "<!--\ntitle: Unanswerable\nanswers: []\n-->\n",
    );
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::NoAnswers(id)) if id == "unanswerable"
    ));
}

#[test]
fn test_first_failure_in_id_order_is_reported() {
    let dir = scratch_hunt();
    write(&dir.path().join("a-broken/notes.txt"), "");
    write(&dir.path().join("z-broken/index.html"), "<p>no frontmatter</p>");
    assert!(matches!(
        Catalog::build(dir.path()),
        Err(CatalogError::MissingDocument(_))
    ));
}

#[test]
fn test_dangling_unlock_target_is_not_fatal() {
    let dir = scratch_hunt();
    write(
        &dir.path().join("dangling/index.html"),
        "<!--\ntitle: Dangling\nanswers: [a]\nunlocks:\n  nowhere: [b]\n-->\n",
    );
    let catalog = Catalog::build(dir.path()).unwrap();
    assert!(catalog.get("dangling").is_some());
    assert!(catalog.get("nowhere").is_none());
}

#[test]
fn test_hidden_directory_without_document_is_fatal() {
    let dir = scratch_hunt();
    write(&dir.path().join(".draft/notes.txt"), "unfinished");

    match Catalog::build(dir.path()) {
        Err(CatalogError::MissingDocument(path)) => {
            assert!(path.ends_with(".draft/index.html"), "{}", path.display());
        }
        other => panic!("expected MissingDocument, got {other:?}"),
    }
}

#[test]
fn test_hidden_entries_are_kept() {
    let dir = scratch_hunt();
    write(&dir.path().join("good/.key.txt"), "key");
    write(
        &dir.path().join(".bonus/index.html"),
        "<!--\ntitle: Bonus\nanswers: [extra]\n-->\n",
    );

    let catalog = Catalog::build(dir.path()).unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec![".bonus", "good"]);
    assert_eq!(catalog.get("good").unwrap().files, vec![".key.txt"]);
}
