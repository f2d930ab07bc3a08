//! Store construction, read and ls over the fixture corpus

use crate::common::{fixture_memex, fixtures_dir, load_dir, small_memex, FIXTURE_DOCUMENT_COUNT};
use memex::{DocumentStore, Memex, MemexError};

#[test]
fn test_fixture_document_count() {
    let memex = fixture_memex();
    assert_eq!(memex.document_count(), FIXTURE_DOCUMENT_COUNT);
    assert!(memex.token_count() > 0);
}

#[test]
fn test_read_full_document() {
    let memex = fixture_memex();
    let text = memex.read("tar.md", None, None).unwrap();

    assert!(text.contains("tar"));
    assert!(text.contains("Archiving"));
    assert!(text.starts_with(" 1  # tar"), "width follows the last line number: {text:?}");
}

#[test]
fn test_read_line_range() {
    let memex = fixture_memex();
    let text = memex.read("curl.md", Some(1), Some(3)).unwrap();

    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("curl"));
    assert!(text.starts_with("1  # curl"));
}

#[test]
fn test_read_nonexistent_document() {
    let memex = fixture_memex();
    let err = memex.read("nonexistent.md", None, None).unwrap_err();

    assert!(matches!(err, MemexError::DocumentNotFound(_)));
    assert!(err.message().contains("nonexistent.md"));
}

#[test]
fn test_read_slicing_boundaries() {
    let memex = small_memex(&[("doc.md", "a\nb\nc\nd\ne")]);

    // Offset past the end
    assert_eq!(memex.read("doc.md", Some(6), None).unwrap(), "");
    // Offset + limit past the end keeps lineCount - offset + 1 lines
    assert_eq!(memex.read("doc.md", Some(4), Some(10)).unwrap(), "4  d\n5  e");
    // Exactly the last line
    assert_eq!(memex.read("doc.md", Some(5), Some(1)).unwrap(), "5  e");
}

#[test]
fn test_ls_nested_root() {
    let docs = load_dir(&fixtures_dir().join("nested"));
    let memex = Memex::from_documents(docs).unwrap();

    assert_eq!(memex.ls(""), vec!["subdir/", "top.md"]);
    assert_eq!(memex.ls("subdir"), vec!["deep.md"]);
}

#[test]
fn test_ls_fixture_root() {
    let memex = fixture_memex();
    let root = memex.ls(".");

    assert_eq!(root.len(), 101);
    assert!(root.contains(&"nested/".to_string()));
    assert!(root.contains(&"tar.md".to_string()));
    assert_eq!(memex.ls("nested/"), vec!["subdir/", "top.md"]);
}

#[test]
fn test_ls_round_trip() {
    let memex = small_memex(&[("a/b/c.md", "x"), ("a/d.md", "y")]);

    assert!(memex.ls("a").contains(&"b/".to_string()));
    assert!(memex.ls("a/b").contains(&"c.md".to_string()));
    assert_eq!(memex.ls("a"), vec!["b/", "d.md"]);
}

#[test]
fn test_ls_unknown_directory_is_empty() {
    let memex = small_memex(&[("a/b.md", "x")]);
    assert!(memex.ls("missing").is_empty());
    assert!(memex.ls("a/b.md").is_empty());
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(
        DocumentStore::from_json("[]"),
        Err(MemexError::EmptyCorpus)
    ));
    assert!(matches!(
        DocumentStore::from_json("{not json"),
        Err(MemexError::InvalidCorpus(_))
    ));
    assert!(matches!(
        Memex::from_json(r#"[["only-path"]]"#),
        Err(MemexError::InvalidCorpus(_))
    ));
}

#[test]
fn test_store_usable_after_errors() {
    let memex = fixture_memex();

    assert!(memex.read("missing.md", None, None).is_err());
    assert!(memex.grep("(unclosed", None).is_err());

    assert!(!memex.grep("archive", None).unwrap().is_empty());
    assert!(memex.read("git.md", None, Some(1)).unwrap().contains("git"));
}
