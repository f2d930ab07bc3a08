//! Loading corpora from disk

use crate::common::{load_dir, TestRepo};
use memex::core::config::CorpusConfig;
use memex::core::corpus::CorpusLoader;
use memex::{Config, Memex, MemexError};
use serial_test::serial;
use std::env;

#[test]
fn test_load_help_center() {
    let repo = TestRepo::help_center();
    let docs = load_dir(repo.path());
    let paths: Vec<&str> = docs.iter().map(|(p, _)| p.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "README.txt",
            "account/password-reset.md",
            "billing/invoices/download.md",
            "billing/refund.md",
        ]
    );

    let memex = Memex::from_documents(docs).unwrap();
    assert_eq!(memex.ls("billing"), vec!["invoices/", "refund.md"]);
}

#[test]
fn test_load_custom_patterns() {
    let repo = TestRepo::help_center();
    let config = CorpusConfig {
        root: repo.path().to_path_buf(),
        include_patterns: vec!["billing/**/*.md".to_string()],
        exclude_patterns: vec!["**/invoices/**".to_string()],
        max_file_size_mb: 1,
    };

    let docs = CorpusLoader::new(&config).unwrap().load().unwrap();
    let paths: Vec<&str> = docs.iter().map(|(p, _)| p.as_str()).collect();

    assert_eq!(paths, vec!["billing/refund.md"]);
}

#[test]
fn test_load_skips_hidden_directories() {
    let repo = TestRepo::with_files(&[
        ("visible.md", "shown"),
        (".obsidian/workspace.md", "hidden"),
        ("notes/.trash/old.md", "hidden"),
    ]);

    let docs = load_dir(repo.path());
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].0, "visible.md");
}

#[test]
fn test_load_missing_root() {
    let config = CorpusConfig {
        root: "/nonexistent/memex/root".into(),
        ..CorpusConfig::default()
    };
    let err = CorpusLoader::new(&config).unwrap().load().unwrap_err();
    assert!(matches!(err, MemexError::ConfigError(_)));
}

#[test]
#[serial]
fn test_from_config_uses_env_root() {
    let repo = TestRepo::help_center();
    env::set_var("MEMEX_CORPUS_ROOT", repo.path());

    let config = Config::load().unwrap();
    let memex = Memex::from_config(&config).unwrap();

    assert_eq!(memex.document_count(), 4);
    assert!(!memex.grep("refund", Some("billing/**")).unwrap().is_empty());

    env::remove_var("MEMEX_CORPUS_ROOT");
}
