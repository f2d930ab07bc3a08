//! Argument parsing for the memex CLI

use clap::{CommandFactory, Parser};
use memex::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_grep_with_glob() {
    let cli = Cli::try_parse_from(["memex", "grep", "refund", "--glob", "billing/**"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::Grep(args) => {
            assert_eq!(args.pattern, "refund");
            assert_eq!(args.glob.as_deref(), Some("billing/**"));
        }
        other => panic!("Expected grep, got {other:?}"),
    }
}

#[test]
fn test_parse_global_root_and_format() {
    let cli = Cli::try_parse_from([
        "memex", "read", "tar.md", "--offset", "2", "--limit", "5", "--root", "/docs", "--format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.root, Some(PathBuf::from("/docs")));
    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Read(args) => {
            assert_eq!(args.path, "tar.md");
            assert_eq!(args.offset, Some(2));
            assert_eq!(args.limit, Some(5));
        }
        other => panic!("Expected read, got {other:?}"),
    }
}

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["memex", "ls"]).unwrap();
    match cli.command {
        Commands::Ls(args) => assert_eq!(args.path, ""),
        other => panic!("Expected ls, got {other:?}"),
    }

    let cli = Cli::try_parse_from(["memex", "call", "ls"]).unwrap();
    match cli.command {
        Commands::Call(args) => {
            assert_eq!(args.name, "ls");
            assert_eq!(args.args, "{}");
        }
        other => panic!("Expected call, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["memex", "--format", "xml", "ls"]).is_err());
}
