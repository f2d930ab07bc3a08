//! Command handlers over the fixture corpus

use crate::common::{fixture_memex, fixtures_dir};
use memex::cli::commands::{call, grep, ls, read, tools};
use memex::cli::{run, Cli, OutputFormat};
use memex::GrepResult;

#[test]
fn test_grep_render_human() {
    colored::control::set_override(false);
    let memex = fixture_memex();
    let results = memex.grep("archiving", None).unwrap();

    let out = grep::render(&results, OutputFormat::Human).unwrap();
    assert!(out.lines().any(|l| l == "tar.md:3: > Archiving utility."));
}

#[test]
fn test_grep_render_json() {
    let memex = fixture_memex();
    let results = memex.grep("archive", Some("tar.md")).unwrap();

    let out = grep::render(&results, OutputFormat::Json).unwrap();
    let parsed: Vec<GrepResult> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, results);
}

#[test]
fn test_grep_execute() {
    let memex = fixture_memex();
    let args = grep::GrepArgs {
        pattern: "server".to_string(),
        glob: None,
    };
    assert!(grep::execute(args, &memex, OutputFormat::Human).is_ok());
}

#[test]
fn test_grep_execute_invalid_pattern() {
    let memex = fixture_memex();
    let args = grep::GrepArgs {
        pattern: "[unclosed".to_string(),
        glob: None,
    };
    let err = grep::execute(args, &memex, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("[unclosed"));
}

#[test]
fn test_read_execute() {
    let memex = fixture_memex();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = read::ReadArgs {
            path: "curl.md".to_string(),
            offset: Some(1),
            limit: Some(3),
        };
        assert!(read::execute(args, &memex, format).is_ok());
    }
}

#[test]
fn test_read_execute_not_found() {
    let memex = fixture_memex();
    let args = read::ReadArgs {
        path: "nonexistent.md".to_string(),
        offset: None,
        limit: None,
    };
    let err = read::execute(args, &memex, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("nonexistent.md"));
}

#[test]
fn test_ls_render() {
    colored::control::set_override(false);
    let memex = fixture_memex();

    let out = ls::render(&memex.ls("nested"), OutputFormat::Human).unwrap();
    assert_eq!(out, "subdir/\ntop.md");

    let out = ls::render(&memex.ls("nested"), OutputFormat::Json).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, vec!["subdir/", "top.md"]);
}

#[test]
fn test_tools_render_json_is_pretty_definitions() {
    let out = tools::render(false, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert!(out.contains('\n'));
}

#[test]
fn test_call_execute() {
    let memex = fixture_memex();

    let args = call::CallArgs {
        name: "ls".to_string(),
        args: r#"{"path": "nested"}"#.to_string(),
    };
    assert!(call::execute(args, &memex, OutputFormat::Human).is_ok());

    let args = call::CallArgs {
        name: "rm".to_string(),
        args: "{}".to_string(),
    };
    let err = call::execute(args, &memex, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("unknown tool: rm"));
}

#[test]
fn test_run_with_root_override() {
    let root = fixtures_dir();
    let root = root.to_str().unwrap();

    let cli = <Cli as clap::Parser>::try_parse_from(["memex", "--root", root, "ls", "nested"]).unwrap();
    assert!(run(cli).is_ok());

    let cli =
        <Cli as clap::Parser>::try_parse_from(["memex", "--root", root, "read", "missing.md"]).unwrap();
    assert!(run(cli).is_err());
}

#[test]
fn test_run_empty_root_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let cli = <Cli as clap::Parser>::try_parse_from(["memex", "--root", root, "ls"]).unwrap();
    let err = run(cli).unwrap_err();
    assert!(err.to_string().contains("no documents"));
}
