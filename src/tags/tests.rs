//! Tests for tag parsing and the symbol index.

use super::{SymbolIndex, Tag, ctags_args, extract_tags, extract_tags_at, parse_ctags_json};
use crate::config::{Config, TagFormat};
use crate::error::TagdiffError;
use crate::test_support::{commit_padded_main_go, create_test_repo};
use tempfile::TempDir;

fn tag(file: &str, name: &str, line: i64) -> Tag {
    Tag::new(file, name, "func", "", line)
}

// =========================================================================
// SymbolIndex
// =========================================================================

#[test]
fn test_index_sorts_by_line() {
    let index = SymbolIndex::new(vec![tag("a.go", "Bar", 15), tag("a.go", "Foo", 9)]);

    let names: Vec<&str> = index.tags().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Foo", "Bar"]);
}

#[test]
fn test_implicit_end_is_next_line_minus_one() {
    let index = SymbolIndex::new(vec![tag("a.go", "Foo", 9), tag("a.go", "Bar", 15)]);

    assert_eq!(index.implicit_end(0), Some(14));
    assert_eq!(index.implicit_end(1), None);
}

#[test]
fn test_equal_lines_sort_stably_first_tie_gets_empty_range() {
    let index = SymbolIndex::new(vec![
        tag("a.go", "Late", 30),
        tag("a.go", "First", 10),
        tag("a.go", "Second", 10),
    ]);

    let names: Vec<&str> = index.tags().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Late"]);
    // First's next tag is Second at the same line, so its range is empty
    // (ends before it starts); Second is bounded by Late.
    assert_eq!(index.implicit_end(0), Some(9));
    assert_eq!(index.implicit_end(1), Some(29));
}

#[test]
fn test_sort_is_global_across_files() {
    let index = SymbolIndex::new(vec![
        tag("a.go", "A1", 1),
        tag("a.go", "A2", 50),
        tag("b.go", "B1", 20),
    ]);

    let names: Vec<&str> = index.tags().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A1", "B1", "A2"]);
    // A1 is bounded by B1 from another file.
    assert_eq!(index.implicit_end(0), Some(19));
    assert_eq!(index.indices_for("a.go"), &[0, 2]);
    assert_eq!(index.indices_for("b.go"), &[1]);
}

#[test]
fn test_indices_for_unknown_file_is_empty() {
    let index = SymbolIndex::new(vec![tag("a.go", "A", 1)]);
    assert!(index.indices_for("missing.go").is_empty());
}

#[test]
fn test_empty_index() {
    let index = SymbolIndex::new(Vec::new());
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.implicit_end(0), None);
}

// =========================================================================
// ctags JSON output
// =========================================================================

#[test]
fn test_parse_ctags_json() {
    let output = r#"{"_type": "ptag", "name": "JSON_OUTPUT_VERSION", "path": "0.0", "pattern": "in development"}
{"_type": "tag", "name": "Foo", "path": "a.go", "pattern": "/^func Foo(x int) {$/", "line": 9, "kind": "func", "signature": "(x int)"}
{"_type": "tag", "name": "Config", "path": "a.go", "line": 20, "kind": "struct"}
"#;

    let tags = parse_ctags_json(output).unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], Tag::new("a.go", "Foo", "func", "(x int)", 9));
    assert_eq!(tags[1], Tag::new("a.go", "Config", "struct", "", 20));
}

#[test]
fn test_parse_ctags_json_skips_blank_lines() {
    let output = "\n{\"_type\": \"tag\", \"name\": \"X\", \"path\": \"x.go\", \"line\": 1}\n\n";
    assert_eq!(parse_ctags_json(output).unwrap().len(), 1);
}

#[test]
fn test_parse_ctags_json_invalid_line() {
    let err = parse_ctags_json("not json\n").unwrap_err();
    assert!(matches!(err, TagdiffError::TagError(_)));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_parse_ctags_json_missing_line_number() {
    let output = r#"{"_type": "tag", "name": "Foo", "path": "a.go"}"#;
    let err = parse_ctags_json(output).unwrap_err();
    assert!(err.to_string().contains("lacks name, path or line"));
}

// =========================================================================
// ctags invocation
// =========================================================================

#[test]
fn test_ctags_args_per_format() {
    assert!(ctags_args(TagFormat::Json).contains(&"--output-format=json"));
    assert!(ctags_args(TagFormat::Etags).contains(&"-e"));
}

#[test]
fn test_extract_tags_without_files_runs_nothing() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        ctags_command: "definitely-not-a-real-ctags-binary".to_string(),
        ..Default::default()
    };

    let tags = extract_tags(dir.path(), &config, &[]).unwrap();
    assert!(tags.is_empty());
}

#[test]
fn test_extract_tags_skips_deleted_files() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        ctags_command: "definitely-not-a-real-ctags-binary".to_string(),
        ..Default::default()
    };

    let tags = extract_tags(dir.path(), &config, &["gone.go".to_string()]).unwrap();
    assert!(tags.is_empty());
}

#[test]
fn test_extract_tags_missing_binary_is_tag_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.go"), "package a\n").unwrap();
    let config = Config {
        ctags_command: "definitely-not-a-real-ctags-binary".to_string(),
        ..Default::default()
    };

    let err = extract_tags(dir.path(), &config, &["a.go".to_string()]).unwrap_err();
    assert!(matches!(err, TagdiffError::TagError(_)));
    assert!(err.to_string().contains("failed to execute"));
}

#[test]
fn test_extract_tags_at_skips_files_absent_from_commit() {
    let temp = create_test_repo();
    let config = Config {
        ctags_command: "definitely-not-a-real-ctags-binary".to_string(),
        ..Default::default()
    };

    let files = vec!["gone.go".to_string()];

    let tags = extract_tags_at(temp.path(), &config, "HEAD", &files).unwrap();
    assert!(tags.is_empty());
}

#[cfg(unix)]
#[test]
fn test_extract_tags_at_uses_commit_contents() {
    use crate::test_support::install_fake_ctags;

    let temp = create_test_repo();
    let tools = TempDir::new().unwrap();
    let config = Config {
        ctags_command: install_fake_ctags(tools.path()).display().to_string(),
        ..Default::default()
    };
    // A later commit moves every definition, and the working tree differs
    // from both.
    commit_padded_main_go(temp.path(), 20);
    std::fs::write(temp.path().join("main.go"), "package main\n").unwrap();

    let files = vec!["main.go".to_string()];

    let at_parent = extract_tags_at(temp.path(), &config, "HEAD~1", &files).unwrap();
    let at_head = extract_tags_at(temp.path(), &config, "HEAD", &files).unwrap();

    let lines = |tags: &[Tag]| -> Vec<(String, i64)> {
        tags.iter().map(|t| (t.name.clone(), t.line)).collect()
    };
    assert_eq!(
        lines(&at_parent),
        vec![("Foo".to_string(), 5), ("Bar".to_string(), 11)]
    );
    assert_eq!(
        lines(&at_head),
        vec![("Foo".to_string(), 25), ("Bar".to_string(), 31)]
    );
    assert!(at_parent.iter().all(|t| t.file == "main.go"));
}
