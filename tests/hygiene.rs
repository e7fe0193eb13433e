//! Hygiene checks over the board crate's own sources.
//!
//! Scans `src/` for patterns that crash the process, swallow errors, or print
//! from library code. Each pattern has a budget of zero. Sibling `_test.rs`
//! files are exempt.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// An unset or unparseable variable means "use the default" here.
const DOT_OK_EXEMPT: &[&str] = &["config.rs"];

// Library code reports through tracing or the notifier, never stdout.
const MAX_LIBRARY_PRINT: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn library_files() -> Vec<SourceFile> {
    source_files().into_iter().filter(|f| !f.path.ends_with("main.rs")).collect()
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

fn assert_budget(files: &[SourceFile], pattern: &str, max: usize) {
    let hits = count_in_source(files, pattern);
    let count = total(&hits);
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("engine.rs")), "run from the crate root");
}

#[test]
fn unwrap_budget() {
    assert_budget(&source_files(), ".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(&source_files(), ".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget(&source_files(), "panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget(&source_files(), "unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget(&source_files(), "todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget(&source_files(), "unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget(&source_files(), "let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !DOT_OK_EXEMPT.iter().any(|name| f.path.ends_with(name)))
        .collect();
    assert_budget(&files, ".ok()", MAX_DOT_OK);
}

#[test]
fn dot_ok_exemptions_stay_env_only() {
    // Exempt files may only use `.ok()` on environment lookups and parses.
    for file in source_files().iter().filter(|f| DOT_OK_EXEMPT.iter().any(|name| f.path.ends_with(name))) {
        for line in file.content.lines().filter(|l| l.contains(".ok()")) {
            let trimmed = line.trim();
            assert!(
                trimmed.contains("std::env::var(") || trimmed.starts_with(".ok()") || trimmed.contains(".parse::<"),
                "unexpected .ok() in {}: {trimmed}",
                file.path
            );
        }
    }
}

#[test]
fn library_print_budget() {
    let files = library_files();
    assert_budget(&files, "println!(", MAX_LIBRARY_PRINT);
    assert_budget(&files, "eprintln!(", MAX_LIBRARY_PRINT);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget(&source_files(), "#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}
