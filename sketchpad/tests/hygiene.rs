//! Hygiene — enforces coding standards at test time
//!
//! Scans the sketchpad crate's production sources for antipatterns. Every
//! budget is zero: the engine has no I/O and no excuse to crash or to drop
//! an error on the floor.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding sibling test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_some_and(|e| e == "rs") {
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

/// Assert that no production source line contains `pattern`.
fn assert_absent(pattern: &str, label: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut hits = Vec::new();
    for file in &files {
        for (lineno, line) in file.content.lines().enumerate() {
            if line.contains(pattern) {
                hits.push(format!("  {}:{}: {}", file.path, lineno + 1, line.trim()));
            }
        }
    }
    assert!(
        hits.is_empty(),
        "{label} found in production sources (budget is zero):\n{}",
        hits.join("\n")
    );
}

// Panics — these crash the page.

#[test]
fn no_unwrap_in_production_code() {
    assert_absent(".unwrap()", ".unwrap()");
}

#[test]
fn no_expect_in_production_code() {
    assert_absent(".expect(", ".expect()");
}

#[test]
fn no_panic_in_production_code() {
    assert_absent("panic!(", "panic!()");
}

#[test]
fn no_stub_macros_in_production_code() {
    assert_absent("todo!(", "todo!()");
    assert_absent("unimplemented!(", "unimplemented!()");
    assert_absent("unreachable!(", "unreachable!()");
}

// Silent loss — discards errors without inspecting.

#[test]
fn no_silent_error_discard() {
    assert_absent("let _ =", "let _ =");
    assert_absent(".ok()", ".ok()");
}

// Style / structure.

#[test]
fn no_dead_code_escape_hatch() {
    assert_absent("#[allow(dead_code)]", "#[allow(dead_code)]");
}
