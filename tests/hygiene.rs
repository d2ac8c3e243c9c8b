//! Hygiene: enforces coding standards at test time
//!
//! Scans the production sources under `src/` for patterns that crash the
//! page, swallow errors, or leak browser closures. Each pattern has a
//! budget; if you must add one, remove an existing one first. Budgets
//! only shrink.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics take the whole WASM module down with them.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or log instead" },
    // Static regex literals compiled in `LazyLock`s (email, phone, user agent).
    Budget { pattern: ".expect(", max: 3, why: "only for literals that cannot fail" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort every effect" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state instead" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "use dom::warn_on_err" },
    Budget { pattern: ".ok()", max: 0, why: "inspect the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    // Output goes through `log`; raw console calls only where no logger exists yet.
    Budget { pattern: "println!(", max: 0, why: "use log macros" },
    Budget { pattern: "console::", max: 3, why: "pre-logger diagnostics and the styled banner" },
    // Page-lifetime listeners/observers plus fire-and-forget timeouts.
    Budget { pattern: ".forget()", max: 5, why: "each leak must live as long as the page" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut over = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect::<Vec<_>>().join("\n");
            over.push(format!("{} found {count}, max {} ({})\n{detail}", budget.pattern, budget.max, budget.why));
        }
    }
    assert!(over.is_empty(), "hygiene budgets exceeded:\n{}", over.join("\n"));
}

#[test]
fn test_modules_live_beside_their_source() {
    for file in source_files() {
        for line in file.content.lines().filter(|l| l.starts_with("#[path = ")) {
            let Some(name) = line.split('"').nth(1) else {
                continue;
            };
            let sibling = Path::new(&file.path).with_file_name(name);
            assert!(sibling.exists(), "{}: missing {}", file.path, sibling.display());
        }
    }
}
