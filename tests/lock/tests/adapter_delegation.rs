//! Build-graph lock: adapters bind containers, they do not search.
//!
//! Every adapter must reach the kernel's boundary walks, so tie-break and
//! encoding rules cannot drift between container shapes. This scans the
//! adapter sources for anything that looks like a search of its own, and
//! pins the dependency lists of the kernel, adapters and harness manifests.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment adapter source lines.
const FORBIDDEN_PATTERNS: &[&str] = &[
    "/ 2",
    ">> 1",
    "binary_search",
    "partition_point",
    "while ",
    "loop {",
];

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        // Test modules sit at the bottom of each file.
        if line.trim() == "#[cfg(test)]" {
            break;
        }
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

/// ACCEPTANCE: ADAPT-001-DELEGATION
#[test]
fn adapters_contain_no_search_loops() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../adapters/src");
    assert!(dir.is_dir(), "adapter sources not found at {}", dir.display());

    let mut violations = Vec::new();
    walk(&dir, &mut violations);

    let mut msg = String::new();
    for (file, line, text) in &violations {
        let _ = writeln!(msg, "  {file}:{line}: {text}");
    }
    assert!(
        violations.is_empty(),
        "adapter source contains its own search logic:\n{msg}"
    );
}

/// Names under `[dependencies]` in a workspace member's manifest.
fn dependency_names(member: &str) -> Vec<String> {
    let manifest = fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(member)
            .join("Cargo.toml"),
    )
    .unwrap();
    let deps = manifest
        .split("[dependencies]")
        .nth(1)
        .unwrap_or("")
        .split("\n[")
        .next()
        .unwrap_or("");
    deps.lines()
        .filter_map(|l| l.split('=').next())
        .map(str::trim)
        .filter(|n| !n.is_empty() && !n.starts_with('#'))
        .map(String::from)
        .collect()
}

/// ACCEPTANCE: ADAPT-001-DELEGATION
#[test]
fn adapters_depend_only_on_kernel() {
    assert_eq!(dependency_names("adapters"), vec!["boundsearch-kernel"]);
}

// ---------------------------------------------------------------------------
// Pure library: no I/O or hashing stack below the test support
// ---------------------------------------------------------------------------

/// ACCEPTANCE: BUILD-001-PURE
#[test]
fn kernel_has_no_dependencies() {
    assert!(dependency_names("kernel").is_empty());
}

/// ACCEPTANCE: BUILD-001-PURE
#[test]
fn harness_carries_only_the_vector_parser() {
    assert_eq!(
        dependency_names("harness"),
        vec!["boundsearch-kernel", "boundsearch-adapters", "serde_json"]
    );
}
