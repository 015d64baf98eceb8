//! Integration tests for exclusion pruning and counter accounting

use super::test_utils::{build_tree, content_lines, excluded_line};
use fingerprint::{scan_paths, ExclusionRules, ScanCounters, ScanOptions};
use tempfile::TempDir;

/// Nothing beneath an excluded directory is listed or counted
#[test]
fn test_excluded_directory_contents_never_appear() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(
        temp_dir.path(),
        &[
            (".git/config", "core"),
            (".git/objects/ab/cdef", "blob"),
            (".git/.keep", ""),
            ("src/main.rs", "fn main() {}"),
        ],
    );

    let scanner = scan_paths(
        [temp_dir.path()],
        ScanOptions {
            verbose: true,
            ..ScanOptions::default()
        },
    )
    .unwrap();
    let manifest = scanner.output_text();

    assert!(!manifest.contains("./.git/"));
    assert_eq!(
        content_lines(&manifest)
            .iter()
            .filter(|l| l.contains(".git"))
            .collect::<Vec<_>>(),
        vec![&excluded_line("./.git")]
    );
    assert_eq!(
        scanner.counters(),
        ScanCounters {
            directories: 2,
            files: 1,
            excluded: 1,
        }
    );
}

/// A pruned subtree stays pruned even when its files would otherwise be included
#[test]
fn test_custom_rule_prunes_includable_files() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(
        temp_dir.path(),
        &[
            ("target/debug/app", "bin"),
            ("target/release/app", "bin"),
            ("src/lib.rs", "lib"),
        ],
    );

    let options = ScanOptions {
        excludes: ExclusionRules::parse(["^\\./target$"]).unwrap(),
        ..ScanOptions::default()
    };
    let scanner = scan_paths([temp_dir.path()], options).unwrap();

    assert!(!scanner.output_text().contains("./target/"));
    assert_eq!(
        scanner.counters(),
        ScanCounters {
            directories: 2,
            files: 1,
            excluded: 1,
        }
    );
}

/// Excluding the root itself leaves only a marker and the summary
#[test]
fn test_excluded_root_is_pruned() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(temp_dir.path(), &[("a.txt", "a")]);

    let options = ScanOptions {
        excludes: ExclusionRules::parse(["^\\./$"]).unwrap(),
        ..ScanOptions::default()
    };
    let scanner = scan_paths([temp_dir.path()], options).unwrap();

    assert_eq!(
        content_lines(&scanner.output_text()),
        vec!["# Directories: 0 Files: 0 Excluded: 1".to_string()]
    );
}

/// Empty rule set digests dotfiles too
#[test]
fn test_no_rules_includes_everything() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(temp_dir.path(), &[(".env", "x"), ("a~", "y"), (".d/f", "z")]);

    let options = ScanOptions {
        excludes: ExclusionRules::none(),
        ..ScanOptions::default()
    };
    let scanner = scan_paths([temp_dir.path()], options).unwrap();
    assert_eq!(
        scanner.counters(),
        ScanCounters {
            directories: 2,
            files: 3,
            excluded: 0,
        }
    );
}

/// Glob rules match files at any depth
#[test]
fn test_glob_rule_excludes_files() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(
        temp_dir.path(),
        &[("a.log", "1"), ("logs/b.log", "2"), ("logs/keep.txt", "3")],
    );

    let options = ScanOptions {
        excludes: ExclusionRules::parse(["glob:*.log"]).unwrap(),
        verbose: true,
        ..ScanOptions::default()
    };
    let scanner = scan_paths([temp_dir.path()], options).unwrap();
    let lines = content_lines(&scanner.output_text());

    assert!(lines.contains(&excluded_line("./a.log")));
    assert!(lines.contains(&excluded_line("./logs/b.log")));
    assert_eq!(
        scanner.counters(),
        ScanCounters {
            directories: 2,
            files: 1,
            excluded: 2,
        }
    );
}
