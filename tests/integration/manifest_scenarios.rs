//! Integration tests for manifest content on concrete trees

use super::test_utils::{
    build_tree, content_lines, dir_line, excluded_line, file_line, sample_tree, summary_line,
};
use fingerprint::{scan_paths, ScanCounters, ScanOptions};
use tempfile::TempDir;

/// Reference scenario with default rules
#[test]
fn test_reference_tree_default_options() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let scanner = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    let manifest = scanner.output_text();

    assert_eq!(
        content_lines(&manifest),
        vec![
            dir_line("./"),
            file_line(b"hi", "./a.txt"),
            dir_line("./sub"),
            file_line(b"bee", "./sub/b.txt"),
            "# Directories: 2 Files: 2 Excluded: 1".to_string(),
        ]
    );
    assert!(!manifest.contains(".hidden"));
}

/// Verbose mode adds exactly one marker, counters unchanged
#[test]
fn test_reference_tree_verbose() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let quiet = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    let verbose = scan_paths(
        [temp_dir.path()],
        ScanOptions {
            verbose: true,
            ..ScanOptions::default()
        },
    )
    .unwrap();

    let lines = content_lines(&verbose.output_text());
    let markers: Vec<_> = lines
        .iter()
        .filter(|l| l.starts_with('#') && !l.starts_with("# Directories:"))
        .collect();
    assert_eq!(markers, vec![&excluded_line("./.hidden")]);

    assert_eq!(quiet.counters(), verbose.counters());
    assert_eq!(
        summary_line(&quiet.output_text()),
        summary_line(&verbose.output_text())
    );
}

/// An empty root yields only its own directory marker
#[test]
fn test_empty_root() {
    let temp_dir = TempDir::new().unwrap();

    let scanner = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    let manifest = scanner.output_text();

    assert_eq!(manifest.lines().count(), 5);
    assert_eq!(
        content_lines(&manifest),
        vec![dir_line("./"), "# Directories: 1 Files: 0 Excluded: 0".to_string()]
    );
}

/// Backup files are excluded and counted
#[test]
fn test_backup_files_excluded() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(
        temp_dir.path(),
        &[("notes.txt", "n"), ("notes.txt~", "old"), ("draft~/", "")],
    );

    let scanner = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    assert_eq!(
        scanner.counters(),
        ScanCounters {
            directories: 1,
            files: 1,
            excluded: 2,
        }
    );
}

/// Lines appear in sorted pre-order, subtrees before later siblings
#[test]
fn test_preorder_layout() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(
        temp_dir.path(),
        &[
            ("z.txt", "z"),
            ("m/inner/deep.txt", "d"),
            ("m/a.txt", "a"),
            ("b.txt", "b"),
        ],
    );

    let scanner = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    assert_eq!(
        content_lines(&scanner.output_text()),
        vec![
            dir_line("./"),
            file_line(b"b", "./b.txt"),
            dir_line("./m"),
            file_line(b"a", "./m/a.txt"),
            dir_line("./m/inner"),
            file_line(b"d", "./m/inner/deep.txt"),
            file_line(b"z", "./z.txt"),
            "# Directories: 3 Files: 4 Excluded: 0".to_string(),
        ]
    );
}

/// Two scans of an unchanged tree differ only in the timestamp
#[test]
fn test_rescan_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let first = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    let second = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    assert_eq!(
        content_lines(&first.output_text()),
        content_lines(&second.output_text())
    );
}

/// Editing a file changes exactly its line
#[test]
fn test_content_change_changes_one_line() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let scanner = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    let before = content_lines(&scanner.output_text());
    std::fs::write(temp_dir.path().join("sub/b.txt"), "bee!").unwrap();
    let scanner = scan_paths([temp_dir.path()], ScanOptions::default()).unwrap();
    let after = content_lines(&scanner.output_text());

    let changed: Vec<_> = before.iter().zip(after.iter()).filter(|(a, b)| a != b).collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].1, &file_line(b"bee!", "./sub/b.txt"));
}
