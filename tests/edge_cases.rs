//! Edge case and error handling tests for mdtree


use assert_cmd::Command;
use harness::{TestTree, line_names, run_mdtree};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_is_listed_as_file() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "content");
    symlink(tree.path().join("target.txt"), tree.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-S"]);
    assert!(success);
    assert!(stdout.contains("[link.txt](./link.txt)"), "{}", stdout);
    assert!(stdout.ends_with("0 directories, 2 files\n"), "{}", stdout);
}

#[test]
fn test_symlink_to_directory_is_listed_as_directory() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", "");
    symlink(tree.path().join("realdir"), tree.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-s"]);
    assert!(success);
    assert_eq!(
        line_names(&stdout),
        vec!["linkdir", "file.txt", "realdir", "file.txt"]
    );
}

#[test]
fn test_symlink_to_parent_stops_at_depth() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "");
    symlink("..", tree.path().join("subdir").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-d", "3"]);
    assert!(success, "depth limit should bound a symlink cycle");
    assert!(stdout.contains("[file.txt]"));
}

#[test]
fn test_broken_symlink_is_a_file() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    symlink("nonexistent.txt", tree.path().join("broken.txt"))
        .expect("Failed to create broken symlink");

    let (stdout, stderr, success) = run_mdtree(tree.path(), &[]);
    assert!(success, "broken symlink should not fail: {}", stderr);
    assert_eq!(line_names(&stdout), vec!["broken.txt", "real.txt"]);
}

#[test]
fn test_symlink_loop_fails_run() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    symlink("loop", tree.path().join("loop")).expect("Failed to create symlink loop");

    let (stdout, stderr, success) = run_mdtree(tree.path(), &[]);
    assert!(!success);
    assert!(!stdout.contains("real.txt"), "{}", stdout);
    assert!(stderr.contains("mdtree: cannot stat"), "{}", stderr);
    assert!(stderr.contains("loop"), "{}", stderr);
}

#[test]
fn test_size_order_ignores_symlinked_files() {
    let tree = TestTree::new();
    tree.add_file("big.bin", &"x".repeat(1000));
    tree.add_file("links/small.txt", &"x".repeat(10));
    tree.add_file("plain/medium.txt", &"x".repeat(100));
    symlink(
        tree.path().join("big.bin"),
        tree.path().join("links").join("big-link"),
    )
    .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-o", "size", "-d", "0"]);
    assert!(success);
    assert_eq!(line_names(&stdout), vec!["links", "plain", "big.bin"]);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_nonexistent_directory() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_mdtree(tree.path(), &["-D", "missing"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("mdtree: cannot access 'missing'"),
        "{}",
        stderr
    );
}

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "");

    Command::cargo_bin("mdtree")
        .unwrap()
        .current_dir(tree.path())
        .args(["-D", "plain.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_invalid_exclude_regex() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    Command::cargo_bin("mdtree")
        .unwrap()
        .current_dir(tree.path())
        .args(["-e", "(unclosed"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid --exclude pattern"));
}

#[test]
fn test_invalid_regex_leaves_output_file_untouched() {
    let tree = TestTree::new();
    let out = tree.add_file("keep.md", "previous");

    let (_stdout, _stderr, success) =
        run_mdtree(tree.path(), &["-N", "[", "-f", "keep.md"]);
    assert!(!success);
    assert_eq!(fs::read_to_string(out).unwrap(), "previous");
}

#[test]
fn test_unwritable_output_path() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    let (_stdout, stderr, success) = run_mdtree(tree.path(), &["-f", "no/such/dir/out.md"]);
    assert!(!success);
    assert!(stderr.contains("cannot open output file"), "{}", stderr);
}

#[test]
fn test_invalid_order_value() {
    let tree = TestTree::new();

    let (_stdout, stderr, success) = run_mdtree(tree.path(), &["-o", "random"]);
    assert!(!success);
    assert!(stderr.contains("invalid value"), "{}", stderr);
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_unless_privileged() {
    let tree = TestTree::new();
    tree.add_file("readable/file.txt", "");
    let unreadable = tree.path().join("unreadable");
    fs::create_dir(&unreadable).expect("Failed to create dir");
    fs::write(unreadable.join("hidden.txt"), "").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");
    // Privileged users read through the mode bits
    let locked = fs::read_dir(&unreadable).is_err();

    let (_stdout, stderr, success) = run_mdtree(tree.path(), &[]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    if locked {
        assert!(!success, "listing failure must fail the run");
        assert!(
            stderr.contains("cannot read directory './unreadable'"),
            "{}",
            stderr
        );
    } else {
        assert!(success);
    }
}

// ============================================================================
// Degenerate Trees
// ============================================================================

#[test]
fn test_empty_root() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-S"]);
    assert!(success);
    assert_eq!(stdout, ".\n0 directories, 0 files\n");
}

#[test]
fn test_max_depth_zero() {
    let tree = TestTree::new();
    tree.add_file("a/b.txt", "");
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-d", "0"]);
    assert!(success);
    assert_eq!(line_names(&stdout), vec!["a", "empty"]);
    // Only the non-empty directory gets a truncation marker
    assert_eq!(stdout.matches("└── ...").count(), 1, "{}", stdout);
}

#[test]
fn test_unicode_and_spaces_in_names() {
    let tree = TestTree::new();
    tree.add_file("docs/résumé final.md", "");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &["-F"]);
    assert!(success);
    assert!(
        stdout.contains("[résumé final.md](./docs/résumé final.md)"),
        "{}",
        stdout
    );
}

#[test]
fn test_case_insensitive_default_order() {
    let tree = TestTree::new();
    tree.add_file("Zeta.txt", "");
    tree.add_file("alpha.txt", "");
    tree.add_file("Beta.txt", "");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &[]);
    assert!(success);
    assert_eq!(line_names(&stdout), vec!["alpha.txt", "Beta.txt", "Zeta.txt"]);
}

#[test]
fn test_nesting_prefixes() {
    let tree = TestTree::new();
    tree.add_file("a/b/c.txt", "");
    tree.add_file("z.txt", "");

    let (stdout, _stderr, success) = run_mdtree(tree.path(), &[]);
    assert!(success);
    let bar = "│&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";
    let blank = "&nbsp;".repeat(12);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "├── [a](./a) \\");
    assert_eq!(lines[2], format!("{}└── [b](./a/b) \\", bar));
    assert_eq!(lines[3], format!("{}{}└── [c.txt](./a/b/c.txt) \\", bar, blank));
    assert_eq!(lines[4], "└── [z.txt](./z.txt)");
}
