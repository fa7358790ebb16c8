//! End-to-end runs of the `enumgen` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const INPUT: &str = "VK_COMPARE_OP_NEVER, VK_COMPARE_OP_LESS, VK_COMPARE_OP_ALWAYS = 7,";

const EXPECTED: &str = "{
\t{\"never\", VK_COMPARE_OP_NEVER},
\t{\"less\", VK_COMPARE_OP_LESS},
\t{\"always\", VK_COMPARE_OP_ALWAYS}
}
";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_enumgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("ENUMGEN_LOG")
        .output()
        .expect("failed to spawn enumgen")
}

#[test]
fn test_default_paths_write_and_echo() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("enumList.txt"), INPUT).unwrap();

    let output = run(temp_dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("outputEnums.txt")).unwrap(),
        EXPECTED
    );
}

#[test]
fn test_stdout_mode_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("ops.txt"), INPUT).unwrap();

    let output = run(temp_dir.path(), &["-i", "ops.txt", "--stdout"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(!temp_dir.path().join("outputEnums.txt").exists());
}

#[test]
fn test_check_reports_stale_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("enumList.txt"), INPUT).unwrap();

    assert_eq!(run(temp_dir.path(), &["--check"]).status.code(), Some(1));

    let quiet = run(temp_dir.path(), &["--quiet"]);
    assert!(quiet.status.success());
    assert!(quiet.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("outputEnums.txt")).unwrap(),
        EXPECTED
    );
    assert_eq!(run(temp_dir.path(), &["--check"]).status.code(), Some(0));

    std::fs::write(temp_dir.path().join("outputEnums.txt"), "{\n}\n").unwrap();
    assert_eq!(run(temp_dir.path(), &["--check"]).status.code(), Some(1));
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["-i", "absent.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.txt"));
    assert!(!temp_dir.path().join("outputEnums.txt").exists());
}

#[test]
fn test_empty_table_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("enumList.txt"), " , VK_COMPARE_OP_ ,").unwrap();

    let output = run(temp_dir.path(), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no enumerators left"));
}
