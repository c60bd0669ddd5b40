//! Integration tests for the vtpaint binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Helper to run vtpaint with a fresh, empty config home and capture output.
fn run_vtpaint(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let home = tempfile::tempdir().unwrap();
    run_vtpaint_in(home.path(), args, stdin)
}

/// Helper to run vtpaint with `home` standing in for the user's home and
/// config directories.
fn run_vtpaint_in(home: &Path, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_vtpaint"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute vtpaint");

    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for vtpaint");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write the default config under `home` and return its path.
fn init_config(home: &Path) -> std::path::PathBuf {
    let (stdout, _stderr, exit_code) = run_vtpaint_in(home, &["--init-config"], None);
    assert_eq!(exit_code, 0);
    std::path::PathBuf::from(stdout.trim_end())
}

// ============================================================================
// Paint
// ============================================================================

#[test]
fn paint_renders_with_flags() {
    let (stdout, _stderr, exit_code) = run_vtpaint(&["paint", "--fg", "red", "Hi"], None);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[31mHi\x1b[0m\n");
}

#[test]
fn paint_plain_has_no_escapes() {
    let (stdout, _stderr, exit_code) = run_vtpaint(&["paint", "-n", "Hello"], None);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "Hello");
}

#[test]
fn paint_with_inline_config_style() {
    let (stdout, _stderr, exit_code) = run_vtpaint(
        &[
            "paint",
            "-c",
            "[styles.shout]\nfg = \"208\"\nbold = true",
            "--style",
            "shout",
            "--italic",
            "Hey",
        ],
        None,
    );
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[38;5;208m\x1b[1m\x1b[3mHey\x1b[0m\n");
}

#[test]
fn paint_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, "[styles.note]\nbg = \"#000080\"\n").unwrap();

    let (stdout, _stderr, exit_code) = run_vtpaint(
        &["paint", "-c", path.to_str().unwrap(), "-s", "note", "x"],
        None,
    );
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[48;2;0;0;128mx\x1b[0m\n");
}

#[test]
fn paint_invalid_color_fails() {
    let (stdout, stderr, exit_code) = run_vtpaint(&["paint", "--fg", "mauve", "x"], None);
    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown color name"));
}

#[test]
fn paint_unknown_style_fails() {
    let (_stdout, stderr, exit_code) = run_vtpaint(&["paint", "--style", "missing", "x"], None);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown style: missing"));
}

// ============================================================================
// Strip
// ============================================================================

#[test]
fn strip_reads_stdin() {
    let input = "\x1b[31mred\x1b[0m\n\x1b[1mbold\x1b[22m text\n";
    let (stdout, _stderr, exit_code) = run_vtpaint(&["strip"], Some(input));
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "red\nbold text\n");
}

#[test]
fn strip_counts_code_points() {
    let input = "\x1b[32m世界\x1b[0m\nabc\n";
    let (stdout, _stderr, exit_code) = run_vtpaint(&["strip", "--count"], Some(input));
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "2\n3\n");
}

#[test]
fn strip_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colored.txt");
    std::fs::write(&path, "\x1b[38;5;1mone\x1b[0m\n").unwrap();

    let (stdout, _stderr, exit_code) = run_vtpaint(&["strip", path.to_str().unwrap()], None);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "one\n");
}

#[test]
fn strip_missing_file_fails() {
    let (_stdout, stderr, exit_code) =
        run_vtpaint(&["strip", "/definitely/not/here.txt"], None);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("IO error"));
}

// ============================================================================
// Demo & Misc
// ============================================================================

#[test]
fn demo_without_progress() {
    let (stdout, _stderr, exit_code) = run_vtpaint(&["demo", "--no-progress"], None);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Basic Colors"));
    assert!(stdout.contains("\x1b[31mred\x1b[0m"));
    assert!(stdout.contains("Strip Test: 'Hello' (len: 5)"));
    assert!(!stdout.contains("Done!"));
}

#[test]
fn paths_flag_prints_config_path() {
    let (stdout, _stderr, exit_code) = run_vtpaint(&["--paths"], None);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("paths:"));
    assert!(stdout.contains("config"));
}

#[test]
fn init_config_writes_defaults_once() {
    let home = tempfile::tempdir().unwrap();
    let path = init_config(home.path());
    assert!(path.starts_with(home.path()));
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .contains("[styles.heading]"));

    // A second run keeps the user's edits
    std::fs::write(&path, "[styles.heading]\nitalic = true\n").unwrap();
    assert_eq!(init_config(home.path()), path);
    let (stdout, _stderr, exit_code) =
        run_vtpaint_in(home.path(), &["paint", "-s", "heading", "T"], None);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[3mT\x1b[0m\n");
}

#[test]
fn user_config_styles_are_used() {
    let home = tempfile::tempdir().unwrap();
    let path = init_config(home.path());
    std::fs::write(&path, "[styles.alert]\nfg = \"red\"\n").unwrap();

    let (stdout, _stderr, exit_code) =
        run_vtpaint_in(home.path(), &["paint", "-s", "alert", "!"], None);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[31m!\x1b[0m\n");
}

#[test]
fn strip_ignores_broken_config() {
    let home = tempfile::tempdir().unwrap();
    let path = init_config(home.path());
    std::fs::write(&path, "[styles.x\nbold=").unwrap();

    let (stdout, _stderr, exit_code) =
        run_vtpaint_in(home.path(), &["strip"], Some("\x1b[31mred\x1b[0m\n"));
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "red\n");

    // Commands that need named styles still report the bad file
    let (_stdout, stderr, exit_code) = run_vtpaint_in(home.path(), &["paint", "x"], None);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_vtpaint(&["--help"], None);
    assert_eq!(exit_code, 0);
    for name in ["demo", "paint", "strip"] {
        assert!(stdout.contains(name), "help is missing {}", name);
    }
}
