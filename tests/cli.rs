use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn sfr() -> Command {
    Command::cargo_bin("sfr").expect("sfr binary is built")
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn no_arguments_prints_usage() {
    sfr()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sfr"));
}

#[test]
fn help_flag_prints_usage() {
    sfr()
        .arg("/?")
        .assert()
        .success()
        .stdout(predicate::str::contains("/x       Specifies which file types"));
}

#[test]
fn directory_search_lists_matching_files() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), b"alpha foo");
    write_file(&temp.path().join("sub/b.txt"), b"foo beta");
    write_file(&temp.path().join("c.txt"), b"gamma");

    sfr()
        .args(["/s", "foo"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching..."))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("c.txt").not())
        .stdout(predicate::str::contains("2 file(s) may contain \"foo\"."));
}

#[test]
fn excluded_extensions_are_not_searched() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("keep.md"), b"foo");
    write_file(&temp.path().join("drop.log"), b"foo");

    sfr()
        .args(["/x", "log,tmp", "/s", "foo"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.md"))
        .stdout(predicate::str::contains("drop.log").not())
        .stdout(predicate::str::contains("1 file(s) may contain"));
}

#[test]
fn single_file_reports_contains_or_hint() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("note.txt");
    write_file(&file, b"foo bar");

    sfr()
        .args(["/s", "bar"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("This file contains \"bar\"."));

    sfr()
        .args(["/s", "baz"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("This file does not contain \"baz\"."));
}

#[test]
fn utf16_content_needs_matching_encoding() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("wide.txt");
    let bytes: Vec<u8> = "hidden needle"
        .encode_utf16()
        .flat_map(|u| u.to_le_bytes())
        .collect();
    write_file(&file, &bytes);

    sfr()
        .args(["/e", "unicode", "/s", "needle"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("This file contains \"needle\"."));

    sfr()
        .args(["/e", "utf-8", "/s", "needle"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("does not contain"));
}

#[test]
fn parallel_flag_finds_the_same_files() {
    let temp = tempdir().unwrap();
    for i in 0..12 {
        let content: &[u8] = if i % 2 == 0 { b"foo" } else { b"bar" };
        write_file(&temp.path().join(format!("f{}.txt", i)), content);
    }

    sfr()
        .args(["/p", "/s", "foo"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("6 file(s) may contain \"foo\"."));
}

#[test]
fn missing_path_fails_without_searching() {
    let temp = tempdir().unwrap();

    sfr()
        .args(["/s", "foo"])
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Searching...").not())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unknown_command_is_named() {
    sfr()
        .args(["/q", "foo", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No executable found matching command \"/q\"",
        ));
}

#[test]
fn unsupported_encoding_is_rejected_before_searching() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), b"foo");

    sfr()
        .args(["/e", "klingon", "/s", "foo"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported encoding \"klingon\"."));
}

#[test]
fn missing_arguments_are_reported() {
    sfr()
        .args(["/s", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No encoding, file types, directory or file specified.",
        ));
}
