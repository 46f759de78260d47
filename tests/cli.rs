use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const STORE_FILE: &str = "clippy-items.json";

fn snipz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("snipz").unwrap();
    cmd.env("SNIPZ_HOME", home).env_remove("SNIPZ_LOG");
    cmd
}

fn add(home: &Path, text: &str) {
    snipz(home).args(["add", text]).assert().success();
}

fn stored_texts(home: &Path) -> Vec<String> {
    let raw = fs::read_to_string(home.join(STORE_FILE)).unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    items
        .iter()
        .map(|item| item["text"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_empty_list() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No snippets saved yet."));
}

#[test]
fn test_add_puts_newest_first() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "first");
    add(temp.path(), "second");

    snipz(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\. second.*2\. first").unwrap());

    assert_eq!(stored_texts(temp.path()), vec!["second", "first"]);
}

#[test]
fn test_add_joins_words() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .args(["add", "buy", "oat", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet saved: buy oat milk"));

    assert_eq!(stored_texts(temp.path()), vec!["buy oat milk"]);
}

#[test]
fn test_add_from_stdin_keeps_text_verbatim() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .arg("add")
        .write_stdin("line one\nline two\n")
        .assert()
        .success();

    assert_eq!(stored_texts(temp.path()), vec!["line one\nline two\n"]);
}

#[test]
fn test_blank_add_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!temp.path().join(STORE_FILE).exists());
}

#[test]
fn test_storage_format() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "hello");

    let raw = fs::read_to_string(temp.path().join(STORE_FILE)).unwrap();
    assert!(raw.starts_with(r#"[{"text":"hello","id":"#));
    assert!(raw.ends_with("}]"));
    assert!(!raw.contains('\n'));
}

#[test]
fn test_existing_storage_is_loaded() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join(STORE_FILE),
        r#"[{"text":"from before","id":1700000000000}]"#,
    )
    .unwrap();

    snipz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. from before"));
}

#[test]
fn test_malformed_storage_reads_as_empty() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join(STORE_FILE), "{not json").unwrap();

    snipz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No snippets saved yet."));

    add(temp.path(), "fresh");
    assert_eq!(stored_texts(temp.path()), vec!["fresh"]);
}

#[test]
fn test_move_down_and_up() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "c");
    add(temp.path(), "b");
    add(temp.path(), "a");

    snipz(temp.path()).args(["move", "1", "3"]).assert().success();
    assert_eq!(stored_texts(temp.path()), vec!["b", "c", "a"]);

    snipz(temp.path()).args(["mv", "3", "1"]).assert().success();
    assert_eq!(stored_texts(temp.path()), vec!["a", "b", "c"]);
}

#[test]
fn test_move_outside_list_is_noop() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "b");
    add(temp.path(), "a");
    let before = fs::read_to_string(temp.path().join(STORE_FILE)).unwrap();

    snipz(temp.path())
        .args(["move", "1", "9"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let after = fs::read_to_string(temp.path().join(STORE_FILE)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_delete_multiple() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "c");
    add(temp.path(), "b");
    add(temp.path(), "a");

    snipz(temp.path())
        .args(["rm", "1", "3", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet deleted (1): a"))
        .stdout(predicate::str::contains("Snippet deleted (3): c"));

    assert_eq!(stored_texts(temp.path()), vec!["b"]);
}

#[test]
fn test_view_prints_full_text() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .arg("add")
        .write_stdin("first line\nsecond line")
        .assert()
        .success();

    snipz(temp.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first line\nsecond line\n"));
}

#[test]
fn test_bad_index_fails() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "only");

    snipz(temp.path())
        .args(["view", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index"));

    snipz(temp.path())
        .args(["copy", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 5 not found"));
}

#[test]
fn test_config_set_and_show() {
    let temp = tempfile::tempdir().unwrap();

    snipz(temp.path())
        .args(["config", "line-width", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width set to 60"));

    snipz(temp.path())
        .args(["config", "line-width"])
        .assert()
        .success()
        .stdout(predicate::str::diff("60\n"));

    snipz(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width = 60"))
        .stdout(predicate::str::contains("copy-on-add = false"));
}

#[test]
fn test_config_rejects_bad_value() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .args(["config", "copy-on-add", "maybe"])
        .assert()
        .failure();
}

#[test]
fn test_path_points_into_home() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(STORE_FILE))
        .stdout(predicate::str::contains(
            temp.path().to_string_lossy().as_ref(),
        ));
}

#[test]
fn test_help_is_grouped() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet Commands:"))
        .stdout(predicate::str::contains("Ordering Commands:"));
}

#[test]
fn test_add_after_largest_id_does_not_crash() {
    let temp = tempfile::tempdir().unwrap();
    let raw = r#"[{"text":"x","id":9223372036854775807}]"#;
    fs::write(temp.path().join(STORE_FILE), raw).unwrap();

    snipz(temp.path())
        .args(["add", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(temp.path().join(STORE_FILE)).unwrap(), raw);
}

#[test]
fn test_help_for_command_and_alias() {
    let temp = tempfile::tempdir().unwrap();
    snipz(temp.path())
        .args(["help", "mv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Move a snippet"));

    snipz(temp.path())
        .args(["help", "frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: frobnicate"));
}
