use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(data_path: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("satchel")
        .env("XDG_CONFIG_HOME", data_path.parent().expect("parent dir"))
        .args(["--data-path", data_path.to_str().expect("data path")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(data_path: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("satchel")
        .env("XDG_CONFIG_HOME", data_path.parent().expect("parent dir"))
        .args(["--data-path", data_path.to_str().expect("data path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn run_cmd_expect_exit(data_path: &Path, args: &[&str], expected: i32) {
    let output = cargo_bin_cmd!("satchel")
        .env("XDG_CONFIG_HOME", data_path.parent().expect("parent dir"))
        .args(["--data-path", data_path.to_str().expect("data path")])
        .args(args)
        .output()
        .expect("run command");
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected exit: {:?}",
        output
    );
}

#[test]
fn cli_contact_add_edit_delete_flow() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    run_cmd(
        &data_path,
        &[
            "add-contact",
            "--name",
            "Ada Lovelace",
            "--phone",
            "0501234567",
            "--birthday",
            "10.12.1815",
        ],
    );

    let list = run_cmd_json(&data_path, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ada Lovelace");
    assert_eq!(items[0]["phones"][0], "0501234567");

    run_cmd(
        &data_path,
        &["phone", "edit", "ada lovelace", "0501234567", "0999999999"],
    );
    let detail = run_cmd_json(&data_path, &["show", "Ada Lovelace"]);
    assert_eq!(detail["phones"][0], "0999999999");

    run_cmd(&data_path, &["delete", "ADA LOVELACE"]);
    let list = run_cmd_json(&data_path, &["list"]);
    assert!(list.as_array().expect("array").is_empty());
}

#[test]
fn cli_duplicate_contact_exits_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    run_cmd(&data_path, &["add-contact", "--name", "Alice"]);
    run_cmd_expect_exit(&data_path, &["add-contact", "--name", "alice"], 3);

    let list = run_cmd_json(&data_path, &["list"]);
    assert_eq!(list.as_array().expect("array").len(), 1);
}

#[test]
fn cli_missing_contact_exits_with_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    run_cmd_expect_exit(&data_path, &["delete", "Nobody"], 2);
    run_cmd_expect_exit(&data_path, &["show", "Nobody"], 2);
}

#[test]
fn cli_failed_add_leaves_no_partial_contact() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    // The second phone is invalid, so nothing may be inserted.
    run_cmd_expect_exit(
        &data_path,
        &[
            "add-contact",
            "--name",
            "Bob",
            "--phone",
            "0501234567",
            "--phone",
            "nope",
        ],
        3,
    );

    let list = run_cmd_json(&data_path, &["list"]);
    assert!(list.as_array().expect("array").is_empty());
}

#[test]
fn cli_smart_search_tolerates_typos() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    run_cmd(&data_path, &["add-contact", "--name", "John Smith"]);
    run_cmd(&data_path, &["add-contact", "--name", "Jane Doe"]);

    let results = run_cmd_json(&data_path, &["smart-search", "Jon"]);
    let items = results.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "John Smith");
}

#[test]
fn cli_note_and_tag_flow() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    run_cmd(
        &data_path,
        &[
            "add-note",
            "--title",
            "Groceries",
            "--text",
            "buy oat milk",
            "--tag",
            "food",
        ],
    );

    let tags = run_cmd_json(&data_path, &["tag", "ls"]);
    assert_eq!(tags, serde_json::json!(["food"]));

    let tagged = run_cmd_json(&data_path, &["tag", "notes", "FOOD"]);
    let items = tagged.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Groceries");

    run_cmd(&data_path, &["set-text", "groceries", "also pick up bread"]);
    let detail = run_cmd_json(&data_path, &["show-note", "Groceries"]);
    assert_eq!(detail["text"], "also pick up bread");

    run_cmd(&data_path, &["tag", "rm", "Groceries", "food"]);
    run_cmd(&data_path, &["delete-note", "Groceries"]);
    let list = run_cmd_json(&data_path, &["list-notes"]);
    assert!(list.as_array().expect("array").is_empty());
}

#[test]
fn cli_seed_populates_both_books() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("satchel.json");

    let summary = run_cmd_json(&data_path, &["seed", "--contacts", "5", "--notes", "3"]);
    assert_eq!(summary["contacts"], 5);
    assert_eq!(summary["notes"], 3);

    let list = run_cmd_json(&data_path, &["list"]);
    assert_eq!(list.as_array().expect("array").len(), 5);
    let notes = run_cmd_json(&data_path, &["list-notes"]);
    assert_eq!(notes.as_array().expect("array").len(), 3);
}
