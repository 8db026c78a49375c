//! End-to-end tests for the `zet` binary against temp-dir vaults.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn zet(root: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_zet"));
    cmd.arg("--root").arg(root.path());
    cmd
}

fn vault(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(tmp.path().join(name), contents).unwrap();
    }
    tmp
}

#[test]
fn notes_lists_the_vault_in_natural_order() {
    let tmp = vault(&[("note10.md", ""), ("note2.md", ""), ("alpha.md", "")]);

    zet(&tmp)
        .arg("notes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes [3]"))
        .stdout(predicate::str::is_match(r"(?s)alpha.*note2.*note10").unwrap());
}

#[test]
fn notes_descending_reverses_the_order() {
    let tmp = vault(&[("note10.md", ""), ("note2.md", "")]);

    zet(&tmp)
        .args(["notes", "--sort", "name-desc"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)note10.*note2").unwrap());
}

#[test]
fn notes_json_output_parses() {
    let tmp = vault(&[("alpha.md", "")]);

    let output = zet(&tmp)
        .args(["notes", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(items[0]["name"], "alpha");
}

#[test]
fn empty_vault_lists_zero_notes() {
    let tmp = vault(&[]);

    zet(&tmp)
        .arg("notes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes [0]"));
}

#[test]
fn links_and_backlinks_agree() {
    let tmp = vault(&[("A.md", "[[B]]"), ("B.md", "# B")]);

    zet(&tmp)
        .args(["links", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Links [1]"))
        .stdout(predicate::str::contains("B"));

    zet(&tmp)
        .args(["backlinks", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlinks [1]"))
        .stdout(predicate::str::contains("A"));
}

#[test]
fn links_without_a_note_reports_absent_context() {
    let tmp = vault(&[("A.md", "[[B]]")]);

    zet(&tmp)
        .arg("links")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note selected"));
}

#[test]
fn backlinks_for_unknown_note_fails_with_one_message() {
    let tmp = vault(&[("A.md", "")]);

    zet(&tmp)
        .args(["backlinks", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no note named 'Ghost'"));
}

#[test]
fn open_resolves_an_existing_note() {
    let tmp = vault(&[("Foo.md", "# Foo")]);

    zet(&tmp)
        .args(["open", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foo.md"))
        .stdout(predicate::str::contains("Created").not());
}

#[test]
fn open_materializes_a_missing_note() {
    let tmp = vault(&[]);

    zet(&tmp)
        .args(["open", "Fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("Fresh.md")).unwrap(),
        "# Fresh"
    );

    // opening again resolves instead of re-creating
    zet(&tmp)
        .args(["open", "Fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not());
}

#[test]
fn new_filters_the_picker_and_offers_create() {
    let tmp = vault(&[("Daily Log.md", ""), ("Projects.md", "")]);

    zet(&tmp)
        .args(["new", "dai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Log"))
        .stdout(predicate::str::contains("Projects").not());

    zet(&tmp)
        .args(["new", "Scratch", "--create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(tmp.path().join("Scratch.md").exists());
}

#[test]
fn new_creates_when_nothing_matches() {
    let tmp = vault(&[("Alpha.md", "")]);

    zet(&tmp)
        .args(["new", "Zulu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(tmp.path().join("Zulu.md").exists());
}

#[test]
fn complete_lists_identifiers_after_open_brackets() {
    let tmp = vault(&[("alpha.md", ""), ("beta.md", "")]);

    zet(&tmp)
        .args(["complete", "see [["])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)alpha.*beta").unwrap());

    zet(&tmp)
        .args(["complete", "see ["])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completions"));
}

#[test]
fn definition_jumps_to_the_linked_note() {
    let tmp = vault(&[("A.md", "go to [[B]] now"), ("B.md", "# B")]);

    zet(&tmp)
        .args(["definition", "A", "1", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B.md:0"));
}

#[test]
fn definition_materializes_an_unresolved_link() {
    let tmp = vault(&[("A.md", "see [[Nowhere]]")]);

    zet(&tmp)
        .args(["definition", "A", "1", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Nowhere.md:0"));
    assert!(tmp.path().join("Nowhere.md").exists());
}

#[test]
fn definition_outside_a_link_is_absent() {
    let tmp = vault(&[("A.md", "plain text")]);

    zet(&tmp)
        .args(["definition", "A", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No link under the cursor"));
}
