use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gradz_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gradz").unwrap();
    cmd.env("GRADZ_COLLECTION", temp.path().join("collection.json"))
        .env("GRADZ_CONFIG_DIR", temp.path().join("config"));
    cmd
}

fn write_collection(dir: &Path, collection: &Value) {
    fs::write(
        dir.join("collection.json"),
        serde_json::to_string_pretty(collection).unwrap(),
    )
    .unwrap();
}

fn read_collection(dir: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.join("collection.json")).unwrap()).unwrap()
}

fn sample_collection() -> Value {
    json!({
        "notes": [
            {
                "id": 1,
                "fields": ["Bonjour", "Hello"],
                "tags": ["foo", "Hard"],
                "updated_at": "2026-01-01T00:00:00Z"
            },
            {
                "id": 2,
                "fields": ["Merci", "Thanks"],
                "tags": [],
                "updated_at": "2026-01-01T00:00:00Z"
            }
        ],
        "cards": [
            {
                "id": 101,
                "note_id": 1,
                "deck": "French",
                "lapses": 0,
                "interval": 95,
                "ease": 2600,
                "reps": 12
            },
            {
                "id": 102,
                "note_id": 2,
                "deck": "French",
                "lapses": 6,
                "interval": 2,
                "ease": 2100,
                "reps": 8
            }
        ]
    })
}

#[test]
fn test_tag_assigns_and_reports_count() {
    let temp = TempDir::new().unwrap();
    write_collection(temp.path(), &sample_collection());

    gradz_cmd(&temp)
        .args(["tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned difficulty tags to 2 notes."));

    let collection = read_collection(temp.path());
    let notes = collection["notes"].as_array().unwrap();

    // Note 1: interval 95 -> VeryEasy; stale Hard removed, foo kept.
    assert_eq!(notes[0]["tags"], json!(["foo", "VeryEasy"]));
    // Note 2: 6 lapses -> VeryHard.
    assert_eq!(notes[1]["tags"], json!(["VeryHard"]));
}

#[test]
fn test_tag_is_idempotent_across_runs() {
    let temp = TempDir::new().unwrap();
    write_collection(temp.path(), &sample_collection());

    gradz_cmd(&temp).args(["tag"]).assert().success();
    let first = read_collection(temp.path());

    gradz_cmd(&temp)
        .args(["tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 notes"));
    let second = read_collection(temp.path());

    assert_eq!(first["notes"][0]["tags"], second["notes"][0]["tags"]);
    assert_eq!(first["notes"][1]["tags"], second["notes"][1]["tags"]);
}

#[test]
fn test_tag_empty_collection_reports_no_match() {
    let temp = TempDir::new().unwrap();
    write_collection(temp.path(), &json!({"notes": [], "cards": []}));

    gradz_cmd(&temp)
        .args(["tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards matched the search."));
}

#[test]
fn test_tag_with_query_narrows_selection() {
    let temp = TempDir::new().unwrap();
    write_collection(temp.path(), &sample_collection());

    gradz_cmd(&temp)
        .args(["tag", "tag:foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned difficulty tags to 1 note."));

    let collection = read_collection(temp.path());
    // Note 2 was outside the query and stays untagged.
    assert_eq!(collection["notes"][1]["tags"], json!([]));
}

#[test]
fn test_tag_respects_saved_thresholds() {
    let temp = TempDir::new().unwrap();
    write_collection(temp.path(), &sample_collection());

    // Raise the VeryEasy interval bound past note 1's interval of 95; with
    // ease 2600 < 2800 the card falls through to the Easy conjunction.
    gradz_cmd(&temp)
        .args(["config", "very_easy_ivl_min", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("very_easy_ivl_min set to 100"));

    gradz_cmd(&temp).args(["tag"]).assert().success();

    let collection = read_collection(temp.path());
    assert_eq!(collection["notes"][0]["tags"], json!(["foo", "Easy"]));
}

#[test]
fn test_config_show_reset_roundtrip() {
    let temp = TempDir::new().unwrap();

    gradz_cmd(&temp)
        .args(["config", "hard_lapses_min", "7"])
        .assert()
        .success();

    gradz_cmd(&temp)
        .args(["config", "hard_lapses_min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7"));

    gradz_cmd(&temp)
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));

    gradz_cmd(&temp)
        .args(["config", "hard_lapses_min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_config_show_all_is_grouped() {
    let temp = TempDir::new().unwrap();

    gradz_cmd(&temp)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Very Hard"))
        .stdout(predicate::str::contains("very_easy_ease_min_pct  = 280"));
}

#[test]
fn test_list_shows_assigned_tags() {
    let temp = TempDir::new().unwrap();
    write_collection(temp.path(), &sample_collection());

    gradz_cmd(&temp).args(["tag"]).assert().success();

    gradz_cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bonjour"))
        .stdout(predicate::str::contains("VeryEasy"))
        .stdout(predicate::str::contains("VeryHard"));
}
