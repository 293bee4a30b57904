#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn warplan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("warplan").unwrap();
    cmd.current_dir(dir.path())
        .env("WARPLAN_ROOT", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn init_session(dir: &TempDir) {
    warplan(dir)
        .args(["init", "--session", "guild-war"])
        .assert()
        .success();
}

fn show_json(dir: &TempDir) -> serde_json::Value {
    let out = warplan(dir).args(["show", "--json"]).output().unwrap();
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).unwrap()
}

fn unit_available(snapshot: &serde_json::Value, id: &str) -> bool {
    snapshot["snapshot"]["units"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == id)
        .unwrap()["available"]
        .as_bool()
        .unwrap()
}

// ---------------------------------------------------------------------------
// warplan init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_and_state() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    assert!(dir.path().join(".warplan").is_dir());
    assert!(dir.path().join(".warplan/config.yaml").exists());
    assert!(dir.path().join(".warplan/state.yaml").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);
    warplan(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:"));
}

#[test]
fn init_keeps_existing_roster() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".warplan")).unwrap();
    std::fs::write(
        dir.path().join(".warplan/config.yaml"),
        "session: custom\nroster:\n  units:\n    - id: u1\n",
    )
    .unwrap();

    warplan(&dir).arg("init").assert().success();

    let snapshot = show_json(&dir);
    assert_eq!(snapshot["session"], "custom");
    assert_eq!(snapshot["snapshot"]["units"].as_array().unwrap().len(), 1);
}

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();
    warplan(&dir)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

// ---------------------------------------------------------------------------
// warplan show
// ---------------------------------------------------------------------------

#[test]
fn show_lists_roster() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("calgar"))
        .stdout(predicate::str::contains("ultramarines"))
        .stdout(predicate::str::contains("Units (6/6 available):"))
        .stdout(predicate::str::contains("Marneus Calgar, Varro Tigurius"))
        .stdout(predicate::str::contains("Undo: no  Redo: no"));
}

#[test]
fn show_counts_available_units() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);
    warplan(&dir)
        .args(["unit", "unavailable", "calgar"])
        .assert()
        .success();

    warplan(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Units (5/6 available):"))
        .stdout(predicate::str::contains("1/2"));
}

// ---------------------------------------------------------------------------
// unit / team / undo / redo
// ---------------------------------------------------------------------------

#[test]
fn unit_undo_redo_cycle() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .args(["unit", "unavailable", "calgar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked unit calgar unavailable"));
    let s = show_json(&dir);
    assert!(!unit_available(&s, "calgar"));
    assert_eq!(s["snapshot"]["can_undo"], true);
    assert_eq!(s["snapshot"]["can_redo"], false);

    warplan(&dir).arg("undo").assert().success();
    let s = show_json(&dir);
    assert!(unit_available(&s, "calgar"));
    assert_eq!(s["snapshot"]["can_undo"], false);
    assert_eq!(s["snapshot"]["can_redo"], true);

    warplan(&dir).arg("redo").assert().success();
    let s = show_json(&dir);
    assert!(!unit_available(&s, "calgar"));
    assert_eq!(s["snapshot"]["can_undo"], true);
    assert_eq!(s["snapshot"]["can_redo"], false);
}

#[test]
fn undo_reverts_only_last_change() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir).args(["unit", "unavailable", "calgar"]).assert().success();
    warplan(&dir).args(["unit", "unavailable", "ragnar"]).assert().success();
    warplan(&dir).arg("undo").assert().success();

    let s = show_json(&dir);
    assert!(!unit_available(&s, "calgar"));
    assert!(unit_available(&s, "ragnar"));

    warplan(&dir)
        .arg("undo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to undo"));
}

#[test]
fn redo_with_empty_slot_fails() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .arg("redo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to redo"));
}

#[test]
fn new_change_discards_redo() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir).args(["unit", "unavailable", "calgar"]).assert().success();
    warplan(&dir).arg("undo").assert().success();
    warplan(&dir).args(["team", "unavailable", "tau"]).assert().success();

    let s = show_json(&dir);
    assert_eq!(s["snapshot"]["can_redo"], false);
    warplan(&dir).arg("redo").assert().failure();
}

#[test]
fn unknown_unit_fails_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);
    let before = show_json(&dir);

    warplan(&dir)
        .args(["unit", "unavailable", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unit not found: ghost"));

    assert_eq!(show_json(&dir), before);
}

#[test]
fn team_flag_leaves_members_alone() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .args(["team", "unavailable", "ultramarines"])
        .assert()
        .success();

    let s = show_json(&dir);
    let team = s["snapshot"]["teams"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "ultramarines")
        .unwrap()
        .clone();
    assert_eq!(team["available"], false);
    assert!(unit_available(&s, "calgar"));
    assert!(unit_available(&s, "tigurius"));
}

#[test]
fn no_op_change_is_reported() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .args(["unit", "available", "calgar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no change)"));
    let s = show_json(&dir);
    assert_eq!(s["snapshot"]["can_undo"], true);
}

// ---------------------------------------------------------------------------
// history / reset
// ---------------------------------------------------------------------------

#[test]
fn history_lists_newest_first() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir).args(["unit", "unavailable", "calgar"]).assert().success();
    warplan(&dir).arg("undo").assert().success();

    let out = warplan(&dir)
        .args(["history", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["op"], "undo");
    assert_eq!(entries[1]["op"], "apply");
}

#[test]
fn reset_restores_roster_defaults() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir).args(["unit", "unavailable", "calgar"]).assert().success();
    warplan(&dir).arg("reset").assert().success();

    let s = show_json(&dir);
    assert!(unit_available(&s, "calgar"));
    assert_eq!(s["snapshot"]["can_undo"], false);

    warplan(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes yet."));
}

#[test]
fn state_file_records_slots() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);
    warplan(&dir).args(["unit", "unavailable", "calgar"]).assert().success();

    let raw = std::fs::read_to_string(dir.path().join(".warplan/state.yaml")).unwrap();
    let state: serde_yaml::Value = serde_yaml::from_str(&raw).unwrap();
    assert_eq!(state["undo"]["type"], "make_available");
    assert_eq!(state["undo"]["target"]["id"], "calgar");
    assert!(state.get("redo").is_none());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_sample_is_clean() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_reports_unknown_member() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);
    std::fs::write(
        dir.path().join(".warplan/config.yaml"),
        "session: war\nroster:\n  units:\n    - id: u1\n  teams:\n    - id: t1\n      members: [u1, ghost]\n",
    )
    .unwrap();

    warplan(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown unit 'ghost'"));

    warplan(&dir).arg("reset").assert().failure();
}

#[test]
fn config_show_prints_roster() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session: guild-war"))
        .stdout(predicate::str::contains("id: calgar"));
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn rust_log_debug_shows_transitions() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .env("RUST_LOG", "debug")
        .args(["unit", "unavailable", "calgar"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ledger transition"));
}

#[test]
fn default_log_level_hides_debug() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);

    warplan(&dir)
        .args(["unit", "unavailable", "calgar"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ledger transition").not());
}

#[test]
fn unknown_state_version_warns_and_loads() {
    let dir = TempDir::new().unwrap();
    init_session(&dir);
    let path = dir.path().join(".warplan/state.yaml");
    let state = std::fs::read_to_string(&path).unwrap();
    assert!(state.contains("version: 1\n"));
    std::fs::write(&path, state.replacen("version: 1\n", "version: 2\n", 1)).unwrap();

    warplan(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("calgar"))
        .stderr(predicate::str::contains("unsupported state version"));
}
