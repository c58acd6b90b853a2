//! Integration tests for the `pasch-cli` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pasch() -> Command {
    Command::cargo_bin("pasch").unwrap()
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_both_tables() {
    pasch()
        .args(["simulate", "-r", "3", "-p", "Amy,Bo", "-d", "uniform", "-s", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation")
                .and(predicate::str::contains("6 rolls recorded"))
                .and(predicate::str::contains("Distribution of Rolls"))
                .and(predicate::str::contains("Roll History"))
                .and(predicate::str::contains("Amy"))
                .and(predicate::str::contains("Bo")),
        );
}

#[test]
fn simulate_verbose_lists_every_roll() {
    let output = pasch()
        .args(["simulate", "-r", "2", "-p", "Amy", "-v"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Amy rolled a").count(), 2);
}

#[test]
fn simulate_is_deterministic_for_a_seed() {
    let run = || {
        let output = pasch()
            .args(["simulate", "-r", "5", "-p", "Amy,Bo", "-s", "99"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_rejects_duplicate_players() {
    pasch()
        .args(["simulate", "-p", "A,A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn simulate_rejects_empty_player_list() {
    pasch()
        .args(["simulate", "-p", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn simulate_rejects_unknown_distribution() {
    pasch()
        .args(["simulate", "-d", "gaussian"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown distribution"));
}

// ---------------------------------------------------------------------------
// save / show
// ---------------------------------------------------------------------------

#[test]
fn save_then_show_round_trip() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("game.json");

    pasch()
        .args(["simulate", "-r", "4", "-p", "Amy,Bo", "-s", "3"])
        .args(["--save", snapshot.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot written to"));

    let json = fs::read_to_string(&snapshot).unwrap();
    assert!(json.contains("\"players\""));
    assert!(json.contains("\"sum_counts\""));

    pasch()
        .args(["show", snapshot.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("8 rolls recorded")
                .and(predicate::str::contains("Next to roll: Amy"))
                .and(predicate::str::contains("Roll History")),
        );
}

#[test]
fn show_fails_on_missing_file() {
    pasch()
        .args(["show", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn show_rejects_malformed_snapshot() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.json");
    fs::write(&file, "{\"players\": 3}").unwrap();

    pasch()
        .args(["show", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshot"));
}
