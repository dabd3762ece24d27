#![cfg(feature = "cli")]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("deck-tour")
}

#[test]
fn full_tour() {
    cmd()
        .assert()
        .success()
        .stderr("")
        .stdout(contains("=== Browsing the web ==="))
        .stdout(contains("Current page: ithsdistans.se"))
        .stdout(contains("Went back to: youtube.com"))
        .stdout(contains("Current page: twitter.com"))
        .stdout(contains("Top plate is: Green plate"))
        .stdout(contains("Stack is now: []"))
        .stdout(contains("Empty deck pop: empty"))
        .stdout(contains("~~~ Welcome to the Pancake Stack ~~~"));
}

#[test]
fn single_section() {
    cmd()
        .args(["--section", "stack"])
        .assert()
        .success()
        .stdout(contains("Stack at start:"))
        .stdout(contains("Browsing the web").not())
        .stdout(contains("Pancake Stack").not());
}

#[test]
fn custom_history() {
    cmd()
        .args(["-s", "browsing", "--page", "a.org", "--page", "b.org", "--detour", "c.org"])
        .assert()
        .success()
        .stdout(contains("Visiting, in order: a.org, b.org"))
        .stdout(contains("Went back to: a.org"))
        .stdout(contains("Current page: c.org"));
}

#[test]
fn custom_plates() {
    cmd()
        .args(["-s", "stack", "--plate", "Soup bowl"])
        .assert()
        .success()
        .stdout(contains("Taking plate: Soup bowl"))
        .stdout(contains("Red plate").not());
}

#[test]
fn invalid_pancakes() {
    cmd()
        .args(["--pancakes", "0"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("deck-tour: error: invalid pancake count: 0"));
}

#[test]
fn invalid_section() {
    cmd()
        .args(["--section", "waffles"])
        .assert()
        .failure()
        .code(2)
        .stdout("");
}

#[test]
fn verbose_logs_go_to_stderr() {
    cmd()
        .args(["-vvv", "-s", "browsing"])
        .assert()
        .success()
        .stdout(contains("rendering tour section").not())
        .stderr(contains("rendering tour section"));
}
