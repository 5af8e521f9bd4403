extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_png_and_confirms_the_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("starfish.png");

    Command::cargo_bin("julia")
        .unwrap()
        .args(&["16", "32", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("16x16").and(predicate::str::contains("M=32")));

    let img = image::open(&out).unwrap();
    assert_eq!(img.dimensions(), (16, 16));
}

#[test]
fn nonnumeric_size_is_a_usage_error() {
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["sixteen"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: julia"));
}

#[test]
fn zero_iteration_cap_is_a_usage_error() {
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["16", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: julia"));
}

#[test]
fn unwritable_output_path_is_a_render_failure() {
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["8", "8", "/nonexistent-dir/starfish.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not write"));
}
