extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn mandelbrot() -> Command {
    Command::cargo_bin("mandelbrot").unwrap()
}

#[test]
fn renders_a_small_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    mandelbrot()
        .arg(&path)
        .args(&["--size", "40x30", "--iterations", "64", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolution: 40x30 pixels"))
        .stdout(predicate::str::contains("Max iterations: 64"))
        .stdout(predicate::str::contains("Computation completed in"))
        .stdout(predicate::str::contains("Saved to:"));

    let decoded = image::open(&path).unwrap().to_rgb();
    assert_eq!(decoded.dimensions(), (40, 30));
}

#[test]
fn accepts_negative_corners() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoom.png");
    mandelbrot()
        .arg(&path)
        .args(&["-s", "16x16", "-i", "32"])
        .args(&["--leftlower", "-0.8,-0.2", "--rightupper", "-0.6,0.0"])
        .assert()
        .success();
    assert!(path.exists());
}

#[test]
fn same_arguments_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    for path in &[&first, &second] {
        mandelbrot()
            .arg(path)
            .args(&["--size", "24x16", "--iterations", "100"])
            .assert()
            .success();
    }
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    mandelbrot()
        .arg(&path)
        .args(&["--size", "8x8", "--iterations", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error saving image"));
}

#[test]
fn inverted_plane_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    mandelbrot()
        .arg(dir.path().join("never.png"))
        .args(&["--size", "8x8", "--leftlower", "1.0,1.0", "--rightupper", "-1.0,-1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn garbage_size_is_rejected() {
    mandelbrot()
        .args(&["--size", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}
