use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_sample(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("sample.png");
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 31 + y * 17) % 256) as u8;
        Rgb([v, 255 - v, (x * y % 256) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

fn seamcarve() -> Command {
    Command::cargo_bin("seamcarve").unwrap()
}

#[test]
fn reports_on_an_image() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 6, 5);
    seamcarve()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("width: 6"))
        .stdout(predicate::str::contains("height: 5"))
        .stdout(predicate::str::contains("vertical seam:"))
        .stdout(predicate::str::contains("after carving: 5x4"));
}

#[test]
fn carves_to_the_requested_size() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 8, 6);
    let output = dir.path().join("carved.png");
    seamcarve()
        .arg(&input)
        .args(&["--width", "5", "--height", "4", "--output"])
        .arg(&output)
        .assert()
        .success();
    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (5, 4));
}

#[test]
fn carves_only_the_width() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 7, 3);
    let output = dir.path().join("narrow.png");
    seamcarve()
        .arg(&input)
        .args(&["-W", "4", "-o"])
        .arg(&output)
        .assert()
        .success();
    assert_eq!(image::open(&output).unwrap().dimensions(), (4, 3));
}

#[test]
fn writes_the_energy_map() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 6, 4);
    let energy = dir.path().join("energy.png");
    seamcarve()
        .arg(&input)
        .arg("--energy")
        .arg(&energy)
        .assert()
        .success();
    assert_eq!(image::open(&energy).unwrap().dimensions(), (6, 4));
}

#[test]
fn refuses_to_upscale() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 4, 4);
    seamcarve()
        .arg(&input)
        .args(&["--width", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot upscale"));
}

#[test]
fn refuses_a_missing_file() {
    let dir = TempDir::new().unwrap();
    seamcarve()
        .arg(dir.path().join("nothing.png"))
        .assert()
        .failure();
}
