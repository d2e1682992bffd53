mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use common::{create_fake_image, create_sample_tree, create_temp_directory, create_test_image};
use predicates::prelude::*;
use std::path::Path;

fn rescale() -> Command {
    Command::cargo_bin("img-rescale").unwrap()
}

fn rescale_tree(src: &Path, out: &Path, extra: &[&str]) -> assert_cmd::assert::Assert {
    rescale().arg(src).arg(out).args(extra).assert()
}

#[test]
fn test_cli_help() {
    rescale().arg("--help").assert().success();
}

#[test]
fn test_missing_args_exit_code_one() {
    rescale().assert().code(1);
    rescale().args(["src", "out"]).assert().code(1);
}

#[test]
fn test_non_numeric_scale_exit_code_one() {
    let temp_dir = create_temp_directory();
    let out = temp_dir.path().join("out");

    rescale_tree(temp_dir.path(), &out, &["twice"]).code(1);

    assert!(!out.exists());
}

#[test]
fn test_nonexistent_source_fails() {
    let temp_dir = create_temp_directory();
    let out = temp_dir.path().join("out");

    rescale_tree(&temp_dir.path().join("missing"), &out, &["2"])
        .code(1)
        .stderr(predicate::str::contains("missing"));

    assert!(!out.exists());
}

#[test]
fn test_scenario_mirrors_and_scales() {
    let temp_dir = create_temp_directory();
    let src = create_sample_tree(temp_dir.path());
    let out = temp_dir.path().join("out");

    rescale_tree(&src, &out, &["2.0"])
        .success()
        .stdout(predicate::str::contains("Scale factor: 2"))
        .stdout(predicate::str::contains("All images resized and saved!"));

    assert_eq!(image::image_dimensions(out.join("a.jpg")).unwrap(), (200, 200));
    assert_eq!(
        image::image_dimensions(out.join("sub").join("b.png")).unwrap(),
        (400, 100)
    );
    assert!(!out.join("notes.txt").exists());
}

#[test]
fn test_format_is_preserved() {
    let temp_dir = create_temp_directory();
    let src = create_sample_tree(temp_dir.path());
    let out = temp_dir.path().join("out");

    rescale_tree(&src, &out, &["0.5", "-q"]).success();

    let jpg = image::ImageReader::open(out.join("a.jpg"))
        .unwrap()
        .with_guessed_format()
        .unwrap();
    assert_eq!(jpg.format(), Some(image::ImageFormat::Jpeg));

    let png = image::ImageReader::open(out.join("sub").join("b.png"))
        .unwrap()
        .with_guessed_format()
        .unwrap();
    assert_eq!(png.format(), Some(image::ImageFormat::Png));
}

#[test]
fn test_zero_scale_reports_failure() {
    let temp_dir = create_temp_directory();
    let src = create_sample_tree(temp_dir.path());
    let out = temp_dir.path().join("out");

    rescale_tree(&src, &out, &["0"])
        .code(1)
        .stderr(predicate::str::contains("2 entries failed"))
        .stderr(predicate::str::contains("Dimension"));

    assert!(!out.join("a.jpg").exists());
    assert!(!out.join("sub").join("b.png").exists());
}

#[test]
fn test_empty_source_directory() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    let dest = out.child("nested").child("dest");

    rescale_tree(src.path(), dest.path(), &["2"]).success();

    dest.assert(predicate::path::is_dir());
}

#[test]
fn test_directories_without_images_not_mirrored() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    create_test_image(&src.path().join("a.png"), 6, 6);
    src.child("docs").child("readme.txt").write_str("notes").unwrap();
    src.child("empty").create_dir_all().unwrap();

    rescale_tree(src.path(), out.path(), &["2"]).success();

    out.child("a.png").assert(predicate::path::is_file());
    out.child("docs").assert(predicate::path::missing());
    out.child("empty").assert(predicate::path::missing());
}

#[test]
fn test_oversized_scale_reported_not_fatal() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    create_test_image(&src.path().join("a.png"), 100, 100);

    rescale_tree(src.path(), out.path(), &["40000000"])
        .code(1)
        .stderr(predicate::str::contains("1 entries failed"))
        .stderr(predicate::str::contains("Dimension"));

    out.child("a.png").assert(predicate::path::missing());
}

#[test]
fn test_partial_failure_keeps_good_output() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    create_fake_image(&src.path().join("broken.png"));
    create_test_image(&src.path().join("good.bmp"), 10, 20);

    rescale_tree(src.path(), out.path(), &["3"])
        .code(1)
        .stderr(predicate::str::contains("broken.png"));

    out.child("good.bmp").assert(predicate::path::is_file());
    out.child("broken.png").assert(predicate::path::missing());
    assert_eq!(
        image::image_dimensions(out.path().join("good.bmp")).unwrap(),
        (30, 60)
    );
}

#[test]
fn test_extension_filter_and_case() {
    let temp_dir = create_temp_directory();
    let src = temp_dir.path().join("src");
    let out = temp_dir.path().join("out");
    create_test_image(&src.join("upper.PNG"), 8, 8);
    create_test_image(&src.join("skip.jpg"), 8, 8);

    rescale_tree(&src, &out, &["2", "-e", "png"]).success();

    assert_eq!(image::image_dimensions(out.join("upper.PNG")).unwrap(), (16, 16));
    assert!(!out.join("skip.jpg").exists());
}

#[test]
fn test_round_flag() {
    let temp_dir = create_temp_directory();
    let src = temp_dir.path().join("src");
    let out_trunc = temp_dir.path().join("trunc");
    let out_round = temp_dir.path().join("round");
    create_test_image(&src.join("a.png"), 3, 5);

    rescale_tree(&src, &out_trunc, &["1.5"]).success();
    rescale_tree(&src, &out_round, &["1.5", "--round"]).success();

    assert_eq!(image::image_dimensions(out_trunc.join("a.png")).unwrap(), (4, 7));
    assert_eq!(image::image_dimensions(out_round.join("a.png")).unwrap(), (5, 8));
}

#[test]
fn test_rerun_into_same_destination() {
    let temp_dir = create_temp_directory();
    let src = create_sample_tree(temp_dir.path());
    let out = temp_dir.path().join("out");

    for _ in 0..2 {
        rescale_tree(&src, &out, &["2", "-q"]).success();
    }

    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 2);
    assert_eq!(std::fs::read_dir(out.join("sub")).unwrap().count(), 1);
}

#[test]
fn test_verbose_lists_files() {
    let temp_dir = create_temp_directory();
    let src = create_sample_tree(temp_dir.path());
    let out = temp_dir.path().join("out");

    rescale_tree(&src, &out, &["2", "-v"])
        .success()
        .stdout(predicate::str::contains("100x100 -> 200x200"))
        .stdout(predicate::str::contains("200x50 -> 400x100"));
}
