#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a real image of the given size; the format follows the extension.
pub fn create_test_image(path: &Path, width: u32, height: u32) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }

    let is_rgba = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("png") | Some("gif")
    );
    if is_rgba {
        RgbaImage::from_pixel(width, height, Rgba([20, 120, 220, 255]))
            .save(path)
            .unwrap();
    } else {
        RgbImage::from_pixel(width, height, Rgb([200, 100, 50]))
            .save(path)
            .unwrap();
    }
    path.to_path_buf()
}

pub fn create_fake_image(path: &Path) -> PathBuf {
    File::create(path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path.to_path_buf()
}

/// `src/a.jpg` (100x100) and `src/sub/b.png` (200x50), plus a text file that must be ignored.
pub fn create_sample_tree(root: &Path) -> PathBuf {
    let src = root.join("src");
    create_test_image(&src.join("a.jpg"), 100, 100);
    create_test_image(&src.join("sub").join("b.png"), 200, 50);
    File::create(src.join("notes.txt"))
        .unwrap()
        .write_all(b"not an image")
        .unwrap();
    src
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
