#[allow(dead_code)]
mod common;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use common::{count_color, YELLOW};
use regiondiff_core::diff::{compare, DiffMode};
use regiondiff_core::error::DiffError;
use regiondiff_core::frame::{PixelLayout, RegionSize};
use regiondiff_core::io::{load_raw_image, save_annotated, FileCaptureSource};
use regiondiff_core::session::CaptureSource;

fn write_png(dir: &TempDir, name: &str, w: u32, h: u32, px: [u8; 4]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_pixel(w, h, Rgba(px)).save(&path).unwrap();
    path
}

#[test]
fn test_load_raw_image_keeps_alpha_layout() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "a.png", 5, 3, [1, 2, 3, 128]);

    let raw = load_raw_image(&path).unwrap();
    assert_eq!(raw.dimensions(), (5, 3));
    assert_eq!(raw.layout(), PixelLayout::Rgba);
    assert_eq!(raw.rgb_at(4, 2), [1, 2, 3]);
}

#[test]
fn test_save_annotated_round_trip() {
    let dir = TempDir::new().unwrap();
    let left = write_png(&dir, "l.png", 4, 4, [0, 0, 0, 255]);
    let right = write_png(&dir, "r.png", 4, 4, [255, 255, 255, 255]);

    let out = compare(
        &load_raw_image(&left).unwrap(),
        &load_raw_image(&right).unwrap(),
        DiffMode::Rgb,
    )
    .unwrap();

    let out_path = dir.path().join("diff.png");
    save_annotated(&out, &out_path).unwrap();
    let reloaded = image::open(&out_path).unwrap().to_rgb8();
    assert_eq!(count_color(&reloaded, YELLOW), 16);
}

#[test]
fn test_file_source_crops_to_region() {
    let dir = TempDir::new().unwrap();
    let left = write_png(&dir, "l.png", 10, 8, [5, 5, 5, 255]);
    let right = write_png(&dir, "r.png", 12, 9, [5, 5, 5, 255]);
    let mut source = FileCaptureSource::new(&left, &right);

    let (a, b) = source
        .capture_pair(Some(RegionSize {
            width: 6,
            height: 4,
        }))
        .unwrap();
    assert_eq!(a.dimensions(), (6, 4));
    assert_eq!(b.dimensions(), (6, 4));

    // Without a region, each file keeps its own size.
    let (a, b) = source.capture_pair(None).unwrap();
    assert_eq!(a.dimensions(), (10, 8));
    assert_eq!(b.dimensions(), (12, 9));
}

#[test]
fn test_file_source_region_too_large_is_capture_unavailable() {
    let dir = TempDir::new().unwrap();
    let left = write_png(&dir, "l.png", 4, 4, [0, 0, 0, 255]);
    let right = write_png(&dir, "r.png", 4, 4, [0, 0, 0, 255]);
    let mut source = FileCaptureSource::new(&left, &right);

    let err = source
        .capture_pair(Some(RegionSize {
            width: 5,
            height: 4,
        }))
        .unwrap_err();
    assert!(matches!(err, DiffError::CaptureUnavailable(_)));
}

#[test]
fn test_file_source_missing_file_is_capture_unavailable() {
    let dir = TempDir::new().unwrap();
    let left = write_png(&dir, "l.png", 4, 4, [0, 0, 0, 255]);
    let mut source = FileCaptureSource::new(&left, dir.path().join("missing.png"));

    let err = source.capture_pair(None).unwrap_err();
    assert!(matches!(err, DiffError::CaptureUnavailable(_)));
}
