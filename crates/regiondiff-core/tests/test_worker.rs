#[allow(dead_code)]
mod common;

use std::sync::mpsc;
use std::time::Duration;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use common::{capture_unavailable, solid, ScriptedSource, YELLOW};
use regiondiff_core::diff::DiffMode;
use regiondiff_core::frame::RegionSize;
use regiondiff_core::io::FileCaptureSource;
use regiondiff_core::session::CompareSession;
use regiondiff_core::worker::{spawn_worker, WorkerResult};

const TIMEOUT: Duration = Duration::from_secs(10);

fn black_white_source() -> ScriptedSource {
    ScriptedSource::repeating(solid(4, 4, [0, 0, 0]), solid(4, 4, [255, 255, 255]))
}

#[test]
fn test_trigger_produces_frame() {
    let (tx, rx) = mpsc::channel();
    let mut handle =
        spawn_worker(black_white_source(), CompareSession::new(DiffMode::Rgb, None), tx).unwrap();

    let generation = handle.trigger().unwrap();
    let result = rx.recv_timeout(TIMEOUT).unwrap();

    assert_eq!(result.generation(), generation);
    assert!(handle.accept(&result));
    match result {
        WorkerResult::Frame {
            image,
            label,
            changed_pixels,
            total_pixels,
            ..
        } => {
            assert_eq!(label, "RGB difference");
            assert_eq!((changed_pixels, total_pixels), (16, 16));
            assert!(image.pixels().all(|p| p.0 == YELLOW));
        }
        other => panic!("expected frame, got {other:?}"),
    }
    handle.shutdown();
}

#[test]
fn test_set_mode_runs_cycle_with_new_mode() {
    let (tx, rx) = mpsc::channel();
    let mut handle = spawn_worker(
        black_white_source(),
        CompareSession::new(DiffMode::Rgb, None),
        tx,
    )
    .unwrap();

    assert_eq!(handle.set_mode(DiffMode::RightOnly).unwrap(), "Right image");
    let result = rx.recv_timeout(TIMEOUT).unwrap();
    match result {
        WorkerResult::Frame { image, label, .. } => {
            assert_eq!(label, "Right image");
            assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
        }
        other => panic!("expected frame, got {other:?}"),
    }
}

#[test]
fn test_failed_cycle_does_not_stop_worker() {
    let (tx, rx) = mpsc::channel();
    let source = ScriptedSource::new(
        vec![capture_unavailable()],
        (solid(2, 2, [0, 0, 0]), solid(2, 2, [0, 0, 0])),
    );
    let mut handle = spawn_worker(source, CompareSession::default(), tx).unwrap();

    handle.trigger().unwrap();
    let first = rx.recv_timeout(TIMEOUT).unwrap();
    assert!(matches!(first, WorkerResult::Skipped { .. }));

    handle.trigger().unwrap();
    // The default session asks for a 387x292 region; the scripted source
    // ignores it and answers with its 2x2 pair.
    let second = rx.recv_timeout(TIMEOUT).unwrap();
    assert!(matches!(second, WorkerResult::Frame { .. }));
}

#[test]
fn test_stale_results_are_rejected() {
    let (tx, rx) = mpsc::channel();
    let mut handle = spawn_worker(
        black_white_source(),
        CompareSession::new(DiffMode::Grayscale, None),
        tx,
    )
    .unwrap();

    handle.trigger().unwrap();
    handle.trigger().unwrap();
    let newest = handle.trigger().unwrap();
    assert_eq!(newest, 3);

    let stale = WorkerResult::Skipped {
        generation: 1,
        reason: "old".into(),
    };
    assert!(!handle.accept(&stale));

    // Queued triggers may be collapsed, but the newest generation always answers.
    let mut seen = Vec::new();
    while seen.last() != Some(&newest) {
        seen.push(rx.recv_timeout(TIMEOUT).unwrap().generation());
    }
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_dropping_handle_stops_worker() {
    let (tx, rx) = mpsc::channel();
    let handle = spawn_worker(black_white_source(), CompareSession::default(), tx).unwrap();
    drop(handle);
    // The worker thread owned the only sender; once it exits the channel closes.
    assert!(rx.recv_timeout(TIMEOUT).is_err());
}

#[test]
fn test_set_region_invalidates_older_results_and_recaptures() {
    let dir = TempDir::new().unwrap();
    let left = dir.path().join("l.png");
    let right = dir.path().join("r.png");
    RgbaImage::from_pixel(8, 6, Rgba([0, 0, 0, 255])).save(&left).unwrap();
    RgbaImage::from_pixel(8, 6, Rgba([0, 0, 0, 255])).save(&right).unwrap();

    let (tx, rx) = mpsc::channel();
    let mut handle = spawn_worker(
        FileCaptureSource::new(&left, &right),
        CompareSession::new(DiffMode::Grayscale, None),
        tx,
    )
    .unwrap();

    let before = handle.trigger().unwrap();
    let generation = handle
        .set_region(Some(RegionSize {
            width: 4,
            height: 3,
        }))
        .unwrap();
    assert!(generation > before);
    assert_eq!(handle.latest_generation(), generation);

    // A result stamped before the region change is no longer shown.
    let in_flight = WorkerResult::Skipped {
        generation: before,
        reason: "old region".into(),
    };
    assert!(!handle.accept(&in_flight));

    let mut latest = rx.recv_timeout(TIMEOUT).unwrap();
    while latest.generation() < generation {
        assert!(!handle.accept(&latest));
        latest = rx.recv_timeout(TIMEOUT).unwrap();
    }
    assert!(handle.accept(&latest));
    match latest {
        WorkerResult::Frame { image, .. } => assert_eq!(image.dimensions(), (4, 3)),
        other => panic!("expected frame, got {other:?}"),
    }
}
