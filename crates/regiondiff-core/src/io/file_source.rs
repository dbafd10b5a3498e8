use std::path::{Path, PathBuf};

use image::imageops;
use tracing::debug;

use crate::error::{DiffError, Result};
use crate::frame::{RawImage, RegionSize};
use crate::session::CaptureSource;

use super::image_io::rgba_to_raw;

/// Capture source backed by two image files, re-read on every cycle so
/// external edits show up on the next trigger.
#[derive(Clone, Debug)]
pub struct FileCaptureSource {
    left: PathBuf,
    right: PathBuf,
}

impl FileCaptureSource {
    pub fn new(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn left(&self) -> &Path {
        &self.left
    }

    pub fn right(&self) -> &Path {
        &self.right
    }
}

impl CaptureSource for FileCaptureSource {
    fn capture_pair(&mut self, region: Option<RegionSize>) -> Result<(RawImage, RawImage)> {
        let left = grab(&self.left, region)?;
        let right = grab(&self.right, region)?;
        Ok((left, right))
    }
}

/// Read one file and cut the top-left `region` out of it.
fn grab(path: &Path, region: Option<RegionSize>) -> Result<RawImage> {
    let img = image::open(path).map_err(|e| {
        DiffError::CaptureUnavailable(format!("{}: {}", path.display(), e))
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let rgba = match region {
        None => rgba,
        Some(r) if r.width > w || r.height > h => {
            return Err(DiffError::CaptureUnavailable(format!(
                "{}: region {} exceeds image {}x{}",
                path.display(),
                r,
                w,
                h
            )));
        }
        Some(r) => imageops::crop_imm(&rgba, 0, 0, r.width, r.height).to_image(),
    };

    debug!(path = %path.display(), width = rgba.width(), height = rgba.height(), "captured");
    rgba_to_raw(rgba)
}
