pub mod annotate;
pub mod divergence;
pub mod mask;
pub mod mode;

pub use annotate::annotate;
pub use divergence::{handler_for, ModeHandler, MODE_HANDLERS};
pub use mask::{count_changed, threshold_mask};
pub use mode::DiffMode;

use image::RgbImage;
use tracing::debug;

use crate::color::{to_color_frame, to_rgb_image};
use crate::consts::HIGHLIGHT_COLOR;
use crate::error::{DiffError, Result};
use crate::filters::box_blur_3x3;
use crate::frame::{ColorFrame, DivergenceMap, RawImage};

/// Outcome of one comparison.
#[derive(Clone, Debug)]
pub struct DiffReport {
    /// Annotated RGB output, same size as the operands.
    pub image: RgbImage,
    pub mode: DiffMode,
    /// Pixels painted with the highlight color. Always 0 for pass-through modes.
    pub changed_pixels: usize,
    pub total_pixels: usize,
}

/// Compare two captures and return the annotated image.
///
/// The canvas is the left operand; every pixel whose smoothed divergence
/// exceeds the mode's threshold is painted yellow. Pass-through modes
/// return the selected operand unchanged.
pub fn compare(left: &RawImage, right: &RawImage, mode: DiffMode) -> Result<RgbImage> {
    compare_detailed(left, right, mode).map(|report| report.image)
}

/// Like [`compare`], also reporting how many pixels were flagged.
pub fn compare_detailed(left: &RawImage, right: &RawImage, mode: DiffMode) -> Result<DiffReport> {
    check_dimensions(left, right)?;

    let a = to_color_frame(left);
    let b = to_color_frame(right);
    let total_pixels = a.width() * a.height();

    let image = match mode {
        DiffMode::LeftOnly => return Ok(passthrough(&a, mode, total_pixels)),
        DiffMode::RightOnly => return Ok(passthrough(&b, mode, total_pixels)),
        _ => to_rgb_image(&a),
    };

    let handler = handler_for(mode).ok_or_else(|| DiffError::UnsupportedMode(mode.to_string()))?;

    let raw_map = (handler.divergence)(&a, &b);
    let smoothed = box_blur_3x3(&raw_map);
    let mask = threshold_mask(&smoothed, handler.threshold);
    let changed_pixels = count_changed(&mask);

    debug!(
        mode = %mode,
        threshold = handler.threshold,
        changed_pixels,
        total_pixels,
        "comparison complete"
    );

    Ok(DiffReport {
        image: annotate(image, &mask, HIGHLIGHT_COLOR),
        mode,
        changed_pixels,
        total_pixels,
    })
}

/// Raw (unsmoothed) divergence for `mode`, or `None` for pass-through modes.
pub fn divergence_map(
    left: &RawImage,
    right: &RawImage,
    mode: DiffMode,
) -> Result<Option<DivergenceMap>> {
    check_dimensions(left, right)?;
    let Some(handler) = handler_for(mode) else {
        return Ok(None);
    };
    let a: ColorFrame = to_color_frame(left);
    let b: ColorFrame = to_color_frame(right);
    Ok(Some((handler.divergence)(&a, &b)))
}

fn check_dimensions(left: &RawImage, right: &RawImage) -> Result<()> {
    if left.dimensions() != right.dimensions() {
        return Err(DiffError::DimensionMismatch {
            left_width: left.width(),
            left_height: left.height(),
            right_width: right.width(),
            right_height: right.height(),
        });
    }
    Ok(())
}

fn passthrough(frame: &ColorFrame, mode: DiffMode, total_pixels: usize) -> DiffReport {
    debug!(mode = %mode, "pass-through, no divergence computed");
    DiffReport {
        image: to_rgb_image(frame),
        mode,
        changed_pixels: 0,
        total_pixels,
    }
}
