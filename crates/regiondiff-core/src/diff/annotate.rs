use image::{Rgb, RgbImage};

use crate::frame::Mask;

/// Paint `color` over every pixel of `base` where the mask is set.
///
/// `base` and `mask` must have the same dimensions; the engine guarantees
/// this because both derive from the same validated operand.
pub fn annotate(mut base: RgbImage, mask: &Mask, color: [u8; 3]) -> RgbImage {
    let highlight = Rgb(color);
    for ((row, col), &changed) in mask.indexed_iter() {
        if changed {
            base.put_pixel(col as u32, row as u32, highlight);
        }
    }
    base
}
