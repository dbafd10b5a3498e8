use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};

use crate::error::Result;
use crate::frame::{PixelLayout, RawImage};

/// Load an image file as a four-channel RGBA capture.
pub fn load_raw_image(path: &Path) -> Result<RawImage> {
    let rgba = image::open(path)?.to_rgba8();
    rgba_to_raw(rgba)
}

pub(crate) fn rgba_to_raw(rgba: RgbaImage) -> Result<RawImage> {
    let (w, h) = rgba.dimensions();
    RawImage::new(w, h, PixelLayout::Rgba, rgba.into_raw())
}

/// Save an annotated image, choosing format from file extension (PNG by default).
pub fn save_annotated(image: &RgbImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    image.save_with_format(path, format)?;
    Ok(())
}
