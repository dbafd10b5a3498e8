use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MAX_INTENSITY};
use crate::frame::{ColorFrame, Frame, RawImage};

/// Split an interleaved capture buffer into separate R, G, B frames.
///
/// BGR(A) sources are reordered to RGB; a fourth channel is dropped.
pub fn to_color_frame(raw: &RawImage) -> ColorFrame {
    let h = raw.height() as usize;
    let w = raw.width() as usize;
    let stride = raw.layout().channels();
    let [ro, go, bo] = raw.layout().rgb_offsets();
    let data = raw.data();

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let base = (row * w + col) * stride;
            red[[row, col]] = data[base + ro] as f32;
            green[[row, col]] = data[base + go] as f32;
            blue[[row, col]] = data[base + bo] as f32;
        }
    }

    ColorFrame {
        red: Frame::new(red),
        green: Frame::new(green),
        blue: Frame::new(blue),
    }
}

/// Convert a color frame to luminance using ITU-R BT.601 weights.
pub fn luminance(color: &ColorFrame) -> Frame {
    let (h, w) = color.red.data.dim();
    let mut data = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = LUMINANCE_R * color.red.data[[row, col]]
                + LUMINANCE_G * color.green.data[[row, col]]
                + LUMINANCE_B * color.blue.data[[row, col]];
        }
    }

    Frame::new(data)
}

/// Render a color frame as an 8-bit RGB image.
pub fn to_rgb_image(color: &ColorFrame) -> RgbImage {
    let h = color.height();
    let w = color.width();

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let r = to_u8(color.red.data[[row, col]]);
            let g = to_u8(color.green.data[[row, col]]);
            let b = to_u8(color.blue.data[[row, col]]);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }

    img
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, MAX_INTENSITY) as u8
}
