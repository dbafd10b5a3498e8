use ndarray::Array2;

use crate::consts::{HUE_STEPS, MAX_INTENSITY};
use crate::frame::{ColorFrame, Frame};

/// Hue/saturation/value planes in the 8-bit convention:
/// hue in [0, 180) (degrees halved), saturation and value in [0, 255].
#[derive(Clone, Debug)]
pub struct HsvFrame {
    pub hue: Frame,
    pub saturation: Frame,
    pub value: Frame,
}

/// Convert an RGB color frame to HSV.
///
/// Each plane is rounded to whole steps, matching what an 8-bit HSV
/// buffer would hold.
pub fn to_hsv(color: &ColorFrame) -> HsvFrame {
    let (h, w) = color.red.data.dim();
    let mut hue = Array2::<f32>::zeros((h, w));
    let mut saturation = Array2::<f32>::zeros((h, w));
    let mut value = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let (hh, ss, vv) = rgb_to_hsv(
                color.red.data[[row, col]],
                color.green.data[[row, col]],
                color.blue.data[[row, col]],
            );
            hue[[row, col]] = hh;
            saturation[[row, col]] = ss;
            value[[row, col]] = vv;
        }
    }

    HsvFrame {
        hue: Frame::new(hue),
        saturation: Frame::new(saturation),
        value: Frame::new(value),
    }
}

fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = v - min;

    let s = if v > 0.0 { MAX_INTENSITY * delta / v } else { 0.0 };

    let degrees = if delta <= 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / delta
    } else if v == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };

    let hue = (degrees / 2.0).round() % HUE_STEPS;
    (hue, s.round(), v.round())
}
