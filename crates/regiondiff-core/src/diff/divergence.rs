use ndarray::{Array2, Zip};

use crate::color::{luminance, to_hsv};
use crate::consts::{
    EDGE_THRESHOLD, GRAYSCALE_THRESHOLD, HSV_HUE_WEIGHT, HSV_SAT_WEIGHT, HSV_THRESHOLD,
    HSV_VAL_WEIGHT, MAX_INTENSITY, RGB_THRESHOLD,
};
use crate::filters::gradient_magnitude;
use crate::frame::{ColorFrame, DivergenceMap};

use super::mode::DiffMode;

/// Per-pixel divergence between the left and right operands.
pub type DivergenceFn = fn(&ColorFrame, &ColorFrame) -> DivergenceMap;

/// A divergence computation together with the threshold its output is cut at.
pub struct ModeHandler {
    pub mode: DiffMode,
    pub threshold: f32,
    pub divergence: DivergenceFn,
}

/// One entry per divergence mode. Pass-through modes have no entry.
pub static MODE_HANDLERS: [ModeHandler; 4] = [
    ModeHandler {
        mode: DiffMode::Rgb,
        threshold: RGB_THRESHOLD,
        divergence: rgb_divergence,
    },
    ModeHandler {
        mode: DiffMode::Grayscale,
        threshold: GRAYSCALE_THRESHOLD,
        divergence: grayscale_divergence,
    },
    ModeHandler {
        mode: DiffMode::Hsv,
        threshold: HSV_THRESHOLD,
        divergence: hsv_divergence,
    },
    ModeHandler {
        mode: DiffMode::Edge,
        threshold: EDGE_THRESHOLD,
        divergence: edge_divergence,
    },
];

/// Look up the handler registered for `mode`.
pub fn handler_for(mode: DiffMode) -> Option<&'static ModeHandler> {
    MODE_HANDLERS.iter().find(|h| h.mode == mode)
}

/// Sum of absolute per-channel differences, range [0, 765].
pub fn rgb_divergence(a: &ColorFrame, b: &ColorFrame) -> DivergenceMap {
    abs_diff(&a.red.data, &b.red.data)
        + abs_diff(&a.green.data, &b.green.data)
        + abs_diff(&a.blue.data, &b.blue.data)
}

/// Absolute difference of BT.601 luma, range [0, 255].
pub fn grayscale_divergence(a: &ColorFrame, b: &ColorFrame) -> DivergenceMap {
    let la = luminance(a);
    let lb = luminance(b);
    abs_diff(&la.data, &lb.data)
}

/// Weighted HSV difference: 2*|dH| + 0.8*|dS| + 0.2*|dV|.
///
/// Hue is compared linearly on its [0, 180) scale with no wraparound, so
/// hues 179 and 1 count as 178 apart.
pub fn hsv_divergence(a: &ColorFrame, b: &ColorFrame) -> DivergenceMap {
    let ha = to_hsv(a);
    let hb = to_hsv(b);

    abs_diff(&ha.hue.data, &hb.hue.data) * HSV_HUE_WEIGHT
        + abs_diff(&ha.saturation.data, &hb.saturation.data) * HSV_SAT_WEIGHT
        + abs_diff(&ha.value.data, &hb.value.data) * HSV_VAL_WEIGHT
}

/// Difference of Sobel gradient magnitudes of the two luma planes,
/// min-max normalized into [0, 255]. A flat difference maps to all zeros.
pub fn edge_divergence(a: &ColorFrame, b: &ColorFrame) -> DivergenceMap {
    let ea = gradient_magnitude(&luminance(a).data);
    let eb = gradient_magnitude(&luminance(b).data);
    normalize_min_max(abs_diff(&ea, &eb))
}

fn abs_diff(a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
    let mut out = Array2::<f32>::zeros(a.dim());
    Zip::from(&mut out)
        .and(a)
        .and(b)
        .for_each(|o, &x, &y| *o = (x - y).abs());
    out
}

fn normalize_min_max(mut data: Array2<f32>) -> Array2<f32> {
    let min = data.iter().copied().fold(f32::INFINITY, f32::min);
    let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    if !range.is_finite() || range <= 0.0 {
        data.fill(0.0);
        return data;
    }

    data.mapv_inplace(|v| (v - min) / range * MAX_INTENSITY);
    data
}
