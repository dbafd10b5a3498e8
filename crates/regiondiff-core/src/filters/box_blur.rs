use ndarray::Array2;

use super::{clamp_index, map_pixels};

/// 3x3 mean filter using separable 1D passes. Borders replicate the edge pixel.
///
/// Each pass sums the three taps before dividing, so a constant plane of
/// whole numbers comes back bit-exact.
pub fn box_blur_3x3(data: &Array2<f32>) -> Array2<f32> {
    let row_pass = mean_rows(data);
    mean_cols(&row_pass)
}

fn mean_rows(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    map_pixels(h, w, |row, col| {
        (data[[row, clamp_index(col, -1, w)]] + data[[row, col]] + data[[row, clamp_index(col, 1, w)]])
            / 3.0
    })
}

fn mean_cols(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    map_pixels(h, w, |row, col| {
        (data[[clamp_index(row, -1, h), col]] + data[[row, col]] + data[[clamp_index(row, 1, h), col]])
            / 3.0
    })
}
