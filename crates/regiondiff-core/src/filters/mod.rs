pub mod box_blur;
pub mod sobel;

pub use box_blur::box_blur_3x3;
pub use sobel::gradient_magnitude;

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Build an (h, w) array by evaluating `f(row, col)` for every pixel.
///
/// Rows are computed in parallel once the image is large enough to
/// amortize the thread hand-off.
pub(crate) fn map_pixels<F>(h: usize, w: usize, f: F) -> Array2<f32>
where
    F: Fn(usize, usize) -> f32 + Sync,
{
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| f(row, col)).collect())
            .collect();

        let mut result = Array2::<f32>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| f(row, col))
    }
}

/// Index offset by `delta`, clamped to [0, len - 1] (replicated border).
#[inline]
pub(crate) fn clamp_index(i: usize, delta: isize, len: usize) -> usize {
    (i as isize + delta).clamp(0, len as isize - 1) as usize
}
