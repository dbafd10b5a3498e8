use ndarray::Array2;

use super::{clamp_index, map_pixels};

/// Compute Sobel gradient magnitude image.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// Returns sqrt(Gx^2 + Gy^2) with the same dimensions as the input.
/// Out-of-bounds neighbors replicate the nearest edge pixel, so border
/// pixels get a gradient too.
pub fn gradient_magnitude(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();

    map_pixels(h, w, |row, col| {
        let px = |dr: isize, dc: isize| -> f64 {
            data[[clamp_index(row, dr, h), clamp_index(col, dc, w)]] as f64
        };

        let gx = -px(-1, -1) + px(-1, 1) - 2.0 * px(0, -1) + 2.0 * px(0, 1) - px(1, -1)
            + px(1, 1);

        let gy = -px(-1, -1) - 2.0 * px(-1, 0) - px(-1, 1)
            + px(1, -1)
            + 2.0 * px(1, 0)
            + px(1, 1);

        (gx * gx + gy * gy).sqrt() as f32
    })
}
