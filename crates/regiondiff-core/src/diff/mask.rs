use crate::frame::{DivergenceMap, Mask};

/// Binary threshold: a pixel is marked different only when its divergence
/// is strictly greater than `threshold`. Divergence equal to the threshold
/// counts as unchanged.
pub fn threshold_mask(map: &DivergenceMap, threshold: f32) -> Mask {
    map.mapv(|v| v > threshold)
}

/// Number of pixels marked different.
pub fn count_changed(mask: &Mask) -> usize {
    mask.iter().filter(|&&m| m).count()
}
