/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Largest value on the 8-bit intensity scale all frames use.
pub const MAX_INTENSITY: f32 = 255.0;

/// Number of hue steps in the 8-bit HSV convention (degrees halved).
pub const HUE_STEPS: f32 = 180.0;

/// Divergence threshold for the RGB mode (sum of channel differences, 0..765).
pub const RGB_THRESHOLD: f32 = 60.0;

/// Divergence threshold for the grayscale mode (luma difference, 0..255).
pub const GRAYSCALE_THRESHOLD: f32 = 70.0;

/// Divergence threshold for the HSV mode (weighted H/S/V difference).
pub const HSV_THRESHOLD: f32 = 50.0;

/// Divergence threshold for the edge mode (normalized to 0..255).
pub const EDGE_THRESHOLD: f32 = 60.0;

/// HSV divergence weights. Hue dominates as the strongest color-change signal.
pub const HSV_HUE_WEIGHT: f32 = 2.0;
pub const HSV_SAT_WEIGHT: f32 = 0.8;
pub const HSV_VAL_WEIGHT: f32 = 0.2;

/// Color painted over every pixel classified as different.
pub const HIGHLIGHT_COLOR: [u8; 3] = [255, 255, 0];

/// Default capture region width in pixels.
pub const DEFAULT_REGION_WIDTH: u32 = 387;

/// Default capture region height in pixels.
pub const DEFAULT_REGION_HEIGHT: u32 = 292;

/// Default interval between periodic comparison cycles.
pub const DEFAULT_CYCLE_INTERVAL_MS: u64 = 1000;
