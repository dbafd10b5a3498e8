use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_REGION_HEIGHT, DEFAULT_REGION_WIDTH};
use crate::error::{DiffError, Result};

/// Per-pixel divergence magnitudes, shape = (height, width).
pub type DivergenceMap = Array2<f32>;

/// Binary "different" classification, shape = (height, width).
pub type Mask = Array2<bool>;

/// A single-channel image plane.
/// Pixel values are f32 on the 8-bit intensity scale [0.0, 255.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Color image composed of separate channel frames, always in RGB order.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }
}

/// Channel order of a raw capture buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelLayout {
    Rgb,
    Bgr,
    Rgba,
    Bgra,
}

impl PixelLayout {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Bgra => 4,
        }
    }

    /// Byte offsets of the red, green and blue samples within one pixel.
    pub fn rgb_offsets(self) -> [usize; 3] {
        match self {
            Self::Rgb | Self::Rgba => [0, 1, 2],
            Self::Bgr | Self::Bgra => [2, 1, 0],
        }
    }
}

/// Interleaved 8-bit pixels as delivered by a capture source.
#[derive(Clone, Debug)]
pub struct RawImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl RawImage {
    /// Wrap a pixel buffer, checking that it is non-empty and that its
    /// length matches `width * height * layout.channels()`.
    pub fn new(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DiffError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(DiffError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Solid-color image, mostly useful for tests and placeholders.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::new(width, height, PixelLayout::Rgb, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB triple at (x, y), with the native channel order resolved.
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let stride = self.layout.channels();
        let base = (y as usize * self.width as usize + x as usize) * stride;
        let [r, g, b] = self.layout.rgb_offsets();
        [self.data[base + r], self.data[base + g], self.data[base + b]]
    }
}

/// Size of the two capture regions. Both operands always share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSize {
    pub width: u32,
    pub height: u32,
}

impl Default for RegionSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_REGION_WIDTH,
            height: DEFAULT_REGION_HEIGHT,
        }
    }
}

impl std::fmt::Display for RegionSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
