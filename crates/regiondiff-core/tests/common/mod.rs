use std::collections::VecDeque;

use image::RgbImage;
use regiondiff_core::error::{DiffError, Result};
use regiondiff_core::frame::{PixelLayout, RawImage, RegionSize};
use regiondiff_core::session::{CaptureSource, PresentationSink};

pub const YELLOW: [u8; 3] = [255, 255, 0];

/// Solid RGB image.
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RawImage {
    RawImage::filled(width, height, rgb).expect("valid solid image")
}

/// RGB image whose pixel at (x, y) is `f(x, y)`.
pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> RawImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&f(x, y));
        }
    }
    RawImage::new(width, height, PixelLayout::Rgb, data).expect("valid generated image")
}

/// Black/white checkerboard with 1-pixel cells.
pub fn checkerboard(width: u32, height: u32) -> RawImage {
    from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            [0, 0, 0]
        } else {
            [255, 255, 255]
        }
    })
}

/// What the engine should render for `raw` when nothing is highlighted.
pub fn expected_rgb(raw: &RawImage) -> RgbImage {
    RgbImage::from_fn(raw.width(), raw.height(), |x, y| image::Rgb(raw.rgb_at(x, y)))
}

pub fn count_color(img: &RgbImage, rgb: [u8; 3]) -> usize {
    img.pixels().filter(|p| p.0 == rgb).count()
}

/// Capture source that replays a fixed sequence, then keeps returning the last pair.
pub struct ScriptedSource {
    script: VecDeque<Result<(RawImage, RawImage)>>,
    fallback: (RawImage, RawImage),
    pub regions_seen: Vec<Option<RegionSize>>,
}

impl ScriptedSource {
    pub fn new(
        script: Vec<Result<(RawImage, RawImage)>>,
        fallback: (RawImage, RawImage),
    ) -> Self {
        Self {
            script: script.into(),
            fallback,
            regions_seen: Vec::new(),
        }
    }

    pub fn repeating(left: RawImage, right: RawImage) -> Self {
        Self::new(vec![], (left, right))
    }
}

impl CaptureSource for ScriptedSource {
    fn capture_pair(&mut self, region: Option<RegionSize>) -> Result<(RawImage, RawImage)> {
        self.regions_seen.push(region);
        match self.script.pop_front() {
            Some(next) => next,
            None => Ok(self.fallback.clone()),
        }
    }
}

pub fn capture_unavailable() -> Result<(RawImage, RawImage)> {
    Err(DiffError::CaptureUnavailable("display locked".into()))
}

/// Sink that keeps everything it is shown.
#[derive(Default)]
pub struct CollectingSink {
    pub shown: Vec<(RgbImage, String)>,
    pub fail_next: bool,
}

impl PresentationSink for CollectingSink {
    fn present(&mut self, image: &RgbImage, label: &str) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(DiffError::Presentation("window closed".into()));
        }
        self.shown.push((image.clone(), label.to_string()));
        Ok(())
    }
}
