pub mod compare;
pub mod config;
pub mod modes;
pub mod watch;

use clap::{Args, ValueEnum};
use regiondiff_core::diff::DiffMode;
use regiondiff_core::frame::RegionSize;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Left,
    Right,
    Rgb,
    Gray,
    Hsv,
    Edge,
}

impl From<ModeArg> for DiffMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Left => DiffMode::LeftOnly,
            ModeArg::Right => DiffMode::RightOnly,
            ModeArg::Rgb => DiffMode::Rgb,
            ModeArg::Gray => DiffMode::Grayscale,
            ModeArg::Hsv => DiffMode::Hsv,
            ModeArg::Edge => DiffMode::Edge,
        }
    }
}

/// Optional capture region, cut from the top-left corner of each image.
#[derive(Args)]
pub struct RegionArgs {
    /// Region width in pixels (requires --height)
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Region height in pixels (requires --width)
    #[arg(long, requires = "width")]
    pub height: Option<u32>,
}

impl RegionArgs {
    pub fn region(&self) -> Option<RegionSize> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(RegionSize { width, height }),
            _ => None,
        }
    }
}
