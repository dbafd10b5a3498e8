use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::DEFAULT_CYCLE_INTERVAL_MS;
use crate::diff::{compare_detailed, DiffMode, DiffReport};
use crate::error::Result;
use crate::frame::{RawImage, RegionSize};

/// Supplies the two operand images for a cycle.
pub trait CaptureSource {
    /// Grab both regions. `region` is the externally selected capture size;
    /// `None` lets the source use its natural size.
    fn capture_pair(&mut self, region: Option<RegionSize>) -> Result<(RawImage, RawImage)>;
}

/// Consumes the annotated image produced by a successful cycle.
pub trait PresentationSink {
    fn present(&mut self, image: &RgbImage, label: &str) -> Result<()>;
}

/// Settings a host needs to drive periodic comparisons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub mode: DiffMode,
    #[serde(default)]
    pub region: RegionSize,
    /// Delay between periodic cycles.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    DEFAULT_CYCLE_INTERVAL_MS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: DiffMode::default(),
            region: RegionSize::default(),
            interval_ms: DEFAULT_CYCLE_INTERVAL_MS,
        }
    }
}

/// What one cycle produced.
#[derive(Clone, Debug, PartialEq)]
pub enum CycleOutcome {
    Presented {
        changed_pixels: usize,
        total_pixels: usize,
    },
    /// The cycle failed somewhere; nothing was shown.
    Skipped { reason: String },
}

impl CycleOutcome {
    pub fn is_presented(&self) -> bool {
        matches!(self, Self::Presented { .. })
    }
}

/// Mutable selection state owned by the host: the active mode and the
/// capture region. The engine itself never sees this struct.
#[derive(Clone, Debug)]
pub struct CompareSession {
    mode: DiffMode,
    region: Option<RegionSize>,
}

impl CompareSession {
    pub fn new(mode: DiffMode, region: Option<RegionSize>) -> Self {
        Self { mode, region }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.mode, Some(config.region))
    }

    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    pub fn region(&self) -> Option<RegionSize> {
        self.region
    }

    /// Select the mode used from the next cycle on; returns its display label.
    pub fn set_mode(&mut self, mode: DiffMode) -> &'static str {
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "mode changed");
        }
        self.mode = mode;
        mode.label()
    }

    pub fn set_region(&mut self, region: Option<RegionSize>) {
        self.region = region;
    }

    /// Capture, compare and present once.
    ///
    /// Never fails: any error is logged and turned into
    /// [`CycleOutcome::Skipped`], leaving the session ready for the next trigger.
    pub fn run_cycle<C, P>(&self, source: &mut C, sink: &mut P) -> CycleOutcome
    where
        C: CaptureSource + ?Sized,
        P: PresentationSink + ?Sized,
    {
        match self.try_cycle(source, sink) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(mode = %self.mode, error = %e, "comparison cycle skipped");
                CycleOutcome::Skipped {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_cycle<C, P>(&self, source: &mut C, sink: &mut P) -> Result<CycleOutcome>
    where
        C: CaptureSource + ?Sized,
        P: PresentationSink + ?Sized,
    {
        let report = self.compute(source)?;
        sink.present(&report.image, self.mode.label())?;
        Ok(CycleOutcome::Presented {
            changed_pixels: report.changed_pixels,
            total_pixels: report.total_pixels,
        })
    }

    /// Capture and compare without presenting.
    pub(crate) fn compute<C>(&self, source: &mut C) -> Result<DiffReport>
    where
        C: CaptureSource + ?Sized,
    {
        let (left, right) = source.capture_pair(self.region)?;
        compare_detailed(&left, &right, self.mode)
    }
}

impl Default for CompareSession {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
