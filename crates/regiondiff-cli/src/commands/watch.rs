use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use regiondiff_core::consts::DEFAULT_CYCLE_INTERVAL_MS;
use regiondiff_core::diff::DiffMode;
use regiondiff_core::error::{DiffError, Result as DiffResult};
use regiondiff_core::io::{save_annotated, FileCaptureSource};
use regiondiff_core::session::{CompareSession, CycleOutcome, PresentationSink};
use tracing::info;

use super::{ModeArg, RegionArgs};

#[derive(Args)]
pub struct WatchArgs {
    /// Left (reference) image; also the canvas for highlights
    pub left: PathBuf,

    /// Right (candidate) image
    pub right: PathBuf,

    /// Comparison mode
    #[arg(long, value_enum, default_value = "gray")]
    pub mode: ModeArg,

    #[command(flatten)]
    pub region: RegionArgs,

    /// Delay between cycles in milliseconds
    #[arg(long, default_value_t = DEFAULT_CYCLE_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Stop after this many cycles (runs until interrupted if omitted)
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Output file rewritten after every successful cycle
    #[arg(short, long, default_value = "diff.png")]
    pub output: PathBuf,
}

/// Presentation sink that overwrites one image file per cycle.
struct FileSink {
    path: PathBuf,
}

impl PresentationSink for FileSink {
    fn present(&mut self, image: &RgbImage, label: &str) -> DiffResult<()> {
        save_annotated(image, &self.path)
            .map_err(|e| DiffError::Presentation(format!("{}: {}", self.path.display(), e)))?;
        info!(label, path = %self.path.display(), "presented");
        Ok(())
    }
}

pub fn run(args: &WatchArgs) -> Result<()> {
    let mode = DiffMode::from(args.mode);
    let session = CompareSession::new(mode, args.region.region());
    let mut source = FileCaptureSource::new(&args.left, &args.right);
    let mut sink = FileSink {
        path: args.output.clone(),
    };
    let interval = Duration::from_millis(args.interval_ms);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} [{pos}] {msg}")?);
    pb.set_message(format!("Watching ({})", mode.label()));

    let mut presented = 0u64;
    let mut skipped = 0u64;
    let mut cycle = 0u64;

    while !limit_reached(cycle, args.cycles) {
        if cycle > 0 {
            thread::sleep(interval);
        }
        cycle += 1;
        match session.run_cycle(&mut source, &mut sink) {
            CycleOutcome::Presented {
                changed_pixels,
                total_pixels,
            } => {
                presented += 1;
                pb.set_message(format!(
                    "{}: {} of {} pixels differ",
                    mode.label(),
                    changed_pixels,
                    total_pixels
                ));
            }
            CycleOutcome::Skipped { reason } => {
                skipped += 1;
                pb.set_message(format!("Skipped: {}", reason));
            }
        }
        pb.set_position(cycle);
    }

    pb.finish_with_message(format!(
        "Done: {} presented, {} skipped",
        presented, skipped
    ));
    println!("{}", final_note(presented, &args.output));
    Ok(())
}

/// Whether `done` cycles already satisfy the optional `--cycles` limit.
fn limit_reached(done: u64, limit: Option<u64>) -> bool {
    limit.is_some_and(|limit| done >= limit)
}

fn final_note(presented: u64, output: &Path) -> String {
    if presented > 0 {
        format!("Last result saved to {}", output.display())
    } else {
        format!("No cycle succeeded; {} was not written", output.display())
    }
}
