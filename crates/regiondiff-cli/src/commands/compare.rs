use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use regiondiff_core::diff::{compare_detailed, DiffMode};
use regiondiff_core::io::{save_annotated, FileCaptureSource};
use regiondiff_core::session::CaptureSource;

use super::{ModeArg, RegionArgs};
use crate::summary::print_compare_summary;

#[derive(Args)]
pub struct CompareArgs {
    /// Left (reference) image; also the canvas for highlights
    pub left: PathBuf,

    /// Right (candidate) image
    pub right: PathBuf,

    /// Comparison mode
    #[arg(long, value_enum, default_value = "gray")]
    pub mode: ModeArg,

    #[command(flatten)]
    pub region: RegionArgs,

    /// Output file path
    #[arg(short, long, default_value = "diff.png")]
    pub output: PathBuf,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let mode = DiffMode::from(args.mode);
    let mut source = FileCaptureSource::new(&args.left, &args.right);

    let (left, right) = source
        .capture_pair(args.region.region())
        .context("Failed to read input images")?;

    let report = compare_detailed(&left, &right, mode).with_context(|| {
        format!(
            "Failed to compare {} and {}",
            args.left.display(),
            args.right.display()
        )
    })?;

    save_annotated(&report.image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_compare_summary(&args.left, &args.right, &report, &args.output);
    Ok(())
}
