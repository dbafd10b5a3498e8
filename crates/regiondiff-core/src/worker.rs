use std::sync::mpsc;
use std::thread::JoinHandle;

use image::RgbImage;
use tracing::{debug, warn};

use crate::diff::DiffMode;
use crate::error::{DiffError, Result};
use crate::frame::RegionSize;
use crate::session::{CaptureSource, CompareSession};

/// Commands sent from the host thread to the worker thread.
#[derive(Clone, Debug)]
pub enum WorkerCommand {
    /// Run one comparison cycle.
    Trigger { generation: u64 },

    /// Switch mode and run a cycle right away.
    SetMode { mode: DiffMode, generation: u64 },

    /// Change the capture region and run a cycle right away.
    SetRegion {
        region: Option<RegionSize>,
        generation: u64,
    },

    /// Stop the worker loop.
    Shutdown,
}

/// Results sent from the worker thread back to the host thread.
#[derive(Clone, Debug)]
pub enum WorkerResult {
    /// A cycle produced an annotated image.
    Frame {
        generation: u64,
        image: RgbImage,
        label: &'static str,
        changed_pixels: usize,
        total_pixels: usize,
    },

    /// A cycle failed and produced nothing.
    Skipped { generation: u64, reason: String },
}

impl WorkerResult {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame { generation, .. } | Self::Skipped { generation, .. } => *generation,
        }
    }
}

/// Host-side end of a running worker.
///
/// Every trigger, mode change or region change is stamped with a new
/// generation. Results from older generations are stale and
/// [`WorkerHandle::accept`] rejects them.
pub struct WorkerHandle {
    cmd_tx: mpsc::Sender<WorkerCommand>,
    latest_generation: u64,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Request a comparison cycle. Returns the generation it was stamped with.
    pub fn trigger(&mut self) -> Result<u64> {
        let generation = self.next_generation();
        self.send(WorkerCommand::Trigger { generation })?;
        Ok(generation)
    }

    /// Switch the comparison mode; the worker runs a cycle immediately.
    /// Returns the label of the new mode.
    pub fn set_mode(&mut self, mode: DiffMode) -> Result<&'static str> {
        let generation = self.next_generation();
        self.send(WorkerCommand::SetMode { mode, generation })?;
        Ok(mode.label())
    }

    /// Change the capture region; the worker runs a cycle immediately.
    /// Returns the generation the request was stamped with.
    pub fn set_region(&mut self, region: Option<RegionSize>) -> Result<u64> {
        let generation = self.next_generation();
        self.send(WorkerCommand::SetRegion { region, generation })?;
        Ok(generation)
    }

    /// Whether `result` answers the most recent request and should be shown.
    pub fn accept(&self, result: &WorkerResult) -> bool {
        result.generation() >= self.latest_generation
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Stop the worker and wait for its thread to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn next_generation(&mut self) -> u64 {
        self.latest_generation += 1;
        self.latest_generation
    }

    fn send(&self, cmd: WorkerCommand) -> Result<()> {
        self.cmd_tx.send(cmd).map_err(|_| DiffError::WorkerStopped)
    }

    fn stop(&mut self) {
        let _ = self.cmd_tx.send(WorkerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("comparison worker panicked");
            }
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the worker thread that owns `source` and runs cycles for `session`.
pub fn spawn_worker<C>(
    source: C,
    session: CompareSession,
    result_tx: mpsc::Sender<WorkerResult>,
) -> Result<WorkerHandle>
where
    C: CaptureSource + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    let thread = std::thread::Builder::new()
        .name("regiondiff-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, source, session);
        })?;

    Ok(WorkerHandle {
        cmd_tx,
        latest_generation: 0,
        thread: Some(thread),
    })
}

/// Settings collected from one batch of queued commands.
#[derive(Default)]
struct Batch {
    pending: Option<u64>,
    shutdown: bool,
}

impl Batch {
    fn apply(&mut self, cmd: WorkerCommand, session: &mut CompareSession) {
        match cmd {
            WorkerCommand::Trigger { generation } => self.request(generation),
            WorkerCommand::SetMode { mode, generation } => {
                session.set_mode(mode);
                self.request(generation);
            }
            WorkerCommand::SetRegion { region, generation } => {
                session.set_region(region);
                self.request(generation);
            }
            WorkerCommand::Shutdown => self.shutdown = true,
        }
    }

    fn request(&mut self, generation: u64) {
        self.pending = Some(self.pending.map_or(generation, |g| g.max(generation)));
    }
}

fn worker_loop<C: CaptureSource>(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    mut source: C,
    mut session: CompareSession,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        // Everything queued while the previous cycle ran collapses into one cycle.
        let mut batch = Batch::default();
        batch.apply(cmd, &mut session);
        while let Ok(cmd) = cmd_rx.try_recv() {
            batch.apply(cmd, &mut session);
        }

        if batch.shutdown {
            debug!("comparison worker shutting down");
            break;
        }

        let Some(generation) = batch.pending else {
            continue;
        };

        let result = match session.compute(&mut source) {
            Ok(report) => WorkerResult::Frame {
                generation,
                image: report.image,
                label: report.mode.label(),
                changed_pixels: report.changed_pixels,
                total_pixels: report.total_pixels,
            },
            Err(e) => {
                warn!(generation, error = %e, "comparison cycle skipped");
                WorkerResult::Skipped {
                    generation,
                    reason: e.to_string(),
                }
            }
        };

        if tx.send(result).is_err() {
            break;
        }
    }
}
