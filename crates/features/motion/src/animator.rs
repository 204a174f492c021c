//! Async driver for the step sequencer.
//!
//! The animator owns a background task that ticks a [`StepSequencer`] on
//! its own cadence and publishes a frame after every transition. Dropping
//! the animator aborts the task, so a figure leaving the screen stops its
//! clock with it.

use crate::sequencer::{Phase, StepSequencer};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// One published state of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFrame {
    /// Number of steps currently revealed.
    pub visible: usize,
    /// Index of the most recently revealed step, if any.
    pub head: Option<usize>,
    /// Whether the reset has been signalled; the path is still fully
    /// visible until the next frame restarts it.
    pub resetting: bool,
}

impl StepFrame {
    const fn of(sequencer: &StepSequencer) -> Self {
        Self {
            visible: sequencer.visible(),
            head: sequencer.head(),
            resetting: matches!(sequencer.phase(), Phase::Resetting),
        }
    }
}

/// Runs a [`StepSequencer`] on a background task.
#[derive(Debug)]
pub struct StepAnimator {
    frames: watch::Receiver<StepFrame>,
    task: JoinHandle<()>,
}

impl StepAnimator {
    /// Starts ticking `sequencer` on the current runtime.
    ///
    /// The first frame is available immediately; every later frame follows
    /// one cadence delay after the previous.
    #[must_use]
    pub fn spawn(mut sequencer: StepSequencer) -> Self {
        let (tx, frames) = watch::channel(StepFrame::of(&sequencer));
        let task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(sequencer.delay()).await;
                sequencer.tick();
                if tx.send(StepFrame::of(&sequencer)).is_err() {
                    break;
                }
            }
        });
        debug!("Step animator started");
        Self { frames, task }
    }

    /// Watches published frames. The receiver holds the latest frame; a
    /// slow consumer sees the newest state, never a backlog.
    #[must_use]
    pub fn frames(&self) -> watch::Receiver<StepFrame> {
        self.frames.clone()
    }

    /// The most recently published frame.
    #[must_use]
    pub fn current(&self) -> StepFrame {
        *self.frames.borrow()
    }
}

impl Drop for StepAnimator {
    fn drop(&mut self) {
        self.task.abort();
        debug!("Step animator stopped");
    }
}
