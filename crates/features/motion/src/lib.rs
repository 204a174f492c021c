//! Motion feature slice: timing for step-sequenced figures.
//!
//! [`StepSequencer`] is the pure advance/hold/reset cycle; [`StepAnimator`]
//! runs one on a background task and publishes frames through a watch
//! channel. [`descent`] holds the geometry of the gradient-descent figure.

mod animator;
pub mod descent;
mod sequencer;

pub use animator::{StepAnimator, StepFrame};
pub use sequencer::{Cadence, Phase, StepSequencer};
