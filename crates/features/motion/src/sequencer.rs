//! The step/hold/reset cycle, as a pure state machine.
//!
//! The sequencer owns no clock. Callers ask [`StepSequencer::delay`] how
//! long to wait, sleep however they like, then [`StepSequencer::tick`].
//! Keeping time out of the machine makes the cycle testable without a
//! runtime.

use std::time::Duration;

/// How long each phase of the cycle lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// Pause between two revealed steps.
    pub step: Duration,
    /// Dwell time with the full path visible.
    pub hold: Duration,
    /// Blank time before the cycle restarts.
    pub reset: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(600),
            hold: Duration::from_millis(2000),
            reset: Duration::from_millis(500),
        }
    }
}

/// Where the cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing steps one by one.
    Advancing,
    /// Full path visible, dwelling.
    Holding,
    /// Reset signalled; the path stays visible until the restart.
    Resetting,
}

/// Drives a looping reveal of `len` steps: advance one step at a time,
/// hold with everything visible, clear, repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequencer {
    len: usize,
    cursor: usize,
    phase: Phase,
    cadence: Cadence,
}

impl StepSequencer {
    /// A sequencer over `len` steps with the default cadence.
    ///
    /// Starts in [`Phase::Advancing`] with nothing revealed yet.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_cadence(len, Cadence::default())
    }

    #[must_use]
    pub const fn with_cadence(len: usize, cadence: Cadence) -> Self {
        Self { len, cursor: 0, phase: Phase::Advancing, cadence }
    }

    /// How many steps are currently revealed. The full path stays visible
    /// through the reset signal; it clears when the next round starts.
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.cursor
    }

    /// Index of the most recently revealed step, if any.
    #[must_use]
    pub const fn head(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_resetting(&self) -> bool {
        matches!(self.phase, Phase::Resetting)
    }

    /// How long to wait before the next [`tick`](Self::tick).
    #[must_use]
    pub const fn delay(&self) -> Duration {
        match self.phase {
            Phase::Advancing => self.cadence.step,
            Phase::Holding => self.cadence.hold,
            Phase::Resetting => self.cadence.reset,
        }
    }

    /// Advances the cycle by one transition and returns the new phase.
    ///
    /// While advancing, each tick reveals exactly one more step; the tick
    /// that reveals the last step enters the hold. The hold tick raises the
    /// reset signal with the path still fully visible; the reset tick
    /// clears it and starts the next round.
    pub const fn tick(&mut self) -> Phase {
        match self.phase {
            Phase::Advancing => {
                self.cursor += 1;
                if self.cursor >= self.len {
                    self.cursor = self.len;
                    self.phase = Phase::Holding;
                }
            },
            Phase::Holding => {
                self.phase = Phase::Resetting;
            },
            Phase::Resetting => {
                self.cursor = 0;
                self.phase = Phase::Advancing;
            },
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_step_per_tick() {
        let mut seq = StepSequencer::new(4);
        let mut previous = seq.visible();
        for _ in 0..3 {
            seq.tick();
            assert_eq!(seq.visible(), previous + 1);
            previous = seq.visible();
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut seq = StepSequencer::new(3);
        let start = seq;
        // 3 reveal ticks, then hold -> reset, reset -> advance.
        for _ in 0..5 {
            seq.tick();
        }
        assert_eq!(seq, start);
    }

    #[test]
    fn hold_begins_exactly_at_full_reveal() {
        let mut seq = StepSequencer::new(2);
        assert_eq!(seq.tick(), Phase::Advancing);
        assert_eq!(seq.tick(), Phase::Holding);
        assert_eq!(seq.visible(), 2);
    }

    #[test]
    fn reset_signal_keeps_the_path_visible() {
        let mut seq = StepSequencer::new(7);
        for _ in 0..7 {
            seq.tick();
        }
        assert_eq!(seq.tick(), Phase::Resetting);
        assert!(seq.is_resetting());
        assert_eq!(seq.visible(), 7);
        assert_eq!(seq.head(), Some(6));
    }

    #[test]
    fn restart_clears_everything() {
        let mut seq = StepSequencer::new(2);
        seq.tick();
        seq.tick();
        seq.tick();
        assert_eq!(seq.tick(), Phase::Advancing);
        assert_eq!(seq.visible(), 0);
        assert_eq!(seq.head(), None);
        assert!(!seq.is_resetting());
    }

    #[test]
    fn second_cycle_reproduces_the_first() {
        let mut seq = StepSequencer::new(5);
        let cycle = |seq: &mut StepSequencer| {
            (0..7).map(|_| (seq.tick(), seq.visible())).collect::<Vec<_>>()
        };
        let first = cycle(&mut seq);
        let second = cycle(&mut seq);
        assert_eq!(first, second);
    }

    #[test]
    fn delay_tracks_phase() {
        let cadence = Cadence::default();
        let mut seq = StepSequencer::with_cadence(2, cadence);
        assert_eq!(seq.delay(), cadence.step);
        seq.tick();
        seq.tick();
        assert_eq!(seq.delay(), cadence.hold);
        seq.tick();
        assert_eq!(seq.delay(), cadence.reset);
    }

    #[test]
    fn empty_sequence_still_cycles() {
        let mut seq = StepSequencer::new(0);
        assert_eq!(seq.tick(), Phase::Holding);
        assert_eq!(seq.tick(), Phase::Resetting);
        assert_eq!(seq.tick(), Phase::Advancing);
        assert_eq!(seq.visible(), 0);
    }
}
