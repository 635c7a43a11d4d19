//! Platform helpers for hosts driving the simulation
//!
//! The simulation only knows about fixed ticks. Hosts with a variable frame
//! rate feed wall-clock deltas into `FixedStep` to find out how many ticks
//! to run.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(step: Duration) -> Self {
        Self::with_max_substeps(step, MAX_SUBSTEPS)
    }

    pub fn with_max_substeps(step: Duration, max_substeps: u32) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_substeps: max_substeps.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed frame time and return the number of ticks due
    ///
    /// At most `max_substeps` ticks are returned per call; any remaining
    /// backlog is dropped to prevent a spiral of death after a long stall.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        substeps
    }

    /// Forget any accumulated time (e.g. when resuming from pause)
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new(Duration::from_millis(20));
        assert_eq!(clock.advance(Duration::from_millis(15)), 0);
        assert_eq!(clock.advance(Duration::from_millis(15)), 1);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn test_multiple_steps_per_frame() {
        let mut clock = FixedStep::new(Duration::from_millis(20));
        assert_eq!(clock.advance(Duration::from_millis(65)), 3);
        assert_eq!(clock.advance(Duration::from_millis(15)), 1);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut clock = FixedStep::with_max_substeps(Duration::from_millis(20), 4);
        assert_eq!(clock.advance(Duration::from_secs(5)), 4);
        // Backlog dropped
        assert_eq!(clock.advance(Duration::from_millis(5)), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FixedStep::new(Duration::from_millis(20));
        clock.advance(Duration::from_millis(19));
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(19)), 0);
    }
}
