//! Fixed-timestep accumulator.
//!
//! Converts variable wall-clock frame times into a whole number of fixed
//! simulation ticks. Frame time is clamped before accumulation so a stall
//! never produces unbounded catch-up work.

use tilestrike_core::constants::MAX_FRAME_TIME;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimeStep {
    dt: f64,
    max_frame_time: f64,
    accumulator: f64,
}

impl FixedTimeStep {
    /// Stepper for `tick_rate` ticks per second. A zero rate is treated as 1.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / f64::from(tick_rate.max(1)),
            max_frame_time: MAX_FRAME_TIME,
            accumulator: 0.0,
        }
    }

    pub fn with_max_frame_time(mut self, max_frame_time: f64) -> Self {
        self.max_frame_time = max_frame_time;
        self
    }

    /// Fixed tick duration in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Feed one frame's elapsed time; returns how many ticks to run now.
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        self.accumulator += frame_time.clamp(0.0, self.max_frame_time);
        let mut ticks = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        ticks
    }

    /// Leftover fraction of a tick, in [0, 1), for render interpolation.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_and_alpha() {
        let mut step = FixedTimeStep::new(8);
        assert_eq!(step.dt(), 0.125);
        assert_eq!(step.advance(0.3125), 2);
        assert_eq!(step.alpha(), 0.5);
        assert_eq!(step.advance(0.0625), 1);
        assert_eq!(step.alpha(), 0.0);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut step = FixedTimeStep::new(8);
        assert_eq!(step.advance(0.0625), 0);
        assert_eq!(step.advance(0.0625), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut step = FixedTimeStep::new(8);
        // 10 seconds of stall still yields only 0.25 s of work.
        assert_eq!(step.advance(10.0), 2);
        assert_eq!(step.alpha(), 0.0);
    }

    #[test]
    fn test_custom_clamp() {
        let mut step = FixedTimeStep::new(8).with_max_frame_time(0.5);
        assert_eq!(step.advance(3.0), 4);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut step = FixedTimeStep::new(8);
        assert_eq!(step.advance(-1.0), 0);
        assert_eq!(step.alpha(), 0.0);
    }

    #[test]
    fn test_reset_drops_remainder() {
        let mut step = FixedTimeStep::new(8);
        step.advance(0.1);
        step.reset();
        assert_eq!(step.alpha(), 0.0);
    }
}
