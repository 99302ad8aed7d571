//! Rolling frame-time statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const PROFILE_WINDOW: usize = 120;

#[derive(Debug, Clone)]
pub struct FrameProfiler {
    window: usize,
    times_ms: VecDeque<f64>,
    frame_start: Instant,
}

impl Default for FrameProfiler {
    fn default() -> Self {
        Self::new(PROFILE_WINDOW)
    }
}

impl FrameProfiler {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            times_ms: VecDeque::with_capacity(window.max(1)),
            frame_start: Instant::now(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end_frame(&mut self) {
        self.record(self.frame_start.elapsed());
    }

    /// Push one frame duration, evicting the oldest past the window.
    pub fn record(&mut self, frame: Duration) {
        if self.times_ms.len() == self.window {
            self.times_ms.pop_front();
        }
        self.times_ms.push_back(frame.as_secs_f64() * 1000.0);
    }

    pub fn avg_ms(&self) -> f64 {
        if self.times_ms.is_empty() {
            return 0.0;
        }
        self.times_ms.iter().sum::<f64>() / self.times_ms.len() as f64
    }

    /// Frames per second from the window average; zero before any frame.
    pub fn fps(&self) -> f64 {
        let ms = self.avg_ms();
        if ms <= 1e-4 {
            0.0
        } else {
            1000.0 / ms
        }
    }
}
