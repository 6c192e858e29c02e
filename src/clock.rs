use std::time::{Duration, Instant};

/// Paces simulation frames at a fixed interval. Redraws that arrive before
/// the next deadline do not count as a new frame.
pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
        }
    }

    /// When the next frame is due.
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Consumes the current frame if it is due and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_frame = now + self.interval;
        true
    }
}
