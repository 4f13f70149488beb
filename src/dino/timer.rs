//! Fixed-interval timers driven by wall-clock deltas.

/// A repeating timer that can be stopped and restarted.
///
/// Time only accumulates while the timer runs. Restarting clears the
/// accumulated time, so the first fire after `start` is a full interval away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    interval_ms: u64,
    elapsed_ms: u64,
    running: bool,
}

impl Cadence {
    /// A running timer. `interval_ms` must be non-zero.
    pub fn new(interval_ms: u64) -> Self {
        assert!(interval_ms > 0, "cadence interval must be positive");
        Self {
            interval_ms,
            elapsed_ms: 0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_ms = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Milliseconds until the next fire, or `None` while stopped.
    pub fn until_due(&self) -> Option<u64> {
        self.running.then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }

    pub fn elapse(&mut self, ms: u64) {
        if self.running {
            self.elapsed_ms += ms;
        }
    }

    /// Consume one interval if the timer is due.
    pub fn fire_if_due(&mut self) -> bool {
        if self.running && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }
}
