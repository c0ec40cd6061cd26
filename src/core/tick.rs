//! Fixed-interval tick scheduling for the interactive loop.
//!
//! The timer never sleeps or spawns anything: the owner polls it once per
//! loop iteration and runs the tick itself when told to. One loop means one
//! tick at a time, so a tick can never start before the previous one has
//! finished mutating state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    last_tick: Instant,
    running: bool,
    ticks_fired: u64,
}

impl TickTimer {
    /// Starts a timer whose first tick is due one `interval` after `now`.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
            running: true,
            ticks_fired: 0,
        }
    }

    /// Returns `true` when a tick is due and arms the next one.
    ///
    /// At most one tick fires per call, however late the poll is.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        self.ticks_fired += 1;
        true
    }

    /// Cancels the timer. A stopped timer never fires again.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// Fraction of the current interval already elapsed, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        if !self.running || self.interval.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.last_tick);
        (elapsed.as_secs_f64() / self.interval.as_secs_f64()).min(1.0)
    }
}
