//! Single-slot coalescing timer.

use std::time::{Duration, Instant};

/// Coalesces bursts of triggers into one firing `delay` after the last one.
///
/// Rescheduling replaces the pending deadline; there is never more than one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Cancel any pending deadline and schedule a new one.
    pub fn schedule(&mut self, now: Instant) {
        self.pending = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending deadline elapses, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(16);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.schedule(start);

        assert!(!d.fire_due(start + Duration::from_millis(10)));
        assert!(d.fire_due(start + DELAY));
        assert!(!d.fire_due(start + Duration::from_millis(40)));
    }

    #[test]
    fn burst_coalesces_to_last_trigger() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);
        for ms in 0..10 {
            d.schedule(start + Duration::from_millis(ms * 5));
        }

        // Last trigger at 45ms, so nothing fires at 50ms.
        assert!(!d.fire_due(start + Duration::from_millis(50)));
        assert!(d.fire_due(start + Duration::from_millis(61)));
    }

    #[test]
    fn cancel_clears_pending() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.schedule(start);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire_due(start + Duration::from_secs(1)));
    }
}
