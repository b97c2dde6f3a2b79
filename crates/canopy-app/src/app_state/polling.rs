//! Periodic manager tick and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::CanopyApp;
use super::types::POLL_INTERVAL;

impl CanopyApp {
    /// Run the manager's deferred work and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            if let Some(manager) = self.manager.as_mut() {
                manager.tick(now);
            }
            self.drain_view_events();
        }

        let mut wake = Instant::now() + POLL_INTERVAL;
        if let Some(deadline) = self.manager.as_ref().and_then(|m| m.next_deadline()) {
            wake = wake.min(deadline.max(now));
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}
