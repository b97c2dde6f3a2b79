//! Unread-badge polling.
//!
//! One configured service is eligible. After a load finishes in a matching
//! view, a probe script reading the page icon reference runs every period.
//! Probe failures are skipped; only badge changes are reported.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use canopy_common::ViewId;
use canopy_config::schema::NotificationConfig;
use tracing::{debug, trace};

use crate::backend::ScriptCallback;

/// Read-only probe returning the current page icon reference.
pub const PROBE_SCRIPT: &str = r#"(function() {
    var link = document.querySelector("link[rel~='icon']") || document.querySelector("link[rel='shortcut icon']");
    return link ? (link.getAttribute('href') || '') : '';
})()"#;

/// Cancellable periodic schedule for one view.
#[derive(Debug, Clone, Copy)]
struct PollSchedule {
    next_due: Instant,
    generation: u64,
}

#[derive(Debug)]
struct ProbeOutcome {
    id: ViewId,
    generation: u64,
    result: Result<String, String>,
}

/// Per-view poll schedules plus the last reported badge.
pub struct NotificationPoller {
    enabled: bool,
    view_id: ViewId,
    url_pattern: String,
    grace: Duration,
    period: Duration,
    markers: Vec<String>,
    schedules: HashMap<ViewId, PollSchedule>,
    next_generation: u64,
    last_badge: Option<bool>,
    tx: Sender<ProbeOutcome>,
    rx: Receiver<ProbeOutcome>,
}

impl NotificationPoller {
    pub fn new(config: &NotificationConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            enabled: config.enabled,
            view_id: ViewId::new(&config.view_id),
            url_pattern: config.url_pattern.trim().to_lowercase(),
            grace: Duration::from_millis(u64::from(config.grace_ms)),
            period: Duration::from_millis(u64::from(config.period_ms)),
            markers: config
                .markers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
            schedules: HashMap::new(),
            next_generation: 0,
            last_badge: None,
            tx,
            rx,
        }
    }

    /// Whether a view showing `url` should be polled.
    pub fn is_eligible(&self, id: &ViewId, url: &str) -> bool {
        if !self.enabled {
            return false;
        }
        (!self.view_id.is_empty() && *id == self.view_id)
            || (!self.url_pattern.is_empty() && url.to_lowercase().contains(&self.url_pattern))
    }

    /// (Re)start polling after a finished load. Returns whether polling runs.
    pub fn on_load_finished(&mut self, id: &ViewId, url: &str, now: Instant) -> bool {
        if !self.is_eligible(id, url) {
            return false;
        }
        self.next_generation += 1;
        self.schedules.insert(
            id.clone(),
            PollSchedule {
                next_due: now + self.grace,
                generation: self.next_generation,
            },
        );
        debug!(view_id = %id, grace_ms = self.grace.as_millis() as u64, "notification polling scheduled");
        true
    }

    pub fn is_polling(&self, id: &ViewId) -> bool {
        self.schedules.contains_key(id)
    }

    /// Stop polling a view. Results still in flight are dropped.
    ///
    /// Once no view is polled the badge state is forgotten. Returns
    /// `Some(false)` when a lit badge has to be cleared.
    pub fn cancel(&mut self, id: &ViewId) -> Option<bool> {
        if self.schedules.remove(id).is_none() {
            return None;
        }
        debug!(view_id = %id, "notification polling cancelled");
        if !self.schedules.is_empty() {
            return None;
        }
        match self.last_badge.take() {
            Some(true) => Some(false),
            _ => None,
        }
    }

    pub fn cancel_all(&mut self) {
        self.schedules.clear();
    }

    /// Earliest pending probe, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedules.values().map(|s| s.next_due).min()
    }

    /// Views whose probe is due. Each returned view's schedule advances by
    /// one period; missed periods are not replayed.
    pub fn take_due(&mut self, now: Instant) -> Vec<(ViewId, ScriptCallback)> {
        let period = self.period;
        let mut due = Vec::new();
        for (id, schedule) in self.schedules.iter_mut() {
            if now < schedule.next_due {
                continue;
            }
            schedule.next_due = now + period;
            due.push((id.clone(), probe_callback(&self.tx, id, schedule.generation)));
        }
        due
    }

    /// Whether a probe value indicates unread items.
    pub fn has_marker(&self, value: &str) -> bool {
        let value = decode_probe_value(value).to_lowercase();
        self.markers.iter().any(|m| value.contains(m.as_str()))
    }

    /// Apply completed probes. Returns the new badge state when it changed.
    pub fn drain_results(&mut self) -> Option<bool> {
        let mut changed = None;
        while let Ok(outcome) = self.rx.try_recv() {
            let current = self
                .schedules
                .get(&outcome.id)
                .is_some_and(|s| s.generation == outcome.generation);
            if !current {
                trace!(view_id = %outcome.id, "dropping probe result for stale schedule");
                continue;
            }
            let value = match outcome.result {
                Ok(value) => value,
                Err(e) => {
                    trace!(view_id = %outcome.id, error = %e, "probe failed, skipping cycle");
                    continue;
                }
            };
            let badge = self.has_marker(&value);
            if self.last_badge != Some(badge) {
                self.last_badge = Some(badge);
                changed = Some(badge);
            }
        }
        changed
    }
}

fn probe_callback(tx: &Sender<ProbeOutcome>, id: &ViewId, generation: u64) -> ScriptCallback {
    let tx = tx.clone();
    let id = id.clone();
    Box::new(move |result| {
        // Receiver gone means the manager shut down.
        let _ = tx.send(ProbeOutcome {
            id,
            generation,
            result,
        });
    })
}

/// Engines return script results JSON-encoded; plain strings pass through.
fn decode_probe_value(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::String(s)) => s,
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poller() -> NotificationPoller {
        NotificationPoller::new(&NotificationConfig::default())
    }

    const TEAMS: &str = "https://teams.microsoft.com/_#/conversations";

    #[test]
    fn eligible_by_id_or_url() {
        let p = poller();
        assert!(p.is_eligible(&ViewId::new("teams"), "about:blank"));
        assert!(p.is_eligible(&ViewId::new("chat"), TEAMS));
        assert!(!p.is_eligible(&ViewId::new("mail"), "https://outlook.office.com/mail/"));
    }

    #[test]
    fn disabled_poller_is_never_eligible() {
        let config = NotificationConfig {
            enabled: false,
            ..Default::default()
        };
        let p = NotificationPoller::new(&config);
        assert!(!p.is_eligible(&ViewId::new("teams"), TEAMS));
    }

    #[test]
    fn first_probe_waits_for_grace() {
        let mut p = poller();
        let start = Instant::now();
        let id = ViewId::new("teams");
        assert!(p.on_load_finished(&id, TEAMS, start));

        assert!(p.take_due(start + Duration::from_millis(2999)).is_empty());
        let due = p.take_due(start + Duration::from_millis(3000));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0, id);

        // Next probe one period later.
        assert!(p.take_due(start + Duration::from_millis(7999)).is_empty());
        assert_eq!(p.take_due(start + Duration::from_millis(8000)).len(), 1);
    }

    #[test]
    fn badge_reported_only_on_change() {
        let mut p = poller();
        let start = Instant::now();
        let id = ViewId::new("teams");
        p.on_load_finished(&id, TEAMS, start);

        let (_, cb) = p.take_due(start + Duration::from_secs(3)).pop().unwrap();
        cb(Ok("\"/favicon-unread-3.ico\"".into()));
        assert_eq!(p.drain_results(), Some(true));

        let (_, cb) = p.take_due(start + Duration::from_secs(8)).pop().unwrap();
        cb(Ok("\"/favicon-unread-4.ico\"".into()));
        assert_eq!(p.drain_results(), None);

        let (_, cb) = p.take_due(start + Duration::from_secs(13)).pop().unwrap();
        cb(Ok("\"/favicon.ico\"".into()));
        assert_eq!(p.drain_results(), Some(false));
    }

    #[test]
    fn probe_failure_skips_cycle_and_polling_continues() {
        let mut p = poller();
        let start = Instant::now();
        let id = ViewId::new("teams");
        p.on_load_finished(&id, TEAMS, start);

        let (_, cb) = p.take_due(start + Duration::from_secs(3)).pop().unwrap();
        cb(Err("document not ready".into()));
        assert_eq!(p.drain_results(), None);
        assert!(p.is_polling(&id));

        let (_, cb) = p.take_due(start + Duration::from_secs(8)).pop().unwrap();
        cb(Ok("badge".into()));
        assert_eq!(p.drain_results(), Some(true));
    }

    #[test]
    fn cancelled_schedule_drops_in_flight_results() {
        let mut p = poller();
        let start = Instant::now();
        let id = ViewId::new("teams");
        p.on_load_finished(&id, TEAMS, start);

        let (_, cb) = p.take_due(start + Duration::from_secs(3)).pop().unwrap();
        p.cancel(&id);
        cb(Ok("unread".into()));

        assert_eq!(p.drain_results(), None);
        assert!(p.take_due(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn restart_supersedes_previous_schedule() {
        let mut p = poller();
        let start = Instant::now();
        let id = ViewId::new("teams");
        p.on_load_finished(&id, TEAMS, start);
        let (_, old_cb) = p.take_due(start + Duration::from_secs(3)).pop().unwrap();

        p.on_load_finished(&id, TEAMS, start + Duration::from_secs(4));
        old_cb(Ok("unread".into()));
        assert_eq!(p.drain_results(), None);
        assert!(p.take_due(start + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        let p = poller();
        assert!(p.has_marker("\"/img/Notification-Dot.png\""));
        assert!(!p.has_marker("\"/favicon.ico\""));
        assert!(!p.has_marker(""));
    }

    #[test]
    fn cancelling_last_polled_view_clears_lit_badge() {
        let mut p = poller();
        let start = Instant::now();
        let id = ViewId::new("teams");
        p.on_load_finished(&id, TEAMS, start);

        let (_, cb) = p.take_due(start + Duration::from_secs(3)).pop().unwrap();
        cb(Ok("unread".into()));
        assert_eq!(p.drain_results(), Some(true));

        assert_eq!(p.cancel(&id), Some(false));
        assert_eq!(p.cancel(&id), None);

        // A fresh schedule reports its first result again.
        p.on_load_finished(&id, TEAMS, start + Duration::from_secs(10));
        let (_, cb) = p.take_due(start + Duration::from_secs(13)).pop().unwrap();
        cb(Ok("unread".into()));
        assert_eq!(p.drain_results(), Some(true));
    }

    #[test]
    fn cancel_keeps_badge_while_another_view_polls() {
        let mut p = poller();
        let start = Instant::now();
        let teams = ViewId::new("teams");
        let chat = ViewId::new("chat");
        p.on_load_finished(&teams, TEAMS, start);
        p.on_load_finished(&chat, TEAMS, start);

        for (_, cb) in p.take_due(start + Duration::from_secs(3)) {
            cb(Ok("unread".into()));
        }
        assert_eq!(p.drain_results(), Some(true));

        assert_eq!(p.cancel(&chat), None);
        assert_eq!(p.cancel(&teams), Some(false));
    }

    #[test]
    fn cancel_without_lit_badge_reports_nothing() {
        let mut p = poller();
        let id = ViewId::new("teams");
        p.on_load_finished(&id, TEAMS, Instant::now());
        assert_eq!(p.cancel(&id), None);
    }
}
