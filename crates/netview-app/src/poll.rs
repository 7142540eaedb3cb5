use netview_events::PollKind;
use std::time::{Duration, Instant};

/// Fixed-interval poll scheduling. Every poll fires on its own cadence; a
/// failed poll does not change the cadence, it is simply retried on the
/// next due tick.
#[derive(Debug)]
pub struct PollPlan {
    entries: Vec<PollEntry>,
}

#[derive(Debug)]
struct PollEntry {
    kind: PollKind,
    interval: Duration,
    next_due: Instant,
}

impl PollPlan {
    /// The standard plan: logs and status every 3 s, the layout list every
    /// 30 s. All polls are due immediately at startup.
    pub fn standard(now: Instant) -> Self {
        Self::new(
            now,
            &[
                (PollKind::Logs, Duration::from_secs(3)),
                (PollKind::Status, Duration::from_secs(3)),
                (PollKind::LayoutList, Duration::from_secs(30)),
            ],
        )
    }

    pub fn new(now: Instant, intervals: &[(PollKind, Duration)]) -> Self {
        let entries = intervals
            .iter()
            .map(|&(kind, interval)| PollEntry {
                kind,
                interval,
                next_due: now,
            })
            .collect();
        Self { entries }
    }

    /// Polls due at `now`, each rescheduled one interval ahead.
    pub fn due(&mut self, now: Instant) -> Vec<PollKind> {
        let mut due = Vec::new();
        for entry in &mut self.entries {
            if now >= entry.next_due {
                due.push(entry.kind);
                entry.next_due = now + entry.interval;
            }
        }
        due
    }

    /// How long until the earliest pending poll, for the loop's sleep.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.entries
            .iter()
            .map(|e| e.next_due.saturating_duration_since(now))
            .min()
            .unwrap_or(Duration::ZERO)
    }
}
