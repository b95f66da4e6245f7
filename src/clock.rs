//! # Timers
//!
//! The engine never sleeps or polls. It asks a [`Clock`] to schedule a
//! single timeout per phase and receives the firing back through
//! [`QuizEngine::handle_timer`](crate::QuizEngine::handle_timer) with the
//! [`TimerId`] it was given, so a firing from an earlier round can be told
//! apart from the live one.
//!
//! [`ManualClock`] is a virtual-time clock: nothing fires until the host
//! calls [`ManualClock::advance`]. It drives the tests and the terminal
//! front end.

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerId(u64);

pub trait Clock {
    /// Time since the clock started
    fn now(&self) -> Duration;

    /// Arrange for a firing `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer. Cancelling a fired or already cancelled timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerId)>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and return the timers that came due, earliest first.
    ///
    /// Fired timers are forgotten; timers scheduled later (e.g. while the
    /// host delivers these firings) start counting from the new `now`.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.pending = pending;
        due.sort();
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Deadline of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Time left until the earliest pending timer fires
    pub fn until_next(&self) -> Option<Duration> {
        self.next_deadline().map(|d| d.saturating_sub(self.now))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending)| *pending != id);
    }
}

/// Visual countdown for the answer window.
///
/// Purely cosmetic: the bar shrinks linearly from full to empty, while the
/// scheduled timeout alone decides when the round is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub started_at: Duration,
    pub window: Duration,
}

impl Countdown {
    pub fn new(started_at: Duration, window: Duration) -> Self {
        Self { started_at, window }
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        let elapsed = now.saturating_sub(self.started_at);
        self.window.saturating_sub(elapsed)
    }

    /// 1.0 at the start of the window, 0.0 once it has elapsed.
    pub fn remaining_fraction(&self, now: Duration) -> f64 {
        if self.window.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f64() / self.window.as_secs_f64()).clamp(0.0, 1.0)
    }
}
