//! Auto-click schedule owned by the host loop.
//!
//! The engine never runs timers itself; it returns [`TimerCommand`]s and the
//! host applies them here. Only one schedule exists at a time: starting
//! again replaces the previous one.

use super::constants::AUTO_CLICK_MAX_CATCHUP;
use super::events::TimerCommand;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct AutoClicker {
    interval: Option<Duration>,
    next_due: Option<Instant>,
    paused: bool,
}

impl AutoClicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running schedule and start a new one; the first click is
    /// due one interval after `now`.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.interval = Some(interval);
        self.next_due = if self.paused {
            None
        } else {
            Some(now + interval)
        };
    }

    pub fn stop(&mut self) {
        self.interval = None;
        self.next_due = None;
    }

    pub fn apply(&mut self, command: TimerCommand, now: Instant) {
        match command {
            TimerCommand::Start(interval) => self.start(interval, now),
            TimerCommand::Stop => self.stop(),
        }
    }

    /// Suspend while the host is in the background. The cadence is kept.
    pub fn pause(&mut self) {
        self.paused = true;
        self.next_due = None;
    }

    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        if let Some(interval) = self.interval {
            self.next_due = Some(now + interval);
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of auto-clicks due at `now`, at most [`AUTO_CLICK_MAX_CATCHUP`].
    /// A host that stalled longer than that skips the backlog.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let (Some(interval), Some(mut due)) = (self.interval, self.next_due) else {
            return 0;
        };

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += interval;
            if fired == AUTO_CLICK_MAX_CATCHUP {
                if due <= now {
                    due = now + interval;
                }
                break;
            }
        }
        self.next_due = Some(due);
        fired
    }
}
