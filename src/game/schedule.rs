//! Tick scheduling decisions for the host timer.
//!
//! The engine never owns a timer. The host arms one with [`TickSchedule::on_start`]
//! and asks [`TickSchedule::reschedule`] after every tick whether the period
//! must change.

use std::time::Duration;

use super::config::TickPolicy;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSchedule {
    policy: TickPolicy,
    interval: Duration,
}

impl TickSchedule {
    pub fn new(policy: TickPolicy, state: &GameState) -> Self {
        Self {
            policy,
            interval: state.tick_interval(),
        }
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    /// Period the host timer should currently run at
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Capture the interval for a freshly started run
    pub fn on_start(&mut self, state: &GameState) -> Duration {
        self.interval = state.tick_interval();
        self.interval
    }

    /// New period if the timer has to be re-armed, `None` otherwise
    pub fn reschedule(&mut self, state: &GameState) -> Option<Duration> {
        if self.policy == TickPolicy::Fixed || !state.is_running() {
            return None;
        }

        let wanted = state.tick_interval();
        if wanted == self.interval {
            return None;
        }

        self.interval = wanted;
        Some(wanted)
    }
}
