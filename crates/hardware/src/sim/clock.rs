//! Execution clock.
//!
//! The clock is purely a pacing adapter over [`Machine::step`]: it invokes
//! one step per period and sleeps out the remainder of each tick. Pacing
//! never changes semantics; a zero period steps back-to-back, and a test
//! driver calling `step()` directly observes identical machine behavior.

use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::common::HaltReason;
use crate::config::Config;
use crate::core::{Machine, Step};

/// Fixed-period driver for a machine.
#[derive(Debug, Clone)]
pub struct Clock {
    period: Duration,
    running: bool,
}

impl Clock {
    /// Creates a clock with the configured tick period.
    pub fn new(config: &Config) -> Self {
        Self::with_period(Duration::from_millis(config.clock.interval_ms))
    }

    /// Creates a clock with an explicit tick period.
    ///
    /// A zero period steps back-to-back without sleeping.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            running: false,
        }
    }

    /// Whether a `start` call is currently stepping a machine.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Steps `machine` once per tick until it halts, then returns the halt
    /// reason.
    ///
    /// A machine that is already halted returns its reason without
    /// stepping; restarting therefore requires clearing the machine's halt
    /// latch first, not a different clock.
    pub fn start(&mut self, machine: &mut Machine) -> HaltReason {
        self.running = true;
        debug!(period_ms = self.period.as_millis() as u64, "clock started");

        let mut last_tick = Instant::now();
        let reason = loop {
            match machine.step() {
                Step::Halted(reason) => break reason,
                Step::Continue => {}
            }
            if !self.period.is_zero() {
                let elapsed = last_tick.elapsed();
                if elapsed < self.period {
                    thread::sleep(self.period - elapsed);
                }
                last_tick = Instant::now();
            }
        };

        self.stop();
        reason
    }

    /// Marks the clock stopped. Idempotent.
    ///
    /// The machine's own halt latch is untouched: stopping the clock is a
    /// pacing decision, not a machine state change.
    pub fn stop(&mut self) {
        if self.running {
            debug!("clock stopped");
        }
        self.running = false;
    }
}
