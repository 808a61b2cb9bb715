//! Countdown state machine

use serde::{Deserialize, Serialize};

/// Interval between ticks, and the amount each tick removes, in milliseconds
pub const TICK_INTERVAL_MS: u64 = 50;

/// Session length used when none is configured
pub const DEFAULT_DURATION_MS: u64 = 60_000;

/// Longest session accepted from the command line
pub const MAX_DURATION_MS: u64 = u64::MAX / 100;

/// The two phases of the countdown engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Active,
}

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run goes on, another tick should follow
    Continue,
    /// Less than one tick remains, the engine went back to idle
    Expired,
    /// The tick belonged to a cancelled run or the engine is idle
    Ignored,
}

/// Remaining time and phase of one countdown session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    total_millis: u64,
    remaining_millis: u64,
    phase: Phase,
    generation: u64,
}

impl CountdownState {
    /// Create an idle countdown with the full duration remaining.
    ///
    /// A zero duration is bumped to one millisecond so the ratio stays defined.
    pub fn new(total_millis: u64) -> Self {
        let total_millis = total_millis.max(1);
        Self {
            total_millis,
            remaining_millis: total_millis,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn total_millis(&self) -> u64 {
        self.total_millis
    }

    pub fn remaining_millis(&self) -> u64 {
        self.remaining_millis
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Identifier of the current run; changes on every start, pause and reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `start` would move the engine to active
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Idle && self.remaining_millis > 0
    }

    /// Move to active. Returns the generation ticks for this run must carry,
    /// or `None` if already active or nothing is left to count down.
    pub fn start(&mut self) -> Option<u64> {
        if !self.can_start() {
            return None;
        }
        self.phase = Phase::Active;
        self.generation += 1;
        Some(self.generation)
    }

    /// Stop ticking and keep the remaining time. Returns true if the engine was active.
    pub fn pause(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.phase = Phase::Idle;
        self.generation += 1;
        true
    }

    /// Restore the full duration and go idle, from either phase
    pub fn reset(&mut self) {
        self.remaining_millis = self.total_millis;
        self.phase = Phase::Idle;
        self.generation += 1;
    }

    /// Apply one tick scheduled by the run identified by `generation`
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if self.phase != Phase::Active || generation != self.generation {
            return TickOutcome::Ignored;
        }

        self.remaining_millis = self.remaining_millis.saturating_sub(TICK_INTERVAL_MS);
        if self.remaining_millis < TICK_INTERVAL_MS {
            self.phase = Phase::Idle;
            TickOutcome::Expired
        } else {
            TickOutcome::Continue
        }
    }

    /// Integer percentage of the duration still remaining
    pub fn percent(&self) -> u64 {
        // Widened so a huge duration cannot overflow; the result is at most 100
        (u128::from(self.remaining_millis) * 100 / u128::from(self.total_millis)) as u64
    }

    /// Remaining ratio in `[0.0, 1.0]`
    pub fn ratio(&self) -> f64 {
        self.remaining_millis as f64 / self.total_millis as f64
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}
