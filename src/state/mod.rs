//! State management module
//!
//! This module contains the countdown state machine and the shared state that
//! owns its ticker.

pub mod app_state;
pub mod countdown;

// Re-export main types
pub use app_state::AppState;
pub use countdown::{
    CountdownState, Phase, TickOutcome, DEFAULT_DURATION_MS, MAX_DURATION_MS, TICK_INTERVAL_MS,
};
