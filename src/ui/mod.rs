//! Terminal presentation module
//!
//! This module renders the countdown as a ring with a digital clock and maps
//! key presses to countdown actions.

pub mod arc;
pub mod clock;
pub mod color;
pub mod screen;
pub mod tui;

// Re-export main types
pub use clock::{format_clock, parse_clock, ClockParseError};
pub use color::Band;
pub use tui::{action_for_key, Action, Event, Tui};
