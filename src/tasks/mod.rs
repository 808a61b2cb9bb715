//! Background tasks module
//!
//! This module contains the task that advances an active countdown.

pub mod ticker;

// Re-export main types
pub use ticker::Ticker;
