//! Countdown Ring - a terminal countdown timer
//!
//! This library provides the countdown state machine, the ticker that drives
//! it, the terminal screen that renders it as a depleting ring, and an HTTP
//! API exposing the same Start/Pause/Reset controls.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::CountdownError;
pub use state::{AppState, CountdownState, Phase};
pub use utils::signals::shutdown_signal;
