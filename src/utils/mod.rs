//! Process-level helpers shared by the screen loop and the control API.

pub mod signals;

pub use signals::shutdown_signal;
