//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;
use thiserror::Error;

use crate::{
    state::MAX_DURATION_MS,
    ui::clock::{parse_clock, ClockParseError},
};

/// Reasons a `--duration` value is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error(transparent)]
    Clock(#[from] ClockParseError),

    #[error("duration must be at least one second")]
    Zero,

    #[error("duration of {seconds}s exceeds the maximum of {max_seconds}s")]
    TooLong { seconds: u64, max_seconds: u64 },
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-ring")]
#[command(about = "A terminal countdown timer with a depleting progress ring")]
#[command(version)]
pub struct Config {
    /// Countdown length as H:MM:SS, MM:SS or seconds
    #[arg(short, long, default_value = "00:01:00", value_parser = parse_duration_millis)]
    pub duration: u64,

    /// Also serve the HTTP control API while the screen runs
    #[arg(long)]
    pub listen: bool,

    /// Run without the screen, controlled only through the HTTP API
    #[arg(long)]
    pub headless: bool,

    /// Port for the control API
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address for the control API
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Write logs to this file; otherwise headless mode logs to stdout and the screen logs nothing
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the control API address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Whether the HTTP control API should be served
    pub fn serves_api(&self) -> bool {
        self.listen || self.headless
    }
}

/// Parse a `--duration` value into milliseconds
pub fn parse_duration_millis(text: &str) -> Result<u64, DurationError> {
    let seconds = parse_clock(text)?;
    if seconds == 0 {
        return Err(DurationError::Zero);
    }

    let max_seconds = MAX_DURATION_MS / 1000;
    if seconds > max_seconds {
        return Err(DurationError::TooLong { seconds, max_seconds });
    }
    Ok(seconds * 1000)
}
