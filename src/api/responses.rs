//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{CountdownState, Phase},
    ui::{arc::sweep_degrees, format_clock, Band},
};

/// Countdown state with everything the screen derives from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownView {
    pub total_millis: u64,
    pub remaining_millis: u64,
    pub running: bool,
    pub percent: u64,
    pub clock: String,
    pub band: Band,
    pub color: String,
    pub sweep_degrees: f64,
}

impl From<&CountdownState> for CountdownView {
    fn from(countdown: &CountdownState) -> Self {
        let band = Band::for_remaining(countdown.remaining_millis(), countdown.total_millis());
        Self {
            total_millis: countdown.total_millis(),
            remaining_millis: countdown.remaining_millis(),
            running: countdown.is_running(),
            percent: countdown.percent(),
            clock: format_clock(countdown.remaining_millis()),
            band,
            color: band.hex(),
            sweep_degrees: sweep_degrees(countdown.remaining_millis(), countdown.total_millis()),
        }
    }
}

/// API response structure for countdown control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: Phase,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub countdown: CountdownView,
}

impl ApiResponse {
    /// Create a response reporting the phase the countdown ended up in
    pub fn new(message: impl Into<String>, countdown: &CountdownState) -> Self {
        Self {
            status: countdown.phase(),
            message: message.into(),
            timestamp: Utc::now(),
            countdown: CountdownView::from(countdown),
        }
    }
}

/// Status response with process information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub countdown: CountdownView,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
