//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info};

use super::responses::{ApiResponse, CountdownView, HealthResponse, StatusResponse};
use crate::{
    error::Result,
    state::{AppState, CountdownState},
};

type HandlerResult<T> = std::result::Result<Json<T>, StatusCode>;

fn respond(
    action: &str,
    message: &str,
    result: Result<CountdownState>,
) -> HandlerResult<ApiResponse> {
    match result {
        Ok(countdown) => {
            info!("{} endpoint called - remaining {}ms", action, countdown.remaining_millis());
            Ok(Json(ApiResponse::new(message, &countdown)))
        }
        Err(e) => {
            error!("Failed to {} countdown: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> HandlerResult<ApiResponse> {
    respond("start", "Countdown started", state.start())
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> HandlerResult<ApiResponse> {
    respond("pause", "Countdown paused", state.pause())
}

/// Handle POST /toggle - Start when idle, pause when active
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> HandlerResult<ApiResponse> {
    respond("toggle", "Countdown toggled", state.toggle())
}

/// Handle POST /reset - Restore the full duration
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> HandlerResult<ApiResponse> {
    respond("reset", "Countdown reset", state.reset())
}

/// Handle GET /status - Return current countdown status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> HandlerResult<StatusResponse> {
    let countdown = match state.get_countdown() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to get countdown state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        countdown: CountdownView::from(&countdown),
        uptime: state.get_uptime(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
