//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{CountdownState, TickOutcome, TICK_INTERVAL_MS};
use crate::{error::Result, tasks::Ticker};

/// Shared countdown state plus the ticker that advances it
#[derive(Debug)]
pub struct AppState {
    /// Remaining time and phase
    countdown: Mutex<CountdownState>,
    /// Tick task of the current run, if one was scheduled
    ticker: Mutex<Option<Ticker>>,
    tick_interval: Duration,
    /// Process metadata
    start_time: Instant,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for countdown updates
    update_tx: watch::Sender<CountdownState>,
    /// Keep the receiver alive to prevent channel closure
    _update_rx: watch::Receiver<CountdownState>,
}

impl AppState {
    /// Create an idle countdown of `total_millis`
    pub fn new(total_millis: u64) -> Self {
        let countdown = CountdownState::new(total_millis);
        let (update_tx, update_rx) = watch::channel(countdown);

        Self {
            countdown: Mutex::new(countdown),
            ticker: Mutex::new(None),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            start_time: Instant::now(),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            update_tx,
            _update_rx: update_rx,
        }
    }

    /// Start counting down. Must be called from within a tokio runtime.
    pub fn start(self: &Arc<Self>) -> Result<CountdownState> {
        let mut countdown = self.countdown.lock()?;
        self.start_locked(&mut countdown)?;
        let snapshot = *countdown;
        drop(countdown);

        self.record_action("start");
        self.publish(snapshot);
        Ok(snapshot)
    }

    /// Pause the countdown, keeping the remaining time
    pub fn pause(&self) -> Result<CountdownState> {
        let mut countdown = self.countdown.lock()?;
        self.pause_locked(&mut countdown)?;
        let snapshot = *countdown;
        drop(countdown);

        self.record_action("pause");
        self.publish(snapshot);
        Ok(snapshot)
    }

    /// Start when idle, pause when active
    pub fn toggle(self: &Arc<Self>) -> Result<CountdownState> {
        let mut countdown = self.countdown.lock()?;
        let action = if countdown.is_running() {
            self.pause_locked(&mut countdown)?;
            "pause"
        } else {
            self.start_locked(&mut countdown)?;
            "start"
        };
        let snapshot = *countdown;
        drop(countdown);

        self.record_action(action);
        self.publish(snapshot);
        Ok(snapshot)
    }

    /// Cancel any run and restore the full duration
    pub fn reset(&self) -> Result<CountdownState> {
        let mut countdown = self.countdown.lock()?;
        let mut ticker = self.ticker.lock()?;
        countdown.reset();
        ticker.take();
        let snapshot = *countdown;
        drop(ticker);
        drop(countdown);

        info!("Countdown reset to {}ms", snapshot.total_millis());
        self.record_action("reset");
        self.publish(snapshot);
        Ok(snapshot)
    }

    /// Apply one tick on behalf of the run `generation`
    pub fn apply_tick(&self, generation: u64) -> Result<TickOutcome> {
        let mut countdown = self.countdown.lock()?;
        let outcome = countdown.tick(generation);
        let snapshot = *countdown;
        drop(countdown);

        match outcome {
            TickOutcome::Continue => self.publish(snapshot),
            TickOutcome::Expired => {
                info!("Countdown expired with {}ms left", snapshot.remaining_millis());
                self.publish(snapshot);
            }
            TickOutcome::Ignored => {
                debug!("Ignoring tick from run {}", generation);
            }
        }

        Ok(outcome)
    }

    /// Get current countdown state
    pub fn get_countdown(&self) -> Result<CountdownState> {
        Ok(*self.countdown.lock()?)
    }

    /// Receiver notified on every countdown change
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.update_tx.subscribe()
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    // Both helpers take the ticker slot before touching the countdown, so a
    // poisoned slot leaves the state as it was.
    fn start_locked(self: &Arc<Self>, countdown: &mut CountdownState) -> Result<()> {
        let mut slot = self.ticker.lock()?;
        let Some(generation) = countdown.start() else {
            debug!(
                "Start ignored: running={}, remaining={}ms",
                countdown.is_running(),
                countdown.remaining_millis()
            );
            return Ok(());
        };

        match Ticker::spawn(self, generation, self.tick_interval) {
            Ok(ticker) => {
                // Replacing the slot drops any ticker left over from an expired run
                *slot = Some(ticker);
                info!("Countdown started with {}ms left", countdown.remaining_millis());
                Ok(())
            }
            Err(e) => {
                countdown.pause();
                Err(e)
            }
        }
    }

    fn pause_locked(&self, countdown: &mut CountdownState) -> Result<()> {
        let mut slot = self.ticker.lock()?;
        if countdown.pause() {
            slot.take();
            info!("Countdown paused with {}ms left", countdown.remaining_millis());
        }
        Ok(())
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn publish(&self, snapshot: CountdownState) {
        if let Err(e) = self.update_tx.send(snapshot) {
            warn!("Failed to send countdown update: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn one_second_of_ticking_removes_one_second() {
        let state = Arc::new(AppState::new(60_000));
        state.start().unwrap();

        sleep(Duration::from_millis(1_025)).await;

        let countdown = state.get_countdown().unwrap();
        assert_eq!(countdown.remaining_millis(), 59_000);
        assert!(countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_right_after_start_keeps_everything() {
        let state = Arc::new(AppState::new(60_000));
        state.start().unwrap();
        let countdown = state.pause().unwrap();

        assert_eq!(countdown.remaining_millis(), 60_000);
        assert!(!countdown.is_running());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_millis(), 60_000);
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_lands_after_pause() {
        let state = Arc::new(AppState::new(60_000));
        state.start().unwrap();
        sleep(Duration::from_millis(260)).await;
        let paused = state.pause().unwrap();
        assert_eq!(paused.remaining_millis(), 59_750);

        sleep(Duration::from_millis(1_000)).await;
        assert_eq!(state.get_countdown().unwrap(), paused);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_stops_the_run() {
        let state = Arc::new(AppState::new(500));
        state.start().unwrap();

        sleep(Duration::from_millis(2_000)).await;

        let countdown = state.get_countdown().unwrap();
        assert_eq!(countdown.remaining_millis(), 0);
        assert_eq!(countdown.phase(), Phase::Idle);

        // Starting at zero does nothing until a reset
        let countdown = state.start().unwrap();
        assert!(!countdown.is_running());
        let countdown = state.reset().unwrap();
        assert_eq!(countdown.remaining_millis(), 500);
        assert!(countdown.can_start());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_the_run() {
        let state = Arc::new(AppState::new(60_000));
        state.start().unwrap();
        sleep(Duration::from_millis(510)).await;

        let countdown = state.reset().unwrap();
        assert_eq!(countdown.remaining_millis(), 60_000);
        assert!(!countdown.is_running());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_millis(), 60_000);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_alternates_between_phases() {
        let state = Arc::new(AppState::new(60_000));
        assert!(state.toggle().unwrap().is_running());
        sleep(Duration::from_millis(110)).await;
        let paused = state.toggle().unwrap();
        assert!(!paused.is_running());
        assert_eq!(paused.remaining_millis(), 59_900);
        assert_eq!(state.get_last_action().0.as_deref(), Some("pause"));
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_ticks() {
        let state = Arc::new(AppState::new(60_000));
        let mut rx = state.subscribe();
        state.start().unwrap();
        rx.borrow_and_update();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().remaining_millis(), 59_950);
    }

    fn poison_ticker_slot(state: &Arc<AppState>) {
        let state = Arc::clone(state);
        let _ = std::thread::spawn(move || {
            let _slot = state.ticker.lock().unwrap();
            panic!("ticker slot poisoned for test");
        })
        .join();
    }

    #[tokio::test(start_paused = true)]
    async fn poisoned_ticker_slot_leaves_an_active_run_untouched() {
        let state = Arc::new(AppState::new(60_000));
        state.start().unwrap();
        sleep(Duration::from_millis(110)).await;
        poison_ticker_slot(&state);

        assert!(state.reset().is_err());
        assert!(state.pause().is_err());
        assert!(state.toggle().is_err());

        let countdown = state.get_countdown().unwrap();
        assert_eq!(countdown.remaining_millis(), 59_900);
        assert!(countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn poisoned_ticker_slot_keeps_an_idle_countdown_idle() {
        let state = Arc::new(AppState::new(60_000));
        poison_ticker_slot(&state);

        assert!(state.start().is_err());
        let countdown = state.get_countdown().unwrap();
        assert!(!countdown.is_running());
        assert_eq!(countdown.generation(), 0);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_millis(), 60_000);
    }

    #[test]
    fn start_outside_a_runtime_fails_and_stays_idle() {
        let state = Arc::new(AppState::new(60_000));
        assert!(state.start().is_err());
        assert!(!state.get_countdown().unwrap().is_running());
    }
}
