//! Periodic tick task driving an active countdown

use std::{
    sync::{Arc, Weak},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::{
    error::{CountdownError, Result},
    state::{AppState, TickOutcome},
};

/// Owned handle to the tick task of one countdown run.
///
/// Dropping the handle cancels the task; no tick is applied afterwards.
#[derive(Debug)]
pub struct Ticker {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a task applying a tick every `period`, first one `period` from now.
    ///
    /// The task only holds a weak reference to the state and exits once the
    /// run ends or the state is dropped.
    pub fn spawn(state: &Arc<AppState>, generation: u64, period: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| CountdownError::Ticker(e.to_string()))?;

        let token = CancellationToken::new();
        let task_token = token.clone();
        let weak: Weak<AppState> = Arc::downgrade(state);

        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;

                    _ = task_token.cancelled() => {
                        debug!("Ticker for run {} cancelled", generation);
                        break;
                    }

                    _ = interval.tick() => {
                        let Some(state) = weak.upgrade() else {
                            debug!("Countdown state dropped, stopping ticker");
                            break;
                        };

                        match state.apply_tick(generation) {
                            Ok(TickOutcome::Continue) => {}
                            Ok(TickOutcome::Expired) => {
                                debug!("Run {} expired, stopping ticker", generation);
                                break;
                            }
                            Ok(TickOutcome::Ignored) => {
                                debug!("Run {} is stale, stopping ticker", generation);
                                break;
                            }
                            Err(e) => {
                                error!("Failed to apply tick: {}", e);
                                break;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self { token, handle })
    }

    #[cfg(test)]
    fn cancel(&self) {
        self.token.cancel();
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.token.cancel();
        self.handle.abort();
    }
}
