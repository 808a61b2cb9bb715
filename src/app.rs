//! Interactive countdown screen loop

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn};

use crate::{
    state::AppState,
    ui::{action_for_key, screen, Action, Event, Tui},
    utils::shutdown_signal,
};

/// Run the countdown screen until the user quits or a shutdown signal arrives
pub async fn run_tui(state: Arc<AppState>) -> anyhow::Result<()> {
    let mut tui = Tui::new().context("Failed to open terminal")?;
    tui.enter().context("Failed to enter raw mode")?;

    let mut updates = state.subscribe();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    info!("Countdown screen started");

    loop {
        let countdown = *updates.borrow_and_update();
        tui.terminal_mut()
            .draw(|frame| screen::render(frame, &countdown))
            .context("Failed to draw countdown screen")?;

        tokio::select! {
            event = tui.next() => match event {
                Some(Event::Key(key)) => {
                    let result = match action_for_key(key) {
                        Some(Action::Toggle) => state.toggle(),
                        Some(Action::Reset) => state.reset(),
                        Some(Action::Quit) => break,
                        None => continue,
                    };
                    if let Err(e) = result {
                        warn!("Failed to apply key action: {}", e);
                    }
                }
                Some(Event::Resize) => {}
                Some(Event::Error(e)) => warn!("Terminal event error: {}", e),
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    tui.exit().context("Failed to restore terminal")?;
    info!("Countdown screen closed");
    Ok(())
}
