// poller.rs
use crate::panel::ControlPanel;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::info;

pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2500);

/// Polls the device status every `period` until the handle is aborted.
///
/// The first poll happens one period after start. Each tick runs its poll
/// as a separate task, so a slow response never delays the next tick, and
/// the cadence does not change after failures.
pub fn spawn_poller(panel: Arc<ControlPanel>, period: Duration) -> JoinHandle<()> {
    let period = period.max(Duration::from_millis(1));
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(?period, "Status polling started");

        loop {
            ticker.tick().await;
            let panel = Arc::clone(&panel);
            tokio::spawn(async move { panel.update_status().await });
        }
    })
}
