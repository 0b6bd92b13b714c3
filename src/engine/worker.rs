use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::messages::{RefreshOutcome, RepaintSignal};

use crate::config::DF;
use crate::data::MarketDataProvider;

/// Handle to the running refresh schedule. Dropping it stops all future ticks.
///
/// Fetches already in flight are left to finish; their outcomes go to a
/// channel that nobody reads any more once the dashboard is gone.
pub struct RefreshSchedule {
    task: JoinHandle<()>,
}

impl RefreshSchedule {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshSchedule {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Starts the list refresh cycle on the current tokio runtime: one fetch
/// right away, then one every `period` measured from the start.
///
/// Ticks do not wait for each other. Each one spawns its own fetch, so with a
/// slow API two fetches can overlap and whichever resolves last is applied.
pub fn spawn_refresh_schedule(
    provider: Arc<dyn MarketDataProvider>,
    tx: Sender<RefreshOutcome>,
    repaint: RepaintSignal,
    period: Duration,
) -> RefreshSchedule {
    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut tick: u64 = 0;

        loop {
            ticker.tick().await;
            tick += 1;

            if DF.log_refresh_ticks {
                log::info!("Refresh tick {} firing", tick);
            }

            let provider = provider.clone();
            let tx = tx.clone();
            let repaint = repaint.clone();
            tokio::spawn(async move {
                let result = provider
                    .fetch_assets()
                    .await
                    .map_err(|e| format!("{:#}", e));
                if tx.send(RefreshOutcome { tick, result }).is_ok() {
                    repaint();
                }
            });
        }
    });

    RefreshSchedule { task }
}
