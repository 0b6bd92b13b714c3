use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crate::config::{COINCAP, DF};
use crate::data::MarketDataProvider;
use crate::domain::{Asset, FilterField, FilterState};
use crate::engine::messages::{RefreshOutcome, RepaintSignal};
use crate::engine::worker::{RefreshSchedule, spawn_refresh_schedule};
use crate::utils::now_local_time_string;

/// Where the asset list stands, as far as the dashboard is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// No refresh has resolved yet.
    Loading,
    Ready,
    /// The latest refresh failed. The previous list is kept but not shown.
    Failed { cause: String },
}

/// Owner of the canonical asset list and the filter state.
#[derive(Debug, Clone)]
pub struct AssetBoard {
    assets: Vec<Asset>,
    filters: FilterState,
    status: FeedStatus,
    last_updated: Option<String>,
}

impl Default for AssetBoard {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl AssetBoard {
    pub fn new(filters: FilterState) -> Self {
        Self {
            assets: Vec::new(),
            filters,
            status: FeedStatus::Loading,
            last_updated: None,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Local wall-clock time of the last successful refresh.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.set(field, value);
        if DF.log_filters {
            log::info!(
                "Filter {} set to '{}' ({} of {} assets shown)",
                field,
                self.filters.get(field),
                self.filtered_assets().len(),
                self.assets.len()
            );
        }
    }

    /// The displayed subset, recomputed from the held list on every call.
    pub fn filtered_assets(&self) -> Vec<&Asset> {
        self.filters.apply(&self.assets)
    }

    pub fn find(&self, asset_id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == asset_id)
    }

    /// Applies one refresh outcome. Returns true when the held list was replaced.
    pub fn apply_outcome(&mut self, outcome: RefreshOutcome) -> bool {
        match outcome.result {
            Ok(assets) => {
                if DF.log_refresh {
                    log::info!("Refresh {}: received {} assets", outcome.tick, assets.len());
                }
                self.assets = assets;
                self.status = FeedStatus::Ready;
                self.last_updated = Some(now_local_time_string());
                true
            }
            Err(cause) => {
                log::error!("Refresh {} failed: {}", outcome.tick, cause);
                self.status = FeedStatus::Failed { cause };
                false
            }
        }
    }
}

/// The running dashboard data feed: board state plus the schedule that keeps it fresh.
/// Dropping the engine cancels the schedule.
pub struct DashboardEngine {
    pub board: AssetBoard,
    provider: Arc<dyn MarketDataProvider>,
    rx: Receiver<RefreshOutcome>,
    schedule: RefreshSchedule,
}

impl DashboardEngine {
    /// Must be called from within a tokio runtime context.
    pub fn start(provider: Arc<dyn MarketDataProvider>, repaint: RepaintSignal) -> Self {
        Self::start_with_period(
            provider,
            repaint,
            Duration::from_secs(COINCAP.refresh.interval_secs),
        )
    }

    pub fn start_with_period(
        provider: Arc<dyn MarketDataProvider>,
        repaint: RepaintSignal,
        period: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let schedule = spawn_refresh_schedule(provider.clone(), tx, repaint, period);
        Self {
            board: AssetBoard::default(),
            provider,
            rx,
            schedule,
        }
    }

    pub fn provider(&self) -> Arc<dyn MarketDataProvider> {
        self.provider.clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.schedule.is_running()
    }

    /// Drains every outcome that has arrived since the last frame, in arrival order.
    /// Returns true if the held list was replaced at least once.
    pub fn update(&mut self) -> bool {
        let mut replaced = false;
        while let Ok(outcome) = self.rx.try_recv() {
            replaced |= self.board.apply_outcome(outcome);
        }
        replaced
    }
}
