use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::data::MarketDataProvider;
use crate::domain::{Asset, AssetHistoryPoint};
use crate::engine::RepaintSignal;

/// In-memory provider that counts calls and can be slowed down or made to fail.
#[derive(Default)]
pub(crate) struct MockProvider {
    asset_ids: Vec<String>,
    fail: bool,
    asset_delay: Option<Duration>,
    history_delays: Vec<(String, Duration)>,
    asset_calls: AtomicUsize,
    history_requests: Mutex<Vec<String>>,
}

impl MockProvider {
    pub(crate) fn with_assets(ids: &[&str]) -> Self {
        Self {
            asset_ids: ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn with_asset_delay(mut self, delay: Duration) -> Self {
        self.asset_delay = Some(delay);
        self
    }

    pub(crate) fn with_history_delay(mut self, asset_id: &str, delay: Duration) -> Self {
        self.history_delays.push((asset_id.to_string(), delay));
        self
    }

    pub(crate) fn asset_calls(&self) -> usize {
        self.asset_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn history_requests(&self) -> Vec<String> {
        self.history_requests.lock().unwrap().clone()
    }
}

/// Each asset's history is two samples priced by the length of its id, so
/// tests can tell whose series they are looking at.
pub(crate) fn history_for(asset_id: &str) -> Vec<AssetHistoryPoint> {
    (0..2)
        .map(|i| AssetHistoryPoint {
            price_usd: asset_id.len().to_string(),
            time: i * 3_600_000,
            date: None,
        })
        .collect()
}

pub(crate) fn test_asset(id: &str) -> Asset {
    Asset {
        id: id.to_string(),
        name: id.to_string(),
        symbol: id.to_uppercase(),
        market_cap_usd: "1000000000".to_string(),
        volume_usd_24h: "50000000".to_string(),
        change_percent_24h: "12.5".to_string(),
        price_usd: "1.5".to_string(),
        ..Default::default()
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    async fn fetch_assets(&self) -> Result<Vec<Asset>> {
        self.asset_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.asset_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(anyhow!("service unavailable"));
        }
        Ok(self.asset_ids.iter().map(|id| test_asset(id)).collect())
    }

    async fn fetch_history(&self, asset_id: &str) -> Result<Vec<AssetHistoryPoint>> {
        self.history_requests
            .lock()
            .unwrap()
            .push(asset_id.to_string());
        let delay = self
            .history_delays
            .iter()
            .find(|(id, _)| id == asset_id)
            .map(|(_, d)| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(anyhow!("history unavailable"));
        }
        Ok(history_for(asset_id))
    }
}

pub(crate) fn noop_repaint() -> RepaintSignal {
    Arc::new(|| {})
}

/// Lets spawned tasks on the current-thread test runtime run to their next await.
pub(crate) async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
