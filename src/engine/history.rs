use std::sync::Arc;

use poll_promise::Promise;

use crate::data::MarketDataProvider;
use crate::domain::AssetHistoryPoint;

/// One in-flight (or finished) history fetch for a single asset.
///
/// Owned by the detail view that asked for it. Dropping it throws the result
/// away, so a fetch that outlives its view never touches anything.
pub struct HistoryLoad {
    asset_id: String,
    promise: Promise<Vec<AssetHistoryPoint>>,
}

impl HistoryLoad {
    /// Starts the fetch on the current tokio runtime. A failure is logged and
    /// resolves to an empty series.
    pub fn spawn(provider: Arc<dyn MarketDataProvider>, asset_id: &str) -> Self {
        let id = asset_id.to_owned();
        let promise = Promise::spawn_async(async move {
            match provider.fetch_history(&id).await {
                Ok(points) => points,
                Err(e) => {
                    log::error!("Error fetching history for {}: {:#}", id, e);
                    Vec::new()
                }
            }
        });

        Self {
            asset_id: asset_id.to_owned(),
            promise,
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// `None` while the request is still running.
    pub fn points(&self) -> Option<&[AssetHistoryPoint]> {
        self.promise.ready().map(Vec::as_slice)
    }

    pub fn is_pending(&self) -> bool {
        self.promise.ready().is_none()
    }
}
