use std::sync::Arc;

use crate::config::DF;
use crate::data::MarketDataProvider;
use crate::domain::Asset;
use crate::engine::history::HistoryLoad;

/// The asset driving the detail view, with the history fetched for it.
pub struct SelectedAsset {
    pub asset: Asset,
    pub history: HistoryLoad,
}

/// At most one selected asset. Changing the selected id always starts a fresh
/// history fetch; the previous one is dropped with its view.
#[derive(Default)]
pub struct Selection {
    current: Option<SelectedAsset>,
}

impl Selection {
    pub fn current(&self) -> Option<&SelectedAsset> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn select(&mut self, asset: &Asset, provider: Arc<dyn MarketDataProvider>) {
        if let Some(selected) = &mut self.current {
            if selected.asset.id == asset.id {
                selected.asset = asset.clone();
                return;
            }
        }

        if DF.log_selection {
            log::info!("SELECTION SET to {} ({})", asset.name, asset.id);
        }
        self.current = Some(SelectedAsset {
            asset: asset.clone(),
            history: HistoryLoad::spawn(provider, &asset.id),
        });
    }

    pub fn close(&mut self) {
        if let Some(selected) = self.current.take() {
            if DF.log_selection {
                log::info!("SELECTION CLEARED ({})", selected.asset.id);
            }
        }
    }

    /// After a list refresh, show the newest stats for the selected asset.
    /// History is kept: the identity has not changed.
    pub fn sync_snapshot(&mut self, assets: &[Asset]) {
        if let Some(selected) = &mut self.current {
            if let Some(fresh) = assets.iter().find(|a| a.id == selected.asset.id) {
                selected.asset = fresh.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{MockProvider, history_for, settle, test_asset};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn reselecting_another_asset_fetches_fresh_history() {
        let provider = Arc::new(MockProvider::with_assets(&[]));
        let mut selection = Selection::default();

        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;
        selection.close();
        assert!(!selection.is_open());

        selection.select(&test_asset("solana"), provider.clone());
        settle().await;

        let selected = selection.current().unwrap();
        assert_eq!(selected.asset.id, "solana");
        assert_eq!(
            selected.history.points(),
            Some(history_for("solana").as_slice())
        );
        assert_eq!(provider.history_requests(), ["bitcoin", "solana"]);
    }

    #[tokio::test(start_paused = true)]
    async fn same_asset_is_not_refetched_while_open() {
        let provider = Arc::new(MockProvider::with_assets(&[]));
        let mut selection = Selection::default();

        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;
        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;
        assert_eq!(provider.history_requests(), ["bitcoin"]);

        // a new opening is an independent fetch
        selection.close();
        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;
        assert_eq!(provider.history_requests(), ["bitcoin", "bitcoin"]);
    }

    #[tokio::test(start_paused = true)]
    async fn late_history_for_a_replaced_selection_is_discarded() {
        let provider = Arc::new(
            MockProvider::with_assets(&[]).with_history_delay("bitcoin", Duration::from_secs(60)),
        );
        let mut selection = Selection::default();

        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;
        assert!(selection.current().unwrap().history.is_pending());

        selection.select(&test_asset("ethereum"), provider.clone());
        settle().await;

        tokio::time::advance(Duration::from_secs(61)).await;
        settle().await;

        let selected = selection.current().unwrap();
        assert_eq!(selected.history.asset_id(), "ethereum");
        assert_eq!(
            selected.history.points(),
            Some(history_for("ethereum").as_slice())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn closing_with_a_fetch_in_flight_is_safe() {
        let provider = Arc::new(
            MockProvider::with_assets(&[]).with_history_delay("bitcoin", Duration::from_secs(60)),
        );
        let mut selection = Selection::default();
        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;
        selection.close();

        tokio::time::advance(Duration::from_secs(61)).await;
        settle().await;
        assert!(selection.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_updates_snapshot_without_refetching() {
        let provider = Arc::new(MockProvider::with_assets(&[]));
        let mut selection = Selection::default();
        selection.select(&test_asset("bitcoin"), provider.clone());
        settle().await;

        let mut fresh = test_asset("bitcoin");
        fresh.price_usd = "70000".to_string();
        selection.sync_snapshot(&[test_asset("ethereum"), fresh]);

        let selected = selection.current().unwrap();
        assert_eq!(selected.asset.price_usd, "70000");
        assert!(!selected.history.is_pending());
        assert_eq!(provider.history_requests(), ["bitcoin"]);
    }
}
