use serde::{Deserialize, Serialize};

use crate::domain::asset::{null_as_empty, parse_decimal};

/// One hourly sample of an asset's price. Samples arrive oldest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHistoryPoint {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_usd: String,
    /// Epoch milliseconds.
    pub time: i64,
    #[serde(default)]
    pub date: Option<String>,
}

impl AssetHistoryPoint {
    pub fn price(&self) -> Option<f64> {
        parse_decimal(&self.price_usd)
    }

    /// `[time, price]` pair for plotting, skipped when the price is unreadable.
    pub fn plot_point(&self) -> Option<[f64; 2]> {
        self.price().map(|p| [self.time as f64, p])
    }
}
