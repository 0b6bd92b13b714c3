mod provider;

pub use provider::{CoinCapProvider, MarketDataProvider};
