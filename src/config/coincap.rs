/// Endpoint layout of the CoinCap REST API.
pub struct ApiEndpoints {
    pub base_url: &'static str,
    pub assets_path: &'static str,
    pub history_path: &'static str,
    /// Granularity requested for the detail chart.
    pub history_interval: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct RefreshConfig {
    /// Time between the starts of two list refreshes.
    pub interval_secs: u64,
}

pub struct CoinCapConfig {
    pub api: ApiEndpoints,
    pub client: ClientDefaults,
    pub refresh: RefreshConfig,
}

pub const COINCAP: CoinCapConfig = CoinCapConfig {
    api: ApiEndpoints {
        base_url: "https://api.coincap.io/v2",
        assets_path: "assets",
        history_path: "history",
        history_interval: "h1",
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
    },
    refresh: RefreshConfig { interval_secs: 30 },
};
