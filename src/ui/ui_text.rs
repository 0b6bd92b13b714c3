use std::sync::LazyLock;

pub const ICON_SEARCH: &str = "🔍";
pub const ICON_CLOSE: &str = "❌";
pub const ICON_TREND_UP: &str = "⬈";
pub const ICON_TREND_DOWN: &str = "⬊";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_WARNING: &str = "⚠";

pub struct UiText {
    pub app_title: String,

    // --- Filter bar ---
    pub search_hint: String,

    // --- Cards & detail stats ---
    pub label_price: String,
    pub label_current_price: String,
    pub label_market_cap: String,
    pub label_volume_24h: String,
    pub label_supply: String,
    pub label_max_supply: String,
    pub label_vwap_24h: String,
    pub icon_trend_up: String,
    pub icon_trend_down: String,
    pub icon_close: String,
    pub hover_close: String,

    // --- Chart ---
    pub chart_series: String,
    pub chart_loading: String,

    // --- Screens ---
    pub ls_loading: String,
    pub error_fetch_failed: String,
    pub label_no_matches: String,

    // --- Status panel ---
    pub sp_showing: String,
    pub sp_updated: String,
    pub sp_refresh_every: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Coin Scope".to_string(),

    search_hint: ICON_SEARCH.to_string() + " Search by name or symbol...",

    label_price: "Price".to_string(),
    label_current_price: "Current Price".to_string(),
    label_market_cap: "Market Cap".to_string(),
    label_volume_24h: "Volume (24h)".to_string(),
    label_supply: "Supply".to_string(),
    label_max_supply: "Max Supply".to_string(),
    label_vwap_24h: "VWAP (24h)".to_string(),
    icon_trend_up: ICON_TREND_UP.to_string(),
    icon_trend_down: ICON_TREND_DOWN.to_string(),
    icon_close: ICON_CLOSE.to_string(),
    hover_close: "Close (Esc)".to_string(),

    chart_series: "Price".to_string(),
    chart_loading: "Loading price history...".to_string(),

    ls_loading: "Loading assets...".to_string(),
    error_fetch_failed: "Failed to fetch data. Please try again later.".to_string(),
    label_no_matches: "No assets match the current filters.".to_string(),

    sp_showing: "Showing".to_string(),
    sp_updated: ICON_REFRESH.to_string() + " Updated",
    sp_refresh_every: "refreshes every".to_string(),
});

pub(crate) fn warning_banner(text: &str) -> String {
    format!("{} {}", ICON_WARNING, text)
}
