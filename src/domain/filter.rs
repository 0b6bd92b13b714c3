use strum_macros::{Display, EnumIter};

use crate::config::{FILTERS, ThresholdOption};
use crate::domain::{Asset, parse_decimal};

/// The four user-editable filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum FilterField {
    #[strum(to_string = "Search")]
    SearchTerm,
    #[strum(to_string = "Market Cap (USD)")]
    MarketCap,
    #[strum(to_string = "24h Volume (USD)")]
    Volume,
    #[strum(to_string = "24h Change (%)")]
    Change,
}

impl FilterField {
    /// Dropdown choices for threshold fields. Search is free text and has none.
    pub fn options(&self) -> &'static [ThresholdOption] {
        match self {
            Self::SearchTerm => &[],
            Self::MarketCap => FILTERS.market_cap.options,
            Self::Volume => FILTERS.volume.options,
            Self::Change => FILTERS.change.options,
        }
    }

    pub fn is_threshold(&self) -> bool {
        !matches!(self, Self::SearchTerm)
    }
}

/// Search term plus three numeric thresholds, stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub market_cap_filter: String,
    pub volume_filter: String,
    pub change_filter: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            market_cap_filter: FILTERS.market_cap.default.to_string(),
            volume_filter: FILTERS.volume.default.to_string(),
            change_filter: FILTERS.change.default.to_string(),
        }
    }
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::SearchTerm => &self.search_term,
            FilterField::MarketCap => &self.market_cap_filter,
            FilterField::Volume => &self.volume_filter,
            FilterField::Change => &self.change_filter,
        }
    }

    /// Stores the raw value. Nothing is parsed until filtering.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::SearchTerm => &mut self.search_term,
            FilterField::MarketCap => &mut self.market_cap_filter,
            FilterField::Volume => &mut self.volume_filter,
            FilterField::Change => &mut self.change_filter,
        };
        *slot = value.into();
    }

    /// Label of the dropdown entry matching the current threshold, or the raw value.
    pub fn threshold_label(&self, field: FilterField) -> &str {
        let raw = self.get(field);
        field
            .options()
            .iter()
            .find(|o| o.value == raw)
            .map(|o| o.label)
            .unwrap_or(raw)
    }

    /// An asset passes when the search term hits its name or symbol AND every
    /// numeric field strictly exceeds its threshold.
    pub fn matches(&self, asset: &Asset) -> bool {
        self.matches_search(asset)
            && exceeds_threshold(&asset.market_cap_usd, &self.market_cap_filter)
            && exceeds_threshold(&asset.volume_usd_24h, &self.volume_filter)
            && exceeds_threshold(&asset.change_percent_24h, &self.change_filter)
    }

    fn matches_search(&self, asset: &Asset) -> bool {
        let term = self.search_term.to_lowercase();
        asset.name.to_lowercase().contains(&term) || asset.symbol.to_lowercase().contains(&term)
    }

    /// Filtered view of `assets`, in their original order.
    pub fn apply<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        assets.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Strict `value > threshold`. An unreadable value or threshold never passes.
pub fn exceeds_threshold(value: &str, threshold: &str) -> bool {
    match (parse_decimal(value), parse_decimal(threshold)) {
        (Some(v), Some(t)) => v > t,
        _ => false,
    }
}
