//! Threshold choices offered by the filter bar, and the values a fresh dashboard starts with.

/// One dropdown entry: the raw threshold stored in the filter state, and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ThresholdSet {
    pub default: &'static str,
    pub options: &'static [ThresholdOption],
}

pub struct FilterConfig {
    pub market_cap: ThresholdSet,
    pub volume: ThresholdSet,
    pub change: ThresholdSet,
}

const fn opt(value: &'static str, label: &'static str) -> ThresholdOption {
    ThresholdOption { value, label }
}

pub const FILTERS: FilterConfig = FilterConfig {
    market_cap: ThresholdSet {
        default: "100000000",
        options: &[
            opt("100000000", "> $100M"),
            opt("1000000000", "> $1B"),
            opt("10000000000", "> $10B"),
        ],
    },
    volume: ThresholdSet {
        default: "10000000",
        options: &[
            opt("10000000", "> $10M"),
            opt("100000000", "> $100M"),
            opt("1000000000", "> $1B"),
        ],
    },
    change: ThresholdSet {
        default: "10",
        options: &[
            opt("5", "> 5%"),
            opt("10", "> 10%"),
            opt("15", "> 15%"),
            opt("20", "> 20%"),
        ],
    },
};
