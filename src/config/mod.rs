//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod coincap;
mod debug;
mod filters;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use coincap::{COINCAP, CoinCapConfig};
pub use debug::DF;
pub use filters::{FILTERS, FilterConfig, ThresholdOption, ThresholdSet};
pub use plot::PLOT_CONFIG;
