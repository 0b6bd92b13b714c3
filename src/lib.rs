#![allow(clippy::collapsible_if)]

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

pub use app::App;
pub use data::{CoinCapProvider, MarketDataProvider};
pub use domain::{Asset, AssetHistoryPoint, FilterState};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the CoinCap-compatible market API
    #[arg(long, default_value = config::COINCAP.api.base_url)]
    pub api_base_url: String,
}

/// Main application entry point - creates the GUI app and starts polling.
/// Must be called with the tokio runtime entered.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_public_endpoint() {
        let cli = Cli::parse_from(["coin-scope"]);
        assert_eq!(cli.api_base_url, "https://api.coincap.io/v2");

        let cli = Cli::parse_from(["coin-scope", "--api-base-url", "http://localhost:8080/v2"]);
        assert_eq!(cli.api_base_url, "http://localhost:8080/v2");
    }
}
