// Domain types and value objects
mod asset;
mod asset_history;
mod filter;

pub use asset::{Asset, parse_decimal};
pub use asset_history::AssetHistoryPoint;
pub use filter::{FilterField, FilterState, exceeds_threshold};
