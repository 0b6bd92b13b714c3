mod core;
mod history;
mod messages;
mod selection;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::core::{AssetBoard, DashboardEngine, FeedStatus};
pub use history::HistoryLoad;
pub use messages::{RefreshOutcome, RepaintSignal};
pub use selection::{SelectedAsset, Selection};
pub use worker::{RefreshSchedule, spawn_refresh_schedule};
