// src/app/state.rs

use crate::engine::FeedStatus;

#[derive(Clone, Default)]
pub(crate) struct LoadingState;

#[derive(Clone)]
pub(crate) struct FailedState;

#[derive(Clone)]
pub(crate) struct RunningState;

/// Which screen the dashboard shows. Derived from the feed status every frame.
pub(crate) enum AppState {
    Loading(LoadingState),
    Failed(FailedState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

impl AppState {
    pub(crate) fn for_status(status: &FeedStatus) -> Self {
        match status {
            FeedStatus::Loading => AppState::Loading(LoadingState),
            FeedStatus::Failed { .. } => AppState::Failed(FailedState),
            FeedStatus::Ready => AppState::Running(RunningState),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            AppState::Loading(_) => "Loading",
            AppState::Failed(_) => "Failed",
            AppState::Running(_) => "Running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_follows_feed_status() {
        assert_eq!(AppState::for_status(&FeedStatus::Loading).name(), "Loading");
        assert_eq!(AppState::for_status(&FeedStatus::Ready).name(), "Running");
        let failed = FeedStatus::Failed {
            cause: "timeout".to_string(),
        };
        assert_eq!(AppState::for_status(&failed).name(), "Failed");
    }
}
