use crate::domain::Asset;

/// The result of one refresh tick, sent from the fetch task to the UI thread.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// 1 for the immediate fetch at start, then one more per interval.
    pub tick: u64,
    pub result: Result<Vec<Asset>, String>,
}

/// Called after an outcome is queued so the UI wakes up to drain it.
pub type RepaintSignal = std::sync::Arc<dyn Fn() + Send + Sync>;
