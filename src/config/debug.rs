//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every list refresh outcome as it is applied (success count, failure cause).
    pub log_refresh: bool,

    /// Log each tick of the refresh schedule as it fires.
    pub log_refresh_ticks: bool,

    /// Anything about handling the selected asset and its history fetch.
    pub log_selection: bool,

    /// Log filter edits and the size of the resulting subset.
    pub log_filters: bool,
}

pub const DF: LogFlags = LogFlags {
    log_refresh: true,
    log_selection: true,

    log_refresh_ticks: false,
    log_filters: false,
};
