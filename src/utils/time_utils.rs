use chrono::{DateTime, Local};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const STANDARD_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

fn epoch_ms_to_local(epoch_ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.with_timezone(&Local))
}

/// Local calendar date for a chart axis label. Out-of-range input gives an empty label.
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    epoch_ms_to_local(epoch_ms)
        .map(|dt| dt.format(TimeUtils::STANDARD_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn epoch_ms_to_datetime_string(epoch_ms: i64) -> String {
    epoch_ms_to_local(epoch_ms)
        .map(|dt| dt.format(TimeUtils::STANDARD_DATE_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn now_local_time_string() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
