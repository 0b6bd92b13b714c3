mod format;
mod time_utils;

pub use format::{
    ChangeDirection, MISSING_VALUE, format_change, format_number, format_number_value,
    format_price, format_price_value,
};
pub use time_utils::{
    TimeUtils, epoch_ms_to_date_string, epoch_ms_to_datetime_string, now_local_time_string,
};
