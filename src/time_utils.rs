use chrono::prelude::*;

/// Seconds since the Unix epoch, UTC, with sub-second precision.
pub fn get_time_now() -> f64 {
    let time = Utc::now();

    time.timestamp() as f64 + (time.timestamp_subsec_nanos() as f64 / 1_000_000_000.)
}

pub fn seconds_to_hms(total_secs : i64) -> (isize, isize, isize) {
    let hour   : isize = (total_secs / (60 * 60)) as isize;
    let minute : isize = ((total_secs % (60 * 60)) / 60) as isize;
    let second : isize = (total_secs % 60) as isize;

    (hour, minute, second)
}

pub fn format_hms(total_secs : i64) -> String {
    let (hour, minute, second) = seconds_to_hms(total_secs);

    format!("{:02}:{:02}:{:02}", hour, minute, second)
}
