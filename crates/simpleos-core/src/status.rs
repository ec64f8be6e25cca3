//! Status bar text.

use chrono::DateTime;
use chrono::Local;

pub const SYSTEM_NAME: &str = "SimpleOS";
pub const READY_TEXT: &str = "SimpleOS Ready";
pub const STATUS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn status_text(now: DateTime<Local>) -> String {
    format!("{SYSTEM_NAME} | {}", now.format(STATUS_TIME_FORMAT))
}
