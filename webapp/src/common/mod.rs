pub mod scroll;
pub mod storage;
pub mod style;
pub mod theme;

use chrono::Local;

pub fn current_year() -> String {
    Local::now().format("%Y").to_string()
}
