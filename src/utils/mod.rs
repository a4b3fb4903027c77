pub mod app_time;
pub mod maths_utils;
pub mod time_utils;

pub use app_time::{Clock, FixedClock, SystemClock};
pub use time_utils::TimeUtils;
