//! The instrument being tracked and the clock it is reported in.

use chrono_tz::Tz;

pub struct MarketConfig {
    pub ticker: &'static str,
    /// All dates, cutoffs and the publish hour are evaluated in this zone
    pub time_zone: Tz,
}

pub const MARKET: MarketConfig = MarketConfig {
    ticker: "ANET",
    time_zone: chrono_tz::Europe::Paris,
};
