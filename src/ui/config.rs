/// Fixed strings shown by the text dashboard
#[derive(Clone, Copy)]
pub struct UiText {
    pub title_suffix: &'static str,
    pub daily_heading: &'static str,
    pub realtime_heading: &'static str,
    pub range_heading: &'static str,
    pub sma_heading: &'static str,
    pub recent_heading: &'static str,
    pub no_price: &'static str,
    pub no_range_data: &'static str,
    pub presets_heading: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    title_suffix: "Stock Price Dashboard",
    daily_heading: "Daily report",
    realtime_heading: "Real-time price",
    range_heading: "Range summary",
    sma_heading: "Moving average",
    recent_heading: "Latest points",
    no_price: "No price data available.",
    no_range_data: "No data in the selected range.",
    presets_heading: "Available ranges",
};

#[derive(Clone, Copy)]
pub struct UiConfig {
    /// Rows in the trailing price table
    pub recent_rows: usize,
    pub rule_width: usize,
}

pub const UI_CONFIG: UiConfig = UiConfig {
    recent_rows: 5,
    rule_width: 60,
};
