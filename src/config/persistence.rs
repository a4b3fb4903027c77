//! Flat-file locations for the scraped price data

/// Directory holding both price files unless overridden on the command line
pub const DEFAULT_DATA_DIR: &str = "data";

/// Daily closes downloaded once. Has a `Date,Price` header row.
pub const HISTORICAL_PRICES_FILENAME: &str = "historical_prices.csv";

/// Rows appended by the scraper every few minutes. No header row.
pub const RECENT_PRICES_FILENAME: &str = "recent_prices.csv";

#[derive(Debug, Clone, Copy)]
pub struct CsvLayout {
    /// The file is written with a header row. Readers drop a first line that
    /// names the columns either way.
    pub has_header: bool,
    /// Column names: written by the export, matched against a file's first line
    pub time_column: &'static str,
    pub price_column: &'static str,
}

pub struct PersistenceConfig {
    pub historical: CsvLayout,
    pub recent: CsvLayout,
    pub export: CsvLayout,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    historical: CsvLayout {
        has_header: true,
        time_column: "Date",
        price_column: "Price",
    },
    recent: CsvLayout {
        has_header: false,
        time_column: "Time",
        price_column: "Price",
    },
    export: CsvLayout {
        has_header: true,
        time_column: "Time",
        price_column: "Price",
    },
};
