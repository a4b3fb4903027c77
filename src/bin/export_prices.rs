use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ticker_dashboard::analysis::filter_time_range;
use ticker_dashboard::config::{DEFAULT_DATA_DIR, MARKET};
use ticker_dashboard::data::{default_sources, export_to_path, load_combined};
use ticker_dashboard::domain::TimeRange;
use ticker_dashboard::utils::app_time;

/// Write the combined historical + recent prices for a range to one CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[arg(long, default_value = "all")]
    range: TimeRange,

    #[arg(long, default_value = "prices_export.csv")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    export_prices(&rt, &args)
}

fn export_prices(rt: &tokio::runtime::Runtime, args: &Args) -> Result<()> {
    let sources = default_sources(&args.data_dir);
    let series = rt.block_on(load_combined(&sources));

    println!("Loaded {} points from {:?}", series.len(), args.data_dir);

    let filtered = filter_time_range(&series, args.range, app_time::now(), MARKET.time_zone);
    export_to_path(&filtered, MARKET.time_zone, &args.out)?;

    println!(
        "✅ Export written to {:?} with {} points ({}).",
        args.out,
        filtered.len(),
        args.range
    );
    Ok(())
}
