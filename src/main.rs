use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use ticker_dashboard::config::{ANALYSIS, MARKET};
use ticker_dashboard::data::export_to_path;
use ticker_dashboard::ui::{render_dashboard, render_presets};
use ticker_dashboard::{Cli, DashboardEngine, DashboardView, build_engine};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    if args.list_ranges {
        print!("{}", render_presets());
        return Ok(());
    }

    // C. Single-threaded runtime; the engine owns the only state (its cache)
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let mut engine = build_engine(&args);
    rt.block_on(run(&mut engine, &args))
}

async fn run(engine: &mut DashboardEngine, args: &Cli) -> Result<()> {
    let period = Duration::from_secs(ANALYSIS.refresh_interval_secs.unsigned_abs());
    loop {
        let view = engine.refresh(args.range).await;
        output(&view, args)?;

        if !args.watch {
            return Ok(());
        }
        tokio::time::sleep(period).await;
    }
}

fn output(view: &DashboardView, args: &Cli) -> Result<()> {
    if !view.has_data() {
        log::warn!("No price data found under {:?}", args.data_dir);
    }

    if args.json {
        let json = serde_json::to_string_pretty(view).context("Failed to serialize dashboard view")?;
        println!("{}", json);
    } else {
        print!("{}", render_dashboard(view, MARKET.time_zone));
    }

    if let Some(path) = &args.export {
        export_to_path(&view.series, MARKET.time_zone, path)?;
        log::info!("✅ Exported {} points to {:?}", view.series.len(), path);
    }
    Ok(())
}
