//! Plain-text panels for the terminal dashboard.
//!
//! Each panel writes a heading and its lines into one `String`. Missing data
//! always renders as an explicit message rather than an empty section.

use std::fmt::Write;

use chrono_tz::Tz;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::domain::RangePreset;
use crate::engine::DashboardView;
use crate::utils::time_utils::format_market_time;

use super::config::{UI_CONFIG, UI_TEXT};
use super::utils::{format_price, section_heading, separator};

fn title(out: &mut String, view: &DashboardView, tz: Tz) {
    let _ = writeln!(out, "{}", separator());
    let _ = writeln!(out, "{} {}", view.ticker, UI_TEXT.title_suffix);
    let _ = writeln!(out, "Generated {}", format_market_time(view.generated_at, tz));
    let _ = writeln!(out, "{}", separator());
}

fn daily_panel(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "{}", section_heading(UI_TEXT.daily_heading));
    let _ = writeln!(out, "{}", view.daily);
}

fn realtime_panel(out: &mut String, view: &DashboardView, tz: Tz) {
    let _ = writeln!(out, "{}", section_heading(UI_TEXT.realtime_heading));
    match &view.latest {
        Some(latest) => {
            let _ = writeln!(
                out,
                "{} real-time price: {} as of {}",
                view.ticker,
                latest,
                format_market_time(latest.timestamp, tz)
            );
        }
        None => {
            let _ = writeln!(out, "{}", UI_TEXT.no_price);
        }
    }
}

fn range_panel(out: &mut String, view: &DashboardView) {
    let _ = writeln!(
        out,
        "{}",
        section_heading(&format!("{} ({}, {} points)", UI_TEXT.range_heading, view.range, view.series.len()))
    );
    match &view.range_report {
        Some(report) => {
            let _ = writeln!(out, "{}", report);
        }
        None => {
            let _ = writeln!(out, "{}", UI_TEXT.no_range_data);
        }
    }
}

fn sma_panel(out: &mut String, view: &DashboardView, tz: Tz) {
    let _ = writeln!(
        out,
        "{}",
        section_heading(&format!("{} ({} points)", UI_TEXT.sma_heading, view.sma_window))
    );
    if view.series.is_empty() {
        let _ = writeln!(out, "{}", UI_TEXT.no_range_data);
        return;
    }

    let skip = view.series.len().saturating_sub(UI_CONFIG.recent_rows);
    let _ = writeln!(out, "{}", UI_TEXT.recent_heading);
    for (point, sma) in view.series.iter().zip(&view.sma).skip(skip) {
        let _ = writeln!(
            out,
            "  {}  {:>12}  SMA {:>12}",
            format_market_time(point.timestamp, tz),
            format_price(point.price),
            format_price(*sma)
        );
    }
}

/// Full dashboard: title, daily report, real-time price, range summary, SMA table.
pub fn render_dashboard(view: &DashboardView, tz: Tz) -> String {
    let mut out = String::new();
    title(&mut out, view, tz);
    daily_panel(&mut out, view);
    realtime_panel(&mut out, view, tz);
    range_panel(&mut out, view);
    sma_panel(&mut out, view, tz);
    out
}

/// One line per preset: `ytd  Year to date`.
pub fn render_presets() -> String {
    let lines = RangePreset::iter()
        .map(|preset| format!("  {:<6} {}", preset.range().to_string(), preset.label()))
        .join("\n");
    format!("{}\n{}\n", UI_TEXT.presets_heading, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricePoint, TimeRange};
    use crate::models::{DailyOutcome, LatestPrice, PriceSeries};
    use chrono::{TimeZone, Utc};
    use chrono_tz::Europe::Paris;

    fn empty_view() -> DashboardView {
        DashboardView {
            ticker: "ANET".to_string(),
            generated_at: Utc.with_ymd_and_hms(2025, 4, 4, 18, 30, 0).unwrap(),
            range: TimeRange::YearToDate,
            series: PriceSeries::default(),
            sma: Vec::new(),
            sma_window: 20,
            range_report: None,
            latest: None,
            daily: DailyOutcome::NoData,
        }
    }

    #[test]
    fn empty_view_shows_messages() {
        let text = render_dashboard(&empty_view(), Paris);
        assert!(text.contains("ANET Stock Price Dashboard"));
        assert!(text.contains(UI_TEXT.no_price));
        assert!(text.contains(UI_TEXT.no_range_data));
        assert!(text.contains("No data available for the daily report."));
    }

    #[test]
    fn shows_latest_price_and_table() {
        let ts = Utc.with_ymd_and_hms(2025, 4, 4, 15, 30, 0).unwrap();
        let mut view = empty_view();
        view.series = PriceSeries::from_points(vec![PricePoint::new(ts, 8.0)]);
        view.sma = vec![8.0];
        view.latest = Some(LatestPrice {
            timestamp: ts,
            price: 8.0,
            change_pct: -33.333,
        });

        let text = render_dashboard(&view, Paris);
        assert!(text.contains("ANET real-time price: $8.00 (-33.33%)"));
        assert!(text.contains("SMA        $8.00"));
    }

    #[test]
    fn preset_listing() {
        let text = render_presets();
        assert!(text.contains("ytd"));
        assert!(text.contains("Last hour"));
        assert_eq!(text.lines().count(), 1 + RangePreset::iter().count());
    }
}
