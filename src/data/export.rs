use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use chrono_tz::Tz;

use crate::config::PERSISTENCE;
use crate::models::PriceSeries;

/// Write `series` as `Time,Price` rows, timestamps in RFC 3339 at `tz`'s offset.
pub fn write_csv<W: Write>(series: &PriceSeries, tz: Tz, writer: &mut W) -> Result<()> {
    let layout = &PERSISTENCE.export;
    writeln!(writer, "{},{}", layout.time_column, layout.price_column)?;
    for point in series {
        let local = point.timestamp.with_timezone(&tz);
        writeln!(
            writer,
            "{},{}",
            local.to_rfc3339_opts(SecondsFormat::Secs, false),
            point.price
        )?;
    }
    writer.flush().context("Failed to flush CSV export")
}

pub fn export_to_path(series: &PriceSeries, tz: Tz, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(series, tz, &mut writer)
        .context(format!("Failed to write CSV export to: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Europe::Paris;

    #[test]
    fn header_and_rows() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(Utc.with_ymd_and_hms(2025, 4, 4, 14, 30, 0).unwrap(), 101.25),
            PricePoint::new(Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(), 90.0),
        ]);
        let mut out = Vec::new();
        write_csv(&series, Paris, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Time,Price\n\
             2025-01-02T01:00:00+01:00,90\n\
             2025-04-04T16:30:00+02:00,101.25\n"
        );
    }

    #[test]
    fn empty_series_is_header_only() {
        let mut out = Vec::new();
        write_csv(&PriceSeries::default(), Paris, &mut out).unwrap();
        assert_eq!(out, b"Time,Price\n");
    }

    #[test]
    fn export_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("ticker_dashboard_export_{}", std::process::id()));
        let path = dir.join("nested").join("prices.csv");
        let series = PriceSeries::from_points(vec![PricePoint::new(
            Utc.with_ymd_and_hms(2025, 4, 4, 14, 30, 0).unwrap(),
            101.0,
        )]);
        export_to_path(&series, Paris, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(text.lines().count(), 2);
    }
}
