// src/io/reporting.rs

use crate::chart::series::{ChartBar, ChartPoint};
use crate::economics::scenarios::ScenarioRow;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// One row of the exported demand-distribution series: the full curve with a
/// flag marking the samples covered by the service-level cutoff.
#[derive(Debug, Clone, Copy, Serialize)]
struct DistributionRecord {
    x: f64,
    density: f64,
    covered: bool,
}

/// Writes the multiplier scenario table to a CSV file.
pub fn write_scenario_table(path: &Path, rows: &[ScenarioRow]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    println!("Exported {} scenario rows to '{}'", rows.len(), path.display());
    Ok(())
}

/// Writes the demand-distribution curve to a CSV file, flagging the samples
/// left of the Z cutoff as covered demand.
pub fn write_distribution(
    path: &Path,
    curve: &[ChartPoint],
    z_score: f64,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for point in curve {
        wtr.serialize(DistributionRecord {
            x: point.x,
            density: point.density,
            covered: point.x <= z_score,
        })?;
    }
    wtr.flush()?;
    println!(
        "Exported {} distribution samples to '{}'",
        curve.len(),
        path.display()
    );
    Ok(())
}

/// Writes the stock-structure bars to a CSV file.
pub fn write_stock_structure(path: &Path, bars: &[ChartBar]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for bar in bars {
        wtr.serialize(bar)?;
    }
    wtr.flush()?;
    println!("Exported stock structure to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::series;

    #[test]
    fn scenario_table_round_trips_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario_table.csv");
        let rows = vec![
            ScenarioRow {
                multiplier: 1.0,
                service_level: 0.9793,
            },
            ScenarioRow {
                multiplier: 3.0,
                service_level: 0.9930,
            },
        ];

        write_scenario_table(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("multiplier,service_level"));
        assert_eq!(lines.next(), Some("1.0,0.9793"));
    }

    #[test]
    fn distribution_export_flags_covered_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("distribution.csv");
        let curve = series::density_curve(9);

        write_distribution(&path, &curve, 0.0).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let covered = content.lines().filter(|l| l.ends_with("true")).count();
        // 9 samples over [-4, 4]: five are at or left of zero.
        assert_eq!(covered, 5);
    }
}
