// src/chart/series.rs

use crate::stats::normal;
use serde::Serialize;

/// Left edge of the plotted standard-deviation axis.
pub const DOMAIN_MIN: f64 = -4.0;
/// Right edge of the plotted standard-deviation axis.
pub const DOMAIN_MAX: f64 = 4.0;
/// Default chart resolution.
pub const DEFAULT_SAMPLES: usize = 1000;

/// One (x, density) sample of the demand-distribution curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub density: f64,
}

/// One bar of the stock-structure chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub units: f64,
}

/// Evenly spaced samples from `start` to `end`, endpoints included.
fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Standard-normal density curve over [-4, 4].
///
/// Pure function of the domain: same sample count, same series, every time.
pub fn density_curve(samples: usize) -> Vec<ChartPoint> {
    linspace(DOMAIN_MIN, DOMAIN_MAX, samples)
        .into_iter()
        .map(|x| ChartPoint {
            x,
            density: normal::density(x),
        })
        .collect()
}

/// Density samples over [-4, z]: the probability mass covered by the chosen
/// service-level cutoff, shaded on the chart.
pub fn fill_region(z_score: f64, samples: usize) -> Vec<ChartPoint> {
    linspace(DOMAIN_MIN, z_score, samples)
        .into_iter()
        .map(|x| ChartPoint {
            x,
            density: normal::density(x),
        })
        .collect()
}

/// The two bars of the stock-structure chart: expected consumption and the
/// buffer held on top of it.
pub fn stock_structure(cycle_stock: f64, safety_stock: f64) -> Vec<ChartBar> {
    vec![
        ChartBar {
            label: "expected demand",
            units: cycle_stock,
        },
        ChartBar {
            label: "safety stock",
            units: safety_stock,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_spans_the_domain_at_requested_resolution() {
        let curve = density_curve(DEFAULT_SAMPLES);
        assert_eq!(curve.len(), DEFAULT_SAMPLES);
        assert!((curve[0].x - DOMAIN_MIN).abs() < 1e-12);
        assert!((curve.last().unwrap().x - DOMAIN_MAX).abs() < 1e-12);
    }

    #[test]
    fn curve_is_symmetric_around_zero() {
        // Odd sample count puts a sample exactly at x = 0.
        let curve = density_curve(801);
        let mid = curve[400];
        assert!(mid.x.abs() < 1e-12);
        assert!((curve[0].density - curve[800].density).abs() < 1e-12);
        assert!(mid.density > curve[0].density);
    }

    #[test]
    fn fill_region_ends_at_the_cutoff() {
        let z = 2.2;
        let fill = fill_region(z, 500);
        assert_eq!(fill.len(), 500);
        assert!((fill.last().unwrap().x - z).abs() < 1e-12);
        assert!((fill[0].x - DOMAIN_MIN).abs() < 1e-12);
    }

    #[test]
    fn fill_region_handles_cutoff_left_of_domain() {
        // A negative Z below -4 produces a descending span rather than
        // an empty one.
        let fill = fill_region(-5.0, 10);
        assert!((fill.last().unwrap().x + 5.0).abs() < 1e-12);
    }

    #[test]
    fn restartable_identical_series() {
        let first = density_curve(100);
        let second = density_curve(100);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.density, b.density);
        }
    }

    #[test]
    fn stock_structure_has_exactly_two_bars() {
        let bars = stock_structure(520.0, 59.3);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "expected demand");
        assert_eq!(bars[0].units, 520.0);
        assert_eq!(bars[1].label, "safety stock");
        assert_eq!(bars[1].units, 59.3);
    }

    #[test]
    fn zero_samples_yields_empty_series() {
        assert!(density_curve(0).is_empty());
        assert_eq!(density_curve(1).len(), 1);
    }
}
