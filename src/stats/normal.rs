// src/stats/normal.rs

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// The standard normal distribution N(0, 1).
///
/// Construction cannot fail for these parameters, so the unwrap is safe.
fn standard() -> Normal {
    Normal::new(0.0, 1.0).unwrap()
}

/// Z-score (standard-normal quantile) for a service-level probability.
///
/// Defined only for probabilities strictly inside (0,1). Outside that range
/// the function returns 0, a business convention, NOT the mathematical
/// limit (which would be ±infinity). Callers rely on getting a finite number
/// back for degenerate service levels, so this fallback must stay exactly 0.
pub fn z_score(probability: f64) -> f64 {
    if probability > 0.0 && probability < 1.0 {
        standard().inverse_cdf(probability)
    } else {
        0.0
    }
}

/// Standard-normal probability density at `x`.
pub fn density(x: f64) -> f64 {
    standard().pdf(x)
}

/// Standard-normal cumulative probability at `z`.
pub fn cumulative(z: f64) -> f64 {
    standard().cdf(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn median_maps_to_zero() {
        assert!(z_score(0.5).abs() < EPS);
    }

    #[test]
    fn known_quantiles() {
        // Classic table values.
        assert!((z_score(0.95) - 1.6449).abs() < 1e-3);
        assert!((z_score(0.975) - 1.9600).abs() < 1e-3);
        assert!((z_score(0.05) + 1.6449).abs() < 1e-3);
    }

    #[test]
    fn round_trip_recovers_probability() {
        for p in [0.01, 0.25, 0.5, 0.9, 0.986, 0.999] {
            let z = z_score(p);
            assert!((cumulative(z) - p).abs() < 1e-6, "round trip failed for p={p}");
        }
    }

    #[test]
    fn out_of_range_probabilities_fall_back_to_zero() {
        // Explicit convention: finite 0, never +/- infinity.
        assert_eq!(z_score(0.0), 0.0);
        assert_eq!(z_score(1.0), 0.0);
        assert_eq!(z_score(-0.3), 0.0);
        assert_eq!(z_score(1.7), 0.0);
    }

    #[test]
    fn density_is_symmetric_and_peaks_at_zero() {
        assert!((density(0.0) - 0.3989422804).abs() < 1e-9);
        assert!((density(1.5) - density(-1.5)).abs() < EPS);
    }
}
