// src/economics/service_level.rs

use crate::stats::normal;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Stocking posture implied by the optimal service level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockingStrategy {
    /// Shortage cost dwarfs holding cost: maximize stock.
    Aggressive,
    /// Balanced cost ratio: hold a safe buffer.
    Standard,
    /// Holding is too expensive for the margin: accept stockouts.
    Economical,
}

impl StockingStrategy {
    /// Classifies a service level into a strategy band.
    ///
    /// Boundaries are half-open and belong to the lower band: exactly 0.98
    /// is Standard, exactly 0.90 is Economical.
    pub fn classify(service_level: f64) -> Self {
        if service_level > 0.98 {
            StockingStrategy::Aggressive
        } else if service_level > 0.90 {
            StockingStrategy::Standard
        } else {
            StockingStrategy::Economical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockingStrategy::Aggressive => "aggressive",
            StockingStrategy::Standard => "standard",
            StockingStrategy::Economical => "economical",
        }
    }

    /// One-line recommendation shown next to the classification.
    pub fn guidance(&self) -> &'static str {
        match self {
            StockingStrategy::Aggressive => {
                "Stockouts are far costlier than storage. Maximize stock."
            }
            StockingStrategy::Standard => "Costs are balanced. Hold a safe buffer.",
            StockingStrategy::Economical => {
                "Storage is too expensive for the margin. Accept stockouts."
            }
        }
    }
}

impl fmt::Display for StockingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Economically optimal service level with its derived quantities.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceLevelResult {
    /// SL*, the critical ratio X / (X + Y).
    pub service_level: f64,
    /// Standard-normal quantile of SL*; exactly 0 when SL* leaves (0,1).
    pub z_score: f64,
    pub strategy: StockingStrategy,
}

/// Solves the newsvendor trade-off between shortage cost X and cycle holding
/// cost Y.
///
/// SL = X / (X + Y). When X + Y is exactly zero the service level falls back
/// to 0 instead of signalling an error; the Z-score inherits the shared
/// finite-fallback convention from `stats::normal::z_score`. Both fallbacks
/// are deliberate business rules, not numerical accidents.
pub fn solve_service_level(shortage_cost: f64, holding_cost_cycle: f64) -> ServiceLevelResult {
    let denominator = shortage_cost + holding_cost_cycle;
    let service_level = if denominator != 0.0 {
        shortage_cost / denominator
    } else {
        0.0
    };
    let z_score = normal::z_score(service_level);
    let strategy = StockingStrategy::classify(service_level);

    debug!(service_level, z_score, %strategy, "service level solved");

    ServiceLevelResult {
        service_level,
        z_score,
        strategy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::normal;

    #[test]
    fn reference_scenario_service_level() {
        // X=30, Y=0.42329 -> SL ~ 0.98610, Z ~ 2.20, aggressive band.
        let result = solve_service_level(30.0, 0.42329);
        assert!((result.service_level - 0.98610).abs() < 1e-4);
        assert!((result.z_score - 2.20).abs() < 1e-2);
        assert_eq!(result.strategy, StockingStrategy::Aggressive);
    }

    #[test]
    fn zero_costs_fall_back_to_zero_not_nan() {
        let result = solve_service_level(0.0, 0.0);
        assert_eq!(result.service_level, 0.0);
        assert_eq!(result.z_score, 0.0);
        assert!(!result.service_level.is_nan());
    }

    #[test]
    fn service_level_stays_in_unit_interval_for_valid_costs() {
        for x in [0.0, 0.5, 10.0, 500.0] {
            for y in [0.01, 1.0, 40.0] {
                let sl = solve_service_level(x, y).service_level;
                assert!((0.0..=1.0).contains(&sl), "SL out of range for x={x} y={y}");
            }
        }
    }

    #[test]
    fn z_score_matches_shared_convention() {
        let result = solve_service_level(30.0, 0.42329);
        assert_eq!(result.z_score, normal::z_score(result.service_level));
    }

    #[test]
    fn degenerate_service_level_above_one_gets_finite_zero_z() {
        // Negative holding cost larger in magnitude than X pushes SL > 1.
        let result = solve_service_level(10.0, -5.0);
        assert!(result.service_level > 1.0);
        assert_eq!(result.z_score, 0.0);
    }

    #[test]
    fn classification_boundaries_are_half_open() {
        assert_eq!(
            StockingStrategy::classify(0.98),
            StockingStrategy::Standard
        );
        assert_eq!(
            StockingStrategy::classify(0.980001),
            StockingStrategy::Aggressive
        );
        assert_eq!(
            StockingStrategy::classify(0.90),
            StockingStrategy::Economical
        );
        assert_eq!(
            StockingStrategy::classify(0.900001),
            StockingStrategy::Standard
        );
    }
}
