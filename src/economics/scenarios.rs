// src/economics/scenarios.rs

use crate::economics::service_level::solve_service_level;
use serde::Serialize;

/// Shortage-cost multipliers evaluated by the default comparison table.
pub const DEFAULT_MULTIPLIERS: [f64; 4] = [1.0, 1.5, 2.0, 3.0];

/// One row of the multiplier comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub multiplier: f64,
    pub service_level: f64,
}

/// Re-solves the service level for each shortage-cost multiplier.
///
/// Rows come back in the order the multipliers were given, no sorting, no
/// deduplication. Each row reuses the solver's division-by-zero guard.
///
/// # Arguments
/// * `unit_margin` - Margin per unit (sale minus purchase).
/// * `holding_cost_cycle` - Y, held fixed across the sweep.
/// * `multipliers` - The multiplier values to evaluate.
pub fn sweep(unit_margin: f64, holding_cost_cycle: f64, multipliers: &[f64]) -> Vec<ScenarioRow> {
    multipliers
        .iter()
        .map(|&multiplier| {
            let shortage_cost = unit_margin * multiplier;
            let result = solve_service_level(shortage_cost, holding_cost_cycle);
            ScenarioRow {
                multiplier,
                service_level: result.service_level,
            }
        })
        .collect()
}
