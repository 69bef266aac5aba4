// src/economics/costs.rs

use crate::model::inputs::{CostInputs, LogisticsInputs};
use serde::Serialize;
use tracing::debug;

const DAYS_PER_YEAR: f64 = 365.0;

/// The two sides of the service-level trade-off, with the daily components
/// the aggregate is built from.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    /// Unit margin, sale minus purchase. May be negative.
    pub unit_margin: f64,
    /// X: what one unit of unmet demand costs (margin x multiplier).
    pub shortage_cost: f64,
    /// Daily warehouse space cost per unit.
    pub space_cost_per_day: f64,
    /// Daily cost of capital tied up in one unit.
    pub capital_cost_per_day: f64,
    /// Space + capital, per unit per day.
    pub holding_cost_per_day: f64,
    /// Y: holding cost of one unit over the full rotation cycle.
    pub holding_cost_cycle: f64,
}

/// Derives the shortage cost X and cycle holding cost Y from the financial
/// and logistics parameters.
///
/// # Formula
/// X = (sale - purchase) x multiplier
/// Y = (pallet_cost/units_per_pallet + purchase x capital_rate / 365) x cycle_days
///
/// A zero `units_per_pallet` makes the space term 0 instead of dividing; a
/// negative margin flows through to a negative X (the solver handles the
/// degenerate service level that results).
pub fn compute_costs(costs: &CostInputs, logistics: &LogisticsInputs) -> CostBreakdown {
    let unit_margin = costs.unit_margin();
    let shortage_cost = unit_margin * costs.shortage_multiplier;

    let space_cost_per_day = if logistics.units_per_pallet > 0 {
        logistics.pallet_cost_per_day / logistics.units_per_pallet as f64
    } else {
        0.0
    };
    let capital_cost_per_day = costs.purchase_price * logistics.capital_rate / DAYS_PER_YEAR;
    let holding_cost_per_day = space_cost_per_day + capital_cost_per_day;
    let holding_cost_cycle = holding_cost_per_day * logistics.cycle_days as f64;

    debug!(
        shortage_cost,
        holding_cost_cycle,
        cycle_days = logistics.cycle_days,
        "cost model evaluated"
    );

    CostBreakdown {
        unit_margin,
        shortage_cost,
        space_cost_per_day,
        capital_cost_per_day,
        holding_cost_per_day,
        holding_cost_cycle,
    }
}
