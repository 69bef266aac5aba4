// src/operations/safety_stock.rs

use crate::model::inputs::SafetyStockInputs;
use crate::stats::normal;
use serde::Serialize;
use tracing::debug;

/// Empirical factor converting a WMAPE forecast error into an approximate
/// demand standard deviation. Fixed; do not tune.
const WMAPE_TO_SIGMA: f64 = 1.25;

/// Bounds for the interactive service-level target. The formula itself
/// accepts any value in (0,1); the clamp only keeps the seeded default in a
/// range a dashboard slider can hold.
const TARGET_SL_MIN: f64 = 0.50;
const TARGET_SL_MAX: f64 = 0.999;

/// Everything the operational side needs to buy the chosen service level.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyStockResult {
    /// Z for the operational target, shared fallback convention.
    pub z_score: f64,
    /// Daily demand standard deviation (1.25 x WMAPE x demand).
    pub sigma_daily: f64,
    /// Lead time + review period.
    pub risk_period_days: u32,
    /// Safety stock at full fractional precision.
    pub safety_stock: f64,
    /// Safety stock rounded up to whole units for display and ordering.
    pub safety_stock_units: i64,
    /// Expected consumption over the risk period.
    pub cycle_stock: f64,
    /// Reorder point: ceil(SS) + cycle stock, truncated to whole units.
    pub reorder_point: i64,
}

/// Computes the safety stock needed to hit a target service level over the
/// risk period.
///
/// # Formula
/// sigma_D = 1.25 x WMAPE x avg_daily_demand
/// SS = Z x sigma_D x sqrt(L + T)
/// ROP = ceil(SS) + avg_daily_demand x (L + T)
///
/// The risk period is a sum of two day counts and cannot go negative, so the
/// square root is always defined. ROP operation order matters and is fixed:
/// SS is ceiled first, added to the unrounded cycle stock,
/// and the sum truncated.
pub fn compute_safety_stock(inputs: &SafetyStockInputs) -> SafetyStockResult {
    let z_score = normal::z_score(inputs.target_service_level);
    let sigma_daily = WMAPE_TO_SIGMA * inputs.wmape * inputs.avg_daily_demand;
    let risk_period_days = inputs.lead_time_days + inputs.review_period_days;

    let safety_stock = z_score * sigma_daily * (risk_period_days as f64).sqrt();
    let safety_stock_units = safety_stock.ceil() as i64;
    let cycle_stock = inputs.avg_daily_demand * risk_period_days as f64;
    let reorder_point = (safety_stock.ceil() + cycle_stock) as i64;

    debug!(
        z_score,
        sigma_daily,
        risk_period_days,
        safety_stock,
        reorder_point,
        "safety stock computed"
    );

    SafetyStockResult {
        z_score,
        sigma_daily,
        risk_period_days,
        safety_stock,
        safety_stock_units,
        cycle_stock,
        reorder_point,
    }
}

/// Derives the default operational target from the economically optimal
/// service level.
///
/// The optimal SL is rounded to 0.01% precision and clamped into
/// [0.50, 0.999]: values below snap to 50%, values above to 99.9%. This is
/// the same rule an interactive target input uses for its pre-filled value.
pub fn seed_target_service_level(optimal_sl: f64) -> f64 {
    let rounded = (optimal_sl * 10_000.0).round() / 10_000.0;
    rounded.clamp(TARGET_SL_MIN, TARGET_SL_MAX)
}
