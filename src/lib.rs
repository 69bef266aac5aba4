//! Economic service-level and safety-stock calculator.
//!
//! Balances the cost of a stockout (lost margin X) against the cost of
//! holding a unit through a rotation cycle (Y) to find the optimal service
//! level SL* = X / (X + Y), then translates a target service level into a
//! concrete safety-stock quantity and reorder point via the standard-normal
//! quantile. All computation is pure: every function is a total mapping from
//! an input record to an output record, with no shared or persisted state.
//!
//! The crate also prepares the numeric series (density curve, covered-mass
//! fill, stock-structure bars) a presentation layer needs to chart the
//! result, and can export them as CSV.

pub mod chart;
pub mod economics;
pub mod error;
pub mod io;
pub mod model;
pub mod operations;
pub mod stats;

pub use economics::costs::{compute_costs, CostBreakdown};
pub use economics::scenarios::{sweep, ScenarioRow, DEFAULT_MULTIPLIERS};
pub use economics::service_level::{solve_service_level, ServiceLevelResult, StockingStrategy};
pub use error::ModelError;
pub use model::inputs::{CostInputs, LogisticsInputs, SafetyStockInputs};
pub use operations::safety_stock::{
    compute_safety_stock, seed_target_service_level, SafetyStockResult,
};
