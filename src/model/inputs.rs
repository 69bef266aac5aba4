// src/model/inputs.rs

use crate::error::ModelError;
use serde::Serialize;

/// Financial parameters of a single SKU.
///
/// The margin may be negative (sale below purchase); that is a policy
/// decision left to the caller, not a validation failure. The shortage
/// multiplier expresses how much worse a stockout is than the lost margin
/// alone (1.0 = only the margin is lost, 2.0+ = reputation damage on top).
#[derive(Debug, Clone, Serialize)]
pub struct CostInputs {
    pub purchase_price: f64,
    pub sale_price: f64,
    /// Shortage-cost multiplier, UI range [1.0, 5.0].
    pub shortage_multiplier: f64,
}

impl CostInputs {
    /// Unit margin, sale minus purchase. Not clamped at zero.
    pub fn unit_margin(&self) -> f64 {
        self.sale_price - self.purchase_price
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.purchase_price < 0.0 {
            return Err(ModelError::NegativePurchasePrice(self.purchase_price));
        }
        if self.sale_price < 0.0 {
            return Err(ModelError::NegativeSalePrice(self.sale_price));
        }
        Ok(())
    }
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            purchase_price: 10.0,
            sale_price: 30.0,
            shortage_multiplier: 1.5,
        }
    }
}

/// Storage and capital parameters driving the holding cost.
#[derive(Debug, Clone, Serialize)]
pub struct LogisticsInputs {
    /// Units stored per pallet. Zero is guarded downstream (space term
    /// becomes 0), it never divides.
    pub units_per_pallet: u32,
    pub pallet_cost_per_day: f64,
    /// Annual cost of capital (WACC) as a fraction, e.g. 0.15.
    pub capital_rate: f64,
    /// Average rotation cycle of the stock, in days.
    pub cycle_days: u32,
}

impl LogisticsInputs {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.pallet_cost_per_day < 0.0 {
            return Err(ModelError::NegativePalletCost(self.pallet_cost_per_day));
        }
        Ok(())
    }
}

impl Default for LogisticsInputs {
    fn default() -> Self {
        Self {
            units_per_pallet: 100,
            pallet_cost_per_day: 1.0,
            capital_rate: 0.15,
            cycle_days: 30,
        }
    }
}

/// Operational parameters for the safety-stock calculation.
///
/// Lead time and review period are day counts; the risk period is their sum,
/// so it can never go negative. Demand and WMAPE are validated non-negative
/// at this boundary because the core propagates them into a square root and
/// assumes the ranges hold.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyStockInputs {
    /// Target availability as a fraction. The interactive default is clamped
    /// to [0.50, 0.999]; the formula itself accepts any value in (0,1).
    pub target_service_level: f64,
    /// Days from placing an order to receiving it.
    pub lead_time_days: u32,
    /// Days between consecutive orders.
    pub review_period_days: u32,
    pub avg_daily_demand: f64,
    /// Weighted mean absolute percentage forecast error, as a fraction.
    pub wmape: f64,
}

impl SafetyStockInputs {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.avg_daily_demand < 0.0 {
            return Err(ModelError::NegativeDemand(self.avg_daily_demand));
        }
        if self.wmape < 0.0 {
            return Err(ModelError::NegativeForecastError(self.wmape));
        }
        Ok(())
    }
}

impl Default for SafetyStockInputs {
    fn default() -> Self {
        Self {
            target_service_level: 0.95,
            lead_time_days: 45,
            review_period_days: 7,
            avg_daily_demand: 10.0,
            wmape: 0.40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_reference_scenario() {
        let costs = CostInputs::default();
        assert_eq!(costs.unit_margin(), 20.0);
        let logistics = LogisticsInputs::default();
        assert_eq!(logistics.cycle_days, 30);
    }

    #[test]
    fn negative_demand_is_rejected_at_the_boundary() {
        let inputs = SafetyStockInputs {
            avg_daily_demand: -1.0,
            ..Default::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(ModelError::NegativeDemand(-1.0))
        );
    }

    #[test]
    fn negative_margin_is_not_a_validation_error() {
        let costs = CostInputs {
            purchase_price: 30.0,
            sale_price: 10.0,
            shortage_multiplier: 1.0,
        };
        assert!(costs.validate().is_ok());
        assert_eq!(costs.unit_margin(), -20.0);
    }
}
