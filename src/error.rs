// src/error.rs

use thiserror::Error;

/// Boundary validation failures for user-supplied inputs.
///
/// Degenerate arithmetic inside the solver (division by zero, quantile of a
/// probability outside (0,1)) is handled by documented fallback values and
/// never surfaces through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("purchase price must be non-negative, got {0}")]
    NegativePurchasePrice(f64),

    #[error("sale price must be non-negative, got {0}")]
    NegativeSalePrice(f64),

    #[error("pallet cost per day must be non-negative, got {0}")]
    NegativePalletCost(f64),

    #[error("average daily demand must be non-negative, got {0}")]
    NegativeDemand(f64),

    #[error("WMAPE forecast error must be non-negative, got {0}")]
    NegativeForecastError(f64),
}
