//! # Estimate Calculations
//!
//! Everything numeric in BuildCost lives here. Each piece follows the same
//! pattern: plain JSON-serializable input types, and pure functions that
//! return `EstimateResult<_>`.
//!
//! - [`dimensions`] - Structure dimensions and form parsing
//! - [`estimate`] - Quantity and cost per selected material
//! - [`rates`] - Editing a line's rate and recomputing totals
//! - [`breakdown`] - Cost share per material for charts

pub mod breakdown;
pub mod dimensions;
pub mod estimate;
pub mod rates;

// Re-export commonly used types
pub use breakdown::{cost_shares, CostShare};
pub use dimensions::{Dimensions, DimensionsForm};
pub use estimate::{calculate, Estimate, EstimateInput, MaterialLine};
pub use rates::RateSheet;
