//! # Cost Distribution
//!
//! Per-material share of the total cost, as drawn in the breakdown pie
//! chart and the share bars on the result screen.

use serde::{Deserialize, Serialize};

use crate::calculations::estimate::{total_cost, MaterialLine};
use crate::units::Amount;

/// Chart colors, cycled by line index
pub const CHART_PALETTE: [[u8; 3]; 6] = [
    [0x1E, 0x88, 0xE5],
    [0xFB, 0xC0, 0x2D],
    [0x43, 0xA0, 0x47],
    [0xE5, 0x39, 0x35],
    [0x8E, 0x24, 0xAA],
    [0xFB, 0x8C, 0x00],
];

/// Palette color for the slice at `index`.
pub fn chart_color(index: usize) -> [u8; 3] {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// One material's slice of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostShare {
    pub name: String,
    pub cost: f64,
    /// `cost / total`, in `[0, 1]` for non-negative costs; 0 when total is 0
    pub fraction: f64,
}

impl CostShare {
    /// Share as a whole percentage.
    pub fn percent(&self) -> f64 {
        (self.fraction * 100.0).round()
    }

    pub fn cost_amount(&self) -> Amount {
        Amount(self.cost)
    }

    /// Chart label, e.g. `"Cement 25%"`.
    pub fn label(&self) -> String {
        format!("{} {:.0}%", self.name, self.percent())
    }
}

/// Split the total cost of `lines` into per-line shares, keeping line order.
pub fn cost_shares(lines: &[MaterialLine]) -> Vec<CostShare> {
    let total = total_cost(lines);
    lines
        .iter()
        .map(|line| CostShare {
            name: line.name.clone(),
            cost: line.cost,
            fraction: if total > 0.0 { line.cost / total } else { 0.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_one() {
        let lines = vec![
            MaterialLine::new("Bricks", 5000, "nos", 8.0),
            MaterialLine::new("Cement", 50, "bags", 450.0),
            MaterialLine::new("Sand", 8, "m³", 800.0),
        ];
        let shares = cost_shares(&lines);
        let sum: f64 = shares.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(shares[0].name, "Bricks");
        assert_eq!(shares[0].label(), "Bricks 58%");
    }

    #[test]
    fn test_zero_total() {
        let lines = vec![MaterialLine::new("Timber", 0, "units", 0.0)];
        let shares = cost_shares(&lines);
        assert_eq!(shares[0].fraction, 0.0);
        assert_eq!(shares[0].label(), "Timber 0%");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(chart_color(0), [0x1E, 0x88, 0xE5]);
        assert_eq!(chart_color(6), chart_color(0));
        assert_eq!(chart_color(7), [0xFB, 0xC0, 0x2D]);
    }
}
