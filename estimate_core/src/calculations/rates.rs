//! # Rate Editing
//!
//! A [`RateSheet`] is a working copy of an estimate's material lines whose
//! rates can be changed one at a time. Changing a rate reprices only that
//! line; the total is always the sum over all lines, so edits to different
//! lines commute and repeating an edit changes nothing.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::estimate::MaterialLine;
//! use estimate_core::calculations::rates::RateSheet;
//!
//! let mut sheet = RateSheet::new(vec![
//!     MaterialLine::new("Cement", 120, "bags", 450.0),
//!     MaterialLine::new("Sand", 40, "m³", 800.0),
//! ]);
//! assert_eq!(sheet.total(), 86000.0);
//!
//! sheet.set_rate(0, 500.0).unwrap();
//! assert_eq!(sheet.lines()[0].cost, 60000.0);
//! assert_eq!(sheet.lines()[1].cost, 32000.0);
//! assert_eq!(sheet.total(), 92000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::estimate::{total_cost, MaterialLine};
use crate::errors::{EstimateError, EstimateResult};

/// Editable set of material lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateSheet {
    lines: Vec<MaterialLine>,
}

impl RateSheet {
    pub fn new(lines: Vec<MaterialLine>) -> Self {
        RateSheet { lines }
    }

    pub fn lines(&self) -> &[MaterialLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<MaterialLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line's cost.
    pub fn total(&self) -> f64 {
        total_cost(&self.lines)
    }

    /// Set the rate of line `index` and reprice that line.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a missing line, `InvalidInput` for a negative
    /// or non-finite rate. The sheet is unchanged on error.
    pub fn set_rate(&mut self, index: usize, rate: f64) -> EstimateResult<()> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(EstimateError::IndexOutOfRange { index, len })?;

        if !rate.is_finite() || rate < 0.0 {
            return Err(EstimateError::invalid_input(
                format!("rate[{}]", line.name),
                rate.to_string(),
                "Rate must be a non-negative number",
            ));
        }

        *line = line.with_rate(rate);
        tracing::debug!(index, material = %line.name, rate, cost = line.cost, "rate updated");
        Ok(())
    }

    /// Set a rate from text typed into a rate field.
    ///
    /// Text that is not a number counts as a rate of zero, the same way a
    /// cleared field does.
    pub fn set_rate_text(&mut self, index: usize, raw: &str) -> EstimateResult<()> {
        self.set_rate(index, parse_rate(raw))
    }
}

/// Parse typed rate text; anything unparseable is zero.
pub fn parse_rate(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> RateSheet {
        RateSheet::new(vec![
            MaterialLine::new("Cement", 120, "bags", 450.0),
            MaterialLine::new("Sand", 40, "m³", 800.0),
            MaterialLine::new("Gravel", 35, "m³", 900.0),
            MaterialLine::new("Steel", 1500, "kg", 65.0),
        ])
    }

    #[test]
    fn test_initial_total() {
        assert_eq!(sheet().total(), 54000.0 + 32000.0 + 31500.0 + 97500.0);
    }

    #[test]
    fn test_edit_only_touches_one_line() {
        let before = sheet();
        let mut after = before.clone();
        after.set_rate(3, 70.0).unwrap();

        assert_eq!(after.lines()[3].cost, 105000.0);
        for i in 0..3 {
            assert_eq!(after.lines()[i], before.lines()[i]);
        }
        assert_eq!(after.total(), before.total() - 97500.0 + 105000.0);
    }

    #[test]
    fn test_edits_are_idempotent() {
        let mut once = sheet();
        once.set_rate(1, 950.0).unwrap();
        let mut twice = once.clone();
        twice.set_rate(1, 950.0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_edits_commute() {
        let mut a = sheet();
        a.set_rate(0, 500.0).unwrap();
        a.set_rate(2, 1000.0).unwrap();

        let mut b = sheet();
        b.set_rate(2, 1000.0).unwrap();
        b.set_rate(0, 500.0).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn test_text_rates() {
        let mut s = sheet();
        s.set_rate_text(0, "12.5").unwrap();
        assert_eq!(s.lines()[0].cost, 1500.0);

        s.set_rate_text(0, "").unwrap();
        assert_eq!(s.lines()[0].rate, 0.0);
        assert_eq!(s.lines()[0].cost, 0.0);

        s.set_rate_text(1, "abc").unwrap();
        assert_eq!(s.lines()[1].rate, 0.0);
    }

    #[test]
    fn test_rejects_bad_edits() {
        let mut s = sheet();
        let original = s.clone();

        assert_eq!(
            s.set_rate(9, 1.0),
            Err(EstimateError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert!(s.set_rate(0, -5.0).is_err());
        assert!(s.set_rate(0, f64::INFINITY).is_err());
        assert_eq!(s, original);
    }
}
