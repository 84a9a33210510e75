//! # Material Quantity Estimate
//!
//! Turns structure dimensions and a material selection into quantities and
//! costs:
//!
//! ```text
//! volume   = length * breadth * height
//! quantity = ceil(volume * factor[material])     (0 for unknown materials)
//! cost     = quantity * rate[material]
//! total    = sum(cost)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::estimate::{calculate, EstimateInput};
//! use estimate_core::calculations::dimensions::Dimensions;
//!
//! let input = EstimateInput::new(Dimensions::new(20.0, 15.0, 3.0), ["Cement"]);
//! let estimate = calculate(&input).unwrap();
//!
//! let cement = &estimate.lines[0];
//! assert_eq!(cement.quantity, 1197);
//! assert_eq!(cement.cost, 538650.0);
//! assert_eq!(estimate.total_cost, 538650.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::dimensions::Dimensions;
use crate::errors::{EstimateError, EstimateResult};
use crate::materials::{Material, MaterialSpec, UNKNOWN_UNIT};
use crate::units::Amount;

/// Input parameters for an estimate.
///
/// Materials are given by name so that callers (forms, CLI flags, JSON)
/// can pass whatever the user picked; names outside the catalog yield a
/// zero-quantity line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    pub dimensions: Dimensions,
    pub materials: Vec<String>,
}

impl EstimateInput {
    pub fn new<I, S>(dimensions: Dimensions, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EstimateInput {
            dimensions,
            materials: materials.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an input from typed catalog materials.
    pub fn from_materials(dimensions: Dimensions, materials: &[Material]) -> Self {
        Self::new(dimensions, materials.iter().map(|m| m.display_name()))
    }

    /// Validate inputs. An estimate is only produced for valid input.
    pub fn validate(&self) -> EstimateResult<()> {
        self.dimensions.validate()?;
        if self.materials.iter().all(|m| m.trim().is_empty()) {
            return Err(EstimateError::EmptySelection);
        }
        Ok(())
    }

    /// Selected names, trimmed, blanks dropped, duplicates collapsed to
    /// their first occurrence.
    fn selection(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.materials.len());
        for name in self.materials.iter().map(|m| m.trim()) {
            if !name.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(name)) {
                seen.push(name);
            }
        }
        seen
    }
}

/// One row of an estimate: how much of a material, at what rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub name: String,
    /// Required quantity, rounded up to a whole unit
    pub quantity: u64,
    pub unit: String,
    /// Currency per unit
    pub rate: f64,
    /// `quantity * rate`
    pub cost: f64,
}

impl MaterialLine {
    pub fn new(name: impl Into<String>, quantity: u64, unit: impl Into<String>, rate: f64) -> Self {
        MaterialLine {
            name: name.into(),
            quantity,
            unit: unit.into(),
            rate,
            cost: quantity as f64 * rate,
        }
    }

    /// Line for `name` at the given volume, using the catalog rate.
    pub fn for_volume(name: &str, volume_m3: f64) -> Self {
        match MaterialSpec::lookup(name) {
            Some(spec) => {
                let quantity = (volume_m3 * spec.factor).ceil() as u64;
                MaterialLine::new(spec.name(), quantity, spec.unit, spec.rate)
            }
            None => MaterialLine::new(name, 0, UNKNOWN_UNIT, 0.0),
        }
    }

    /// Copy of this line priced at a different rate.
    pub fn with_rate(&self, rate: f64) -> Self {
        MaterialLine::new(self.name.clone(), self.quantity, self.unit.clone(), rate)
    }

    pub fn cost_amount(&self) -> Amount {
        Amount(self.cost)
    }
}

/// Sum of line costs.
pub fn total_cost(lines: &[MaterialLine]) -> f64 {
    lines.iter().map(|l| l.cost).sum()
}

/// Result of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub dimensions: Dimensions,
    /// Gross volume used for every quantity (m³)
    pub volume_m3: f64,
    /// One line per selected material, in selection order
    pub lines: Vec<MaterialLine>,
    /// Sum of all line costs
    pub total_cost: f64,
}

impl Estimate {
    /// Names in the selection that the catalog does not know.
    pub fn unrecognized(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| MaterialSpec::lookup(&l.name).is_none())
            .map(|l| l.name.as_str())
            .collect()
    }

    pub fn total_amount(&self) -> Amount {
        Amount(self.total_cost)
    }
}

/// Compute the estimate.
///
/// # Errors
///
/// Returns an error, and no estimate, when a dimension is missing,
/// non-positive or non-finite, or when no material is selected.
pub fn calculate(input: &EstimateInput) -> EstimateResult<Estimate> {
    input.validate()?;

    let volume_m3 = input.dimensions.volume_m3().value();
    let lines: Vec<MaterialLine> = input
        .selection()
        .into_iter()
        .map(|name| MaterialLine::for_volume(name, volume_m3))
        .collect();
    let total = total_cost(&lines);

    tracing::debug!(
        volume_m3,
        materials = lines.len(),
        total_cost = total,
        "estimate calculated"
    );

    Ok(Estimate {
        dimensions: input.dimensions,
        volume_m3,
        lines,
        total_cost: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house() -> Dimensions {
        Dimensions::new(20.0, 15.0, 3.0)
    }

    #[test]
    fn test_cement_reference_case() {
        let estimate = calculate(&EstimateInput::new(house(), ["Cement"])).unwrap();
        assert_eq!(estimate.volume_m3, 900.0);
        assert_eq!(estimate.lines.len(), 1);

        let cement = &estimate.lines[0];
        assert_eq!(cement.name, "Cement");
        assert_eq!(cement.quantity, 1197);
        assert_eq!(cement.unit, "bags");
        assert_eq!(cement.rate, 450.0);
        assert_eq!(cement.cost, 538650.0);
        assert_eq!(estimate.total_cost, 538650.0);
    }

    #[test]
    fn test_all_materials_at_900_m3() {
        let input = EstimateInput::from_materials(house(), &Material::ALL);
        let estimate = calculate(&input).unwrap();

        let quantities: Vec<(&str, u64)> = estimate
            .lines
            .iter()
            .map(|l| (l.name.as_str(), l.quantity))
            .collect();
        assert_eq!(
            quantities,
            vec![
                ("Cement", 1197),
                ("Sand", 378),
                ("Gravel", 333),
                ("Steel", 45000),
                ("Bricks", 450000),
                ("Paint", 450),
            ]
        );
    }

    #[test]
    fn test_quantities_round_up() {
        // 50 * 0.23 * 2 = 23 m³ -> sand 23 * 0.42 = 9.66 -> 10
        let input = EstimateInput::new(Dimensions::new(50.0, 0.23, 2.0), ["Sand", "Cement"]);
        let estimate = calculate(&input).unwrap();
        assert_eq!(estimate.lines[0].quantity, 10);
        // 23 * 1.33 = 30.59 -> 31
        assert_eq!(estimate.lines[1].quantity, 31);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let input = EstimateInput::new(Dimensions::new(7.3, 4.1, 2.9), ["Cement", "Sand", "Gravel", "Steel"]);
        let estimate = calculate(&input).unwrap();
        let sum: f64 = estimate.lines.iter().map(|l| l.cost).sum();
        assert_eq!(estimate.total_cost, sum);
        for line in &estimate.lines {
            assert_eq!(line.cost, line.quantity as f64 * line.rate);
        }
    }

    #[test]
    fn test_unknown_material_has_zero_quantity() {
        let input = EstimateInput::new(house(), ["Cement", "Timber"]);
        let estimate = calculate(&input).unwrap();
        let timber = &estimate.lines[1];
        assert_eq!(timber.quantity, 0);
        assert_eq!(timber.cost, 0.0);
        assert_eq!(timber.unit, UNKNOWN_UNIT);
        assert_eq!(estimate.total_cost, 538650.0);
        assert_eq!(estimate.unrecognized(), vec!["Timber"]);
    }

    #[test]
    fn test_synonyms_are_not_catalog_names() {
        let estimate = calculate(&EstimateInput::new(house(), ["Brick", "Rebar", "Aggregate"])).unwrap();
        assert_eq!(estimate.lines.len(), 3);
        assert!(estimate.lines.iter().all(|l| l.quantity == 0 && l.cost == 0.0));
        assert_eq!(estimate.total_cost, 0.0);
        assert_eq!(estimate.unrecognized(), vec!["Brick", "Rebar", "Aggregate"]);
    }

    #[test]
    fn test_thickness_does_not_change_quantities() {
        let plain = calculate(&EstimateInput::new(house(), ["Steel"])).unwrap();
        let thick = calculate(&EstimateInput::new(house().with_thickness(0.23), ["Steel"])).unwrap();
        assert_eq!(plain.lines, thick.lines);
    }

    #[test]
    fn test_empty_selection_blocks() {
        let err = calculate(&EstimateInput::new(house(), Vec::<String>::new())).unwrap_err();
        assert_eq!(err, EstimateError::EmptySelection);

        let err = calculate(&EstimateInput::new(house(), ["  "])).unwrap_err();
        assert_eq!(err, EstimateError::EmptySelection);
    }

    #[test]
    fn test_invalid_dimension_blocks() {
        let input = EstimateInput::new(Dimensions::new(20.0, 0.0, 3.0), ["Cement"]);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_duplicates_collapsed() {
        let input = EstimateInput::new(house(), ["Sand", "sand", "Gravel", "Sand"]);
        let estimate = calculate(&input).unwrap();
        let names: Vec<&str> = estimate.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Sand", "Gravel"]);
    }

    #[test]
    fn test_estimate_json_shape() {
        let estimate = calculate(&EstimateInput::new(house(), ["Cement"])).unwrap();
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["lines"][0]["quantity"], 1197);
        assert_eq!(json["total_cost"], 538650.0);
    }
}
