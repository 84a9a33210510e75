//! # Structure Dimensions
//!
//! Length, breadth and height of the structure being estimated, in meters,
//! plus an optional wall/slab thickness that is recorded but does not enter
//! the volume formula.
//!
//! [`DimensionsForm`] holds the raw text a user typed and turns it into
//! validated [`Dimensions`].
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::dimensions::DimensionsForm;
//!
//! let form = DimensionsForm {
//!     length: "20".into(),
//!     breadth: "15".into(),
//!     height: "3".into(),
//!     thickness: String::new(),
//! };
//!
//! let dims = form.parse().unwrap();
//! assert_eq!(dims.volume_m3().value(), 900.0);
//! assert_eq!(dims.thickness, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::units::{CubicMeters, Meters};

/// Validated structure dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

impl Dimensions {
    /// Create dimensions without thickness.
    pub fn new(length: f64, breadth: f64, height: f64) -> Self {
        Dimensions {
            length,
            breadth,
            height,
            thickness: None,
        }
    }

    /// Builder-style thickness setter.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Check that every required dimension is a positive, finite number.
    pub fn validate(&self) -> EstimateResult<()> {
        check_positive("length", self.length)?;
        check_positive("breadth", self.breadth)?;
        check_positive("height", self.height)?;
        if let Some(t) = self.thickness {
            check_positive("thickness", t)?;
        }
        Ok(())
    }

    /// Gross volume `length * breadth * height`.
    pub fn volume_m3(&self) -> CubicMeters {
        Meters(self.length) * Meters(self.breadth) * Meters(self.height)
    }
}

fn check_positive(field: &str, value: f64) -> EstimateResult<()> {
    if !value.is_finite() {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Must be greater than zero",
        ));
    }
    Ok(())
}

/// Raw dimension text as entered on the estimate form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionsForm {
    pub length: String,
    pub breadth: String,
    pub height: String,
    /// Optional; blank means "not given"
    pub thickness: String,
}

impl DimensionsForm {
    /// True when every required field has some text in it.
    ///
    /// This is the cheap check used to enable the Estimate action; full
    /// numeric validation happens in [`DimensionsForm::parse`].
    pub fn is_filled(&self) -> bool {
        [&self.length, &self.breadth, &self.height]
            .iter()
            .all(|s| !s.trim().is_empty())
    }

    /// Parse and validate the form.
    ///
    /// Errors name the first offending field in length, breadth, height,
    /// thickness order.
    pub fn parse(&self) -> EstimateResult<Dimensions> {
        let length = parse_required("length", &self.length)?;
        let breadth = parse_required("breadth", &self.breadth)?;
        let height = parse_required("height", &self.height)?;
        let thickness = match self.thickness.trim() {
            "" => None,
            raw => Some(parse_number("thickness", raw)?),
        };

        let dims = Dimensions {
            length,
            breadth,
            height,
            thickness,
        };
        dims.validate()?;
        Ok(dims)
    }
}

fn parse_required(field: &str, raw: &str) -> EstimateResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EstimateError::missing_field(field));
    }
    parse_number(field, raw)
}

fn parse_number(field: &str, raw: &str) -> EstimateResult<f64> {
    raw.parse::<f64>()
        .map_err(|_| EstimateError::invalid_input(field, raw, "Not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(l: &str, b: &str, h: &str, t: &str) -> DimensionsForm {
        DimensionsForm {
            length: l.to_string(),
            breadth: b.to_string(),
            height: h.to_string(),
            thickness: t.to_string(),
        }
    }

    #[test]
    fn test_volume() {
        let dims = Dimensions::new(20.0, 15.0, 3.0);
        assert_eq!(dims.volume_m3().value(), 900.0);
    }

    #[test]
    fn test_parse_with_thickness() {
        let dims = form("50", "0.23", "2", "0.23").parse().unwrap();
        assert_eq!(dims.thickness, Some(0.23));
        assert!((dims.volume_m3().value() - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_field_blocks() {
        let err = form("20", "", "3", "").parse().unwrap_err();
        assert_eq!(err, EstimateError::missing_field("breadth"));
        assert!(!form("20", "  ", "3", "").is_filled());
        assert!(form("20", "15", "3", "").is_filled());
    }

    #[test]
    fn test_non_numeric_blocks() {
        let err = form("20", "15", "three", "").parse().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_non_positive_blocks() {
        assert!(form("0", "15", "3", "").parse().is_err());
        assert!(form("20", "-1", "3", "").parse().is_err());
        assert!(form("20", "15", "3", "0").parse().is_err());
        assert!(Dimensions::new(f64::NAN, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_thickness_omitted_in_json() {
        let json = serde_json::to_string(&Dimensions::new(1.0, 2.0, 3.0)).unwrap();
        assert!(!json.contains("thickness"));
        let with_t = serde_json::to_string(&Dimensions::new(1.0, 2.0, 3.0).with_thickness(0.2)).unwrap();
        assert!(with_t.contains("\"thickness\":0.2"));
    }
}
