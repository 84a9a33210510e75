//! # Materials Catalog
//!
//! The fixed reference table of construction materials: default rate,
//! unit label and the factor that converts structure volume into a
//! material quantity.
//!
//! | Material | Rate | Unit   | Factor |
//! |----------|------|--------|--------|
//! | Cement   | 450  | bags   | 1.33   |
//! | Sand     | 800  | m³     | 0.42   |
//! | Gravel   | 900  | m³     | 0.37   |
//! | Steel    | 65   | kg     | 50     |
//! | Bricks   | 8    | nos    | 500    |
//! | Paint    | 250  | liters | 0.5    |
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::materials::{Material, MaterialSpec};
//!
//! let cement = Material::Cement.spec();
//! assert_eq!(cement.rate, 450.0);
//! assert_eq!(cement.unit, "bags");
//!
//! let parsed = Material::from_str_flexible("  sand ").unwrap();
//! assert_eq!(parsed, Material::Sand);
//!
//! // Unknown names have no spec
//! assert!(MaterialSpec::lookup("Timber").is_none());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Unit label used for lines whose material is not in the catalog
pub const UNKNOWN_UNIT: &str = "units";

/// Materials the estimator knows how to quantify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Cement,
    Sand,
    Gravel,
    Steel,
    Bricks,
    Paint,
}

impl Material {
    /// All materials, in the order they are offered for selection
    pub const ALL: [Material; 6] = [
        Material::Cement,
        Material::Sand,
        Material::Gravel,
        Material::Steel,
        Material::Bricks,
        Material::Paint,
    ];

    /// Materials preselected on a fresh estimate form
    pub const DEFAULT_SELECTION: [Material; 3] = [Material::Cement, Material::Sand, Material::Gravel];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Cement => "Cement",
            Material::Sand => "Sand",
            Material::Gravel => "Gravel",
            Material::Steel => "Steel",
            Material::Bricks => "Bricks",
            Material::Paint => "Paint",
        }
    }

    /// Parse a catalog name, ignoring case and surrounding whitespace.
    /// Synonyms ("brick", "rebar") are not catalog names.
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cement" => Some(Material::Cement),
            "sand" => Some(Material::Sand),
            "gravel" => Some(Material::Gravel),
            "steel" => Some(Material::Steel),
            "bricks" => Some(Material::Bricks),
            "paint" => Some(Material::Paint),
            _ => None,
        }
    }

    /// Reference table entry for this material
    pub fn spec(&self) -> MaterialSpec {
        match self {
            Material::Cement => MaterialSpec::new(*self, 450.0, "bags", 1.33),
            Material::Sand => MaterialSpec::new(*self, 800.0, "m³", 0.42),
            Material::Gravel => MaterialSpec::new(*self, 900.0, "m³", 0.37),
            Material::Steel => MaterialSpec::new(*self, 65.0, "kg", 50.0),
            Material::Bricks => MaterialSpec::new(*self, 8.0, "nos", 500.0),
            Material::Paint => MaterialSpec::new(*self, 250.0, "liters", 0.5),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// Static reference data for one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialSpec {
    pub material: Material,
    /// Default rate in currency per unit
    pub rate: f64,
    /// Unit label (bags, m³, kg, ...)
    pub unit: &'static str,
    /// Quantity per cubic meter of structure volume
    pub factor: f64,
}

static CATALOG_BY_NAME: Lazy<HashMap<&'static str, MaterialSpec>> = Lazy::new(|| {
    Material::ALL
        .iter()
        .map(|m| (m.display_name(), m.spec()))
        .collect()
});

impl MaterialSpec {
    const fn new(material: Material, rate: f64, unit: &'static str, factor: f64) -> Self {
        MaterialSpec {
            material,
            rate,
            unit,
            factor,
        }
    }

    /// Look up a spec by exact catalog name (e.g. "Cement").
    ///
    /// Falls back to a case-insensitive match on the same names.
    pub fn lookup(name: &str) -> Option<MaterialSpec> {
        CATALOG_BY_NAME
            .get(name)
            .copied()
            .or_else(|| Material::from_str_flexible(name).map(|m| m.spec()))
    }

    /// Display name of the material
    pub fn name(&self) -> &'static str {
        self.material.display_name()
    }

    /// The whole catalog in selection order
    pub fn catalog() -> Vec<MaterialSpec> {
        Material::ALL.iter().map(|m| m.spec()).collect()
    }
}
