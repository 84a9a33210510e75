//! # Project Records
//!
//! A `Project` is a saved estimate: what was built, where, with which
//! dimensions, and the priced material lines.
//!
//! Projects are values. They are created from an estimate and never
//! edited in place; repricing produces a new revision with the same id.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::{calculate, Dimensions, EstimateInput};
//! use estimate_core::project::{Project, ProjectDetails, ProjectType};
//!
//! let estimate = calculate(&EstimateInput::new(
//!     Dimensions::new(20.0, 15.0, 3.0),
//!     ["Cement", "Sand"],
//! ))
//! .unwrap();
//!
//! let details = ProjectDetails::new("", ProjectType::Wall, "");
//! let project = Project::from_estimate(&details, &estimate);
//!
//! assert_eq!(project.name, "Wall Project");
//! assert_eq!(project.location, "Not specified");
//! assert_eq!(project.total_cost, estimate.total_cost);
//! assert_eq!(project.revision, 1);
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::dimensions::Dimensions;
use crate::calculations::estimate::{total_cost, Estimate, MaterialLine};
use crate::calculations::rates::RateSheet;
use crate::units::Amount;

/// Location recorded when the user leaves the field blank
pub const DEFAULT_LOCATION: &str = "Not specified";

/// Kind of structure being estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    Building,
    Road,
    Wall,
    Bridge,
}

impl ProjectType {
    /// All project types for UI selection
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Building,
        ProjectType::Road,
        ProjectType::Wall,
        ProjectType::Bridge,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Building => "Building",
            ProjectType::Road => "Road",
            ProjectType::Wall => "Wall",
            ProjectType::Bridge => "Bridge",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "building" => Some(ProjectType::Building),
            "road" => Some(ProjectType::Road),
            "wall" => Some(ProjectType::Wall),
            "bridge" => Some(ProjectType::Bridge),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// Descriptive fields the user fills in next to the dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Blank means "use `<Type> Project`"
    pub name: String,
    pub project_type: ProjectType,
    /// Blank means "Not specified"
    pub location: String,
}

impl ProjectDetails {
    pub fn new(name: impl Into<String>, project_type: ProjectType, location: impl Into<String>) -> Self {
        ProjectDetails {
            name: name.into(),
            project_type,
            location: location.into(),
        }
    }

    /// Name with the type-based fallback applied.
    pub fn resolved_name(&self) -> String {
        match self.name.trim() {
            "" => format!("{} Project", self.project_type),
            name => name.to_string(),
        }
    }

    /// Location with the fallback applied.
    pub fn resolved_location(&self) -> String {
        match self.location.trim() {
            "" => DEFAULT_LOCATION.to_string(),
            location => location.to_string(),
        }
    }
}

/// A saved estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Creation date (`YYYY-MM-DD` in JSON)
    pub date: NaiveDate,
    /// Sum of `materials[*].cost`
    pub total_cost: f64,
    pub dimensions: Dimensions,
    pub materials: Vec<MaterialLine>,
    pub location: String,
    /// Starts at 1, bumped by each recalculation
    #[serde(default = "first_revision")]
    pub revision: u32,
}

fn first_revision() -> u32 {
    1
}

impl Project {
    /// Create a project from a fresh estimate, dated today (UTC).
    pub fn from_estimate(details: &ProjectDetails, estimate: &Estimate) -> Self {
        Self::from_estimate_on(details, estimate, Utc::now().date_naive())
    }

    /// Create a project from an estimate with an explicit creation date.
    pub fn from_estimate_on(details: &ProjectDetails, estimate: &Estimate, date: NaiveDate) -> Self {
        Project {
            id: Uuid::new_v4(),
            name: details.resolved_name(),
            project_type: details.project_type,
            date,
            total_cost: estimate.total_cost,
            dimensions: estimate.dimensions,
            materials: estimate.lines.clone(),
            location: details.resolved_location(),
            revision: first_revision(),
        }
    }

    /// Rebuild a project from stored parts. The total is recomputed from
    /// the lines so it can never drift from them.
    pub fn from_parts(
        name: impl Into<String>,
        project_type: ProjectType,
        date: NaiveDate,
        dimensions: Dimensions,
        materials: Vec<MaterialLine>,
        location: impl Into<String>,
    ) -> Self {
        Project {
            id: Uuid::new_v4(),
            name: name.into(),
            project_type,
            date,
            total_cost: total_cost(&materials),
            dimensions,
            materials,
            location: location.into(),
            revision: first_revision(),
        }
    }

    /// Start a rate-editing session on this project's lines.
    pub fn rate_sheet(&self) -> RateSheet {
        RateSheet::new(self.materials.clone())
    }

    /// New revision of this project priced with the edited sheet.
    ///
    /// Identity, name, date and dimensions carry over; lines and total
    /// come from the sheet.
    pub fn recalculated(&self, sheet: RateSheet) -> Project {
        let total = sheet.total();
        tracing::info!(
            project = %self.id,
            revision = self.revision + 1,
            total_cost = total,
            "project recalculated"
        );
        Project {
            total_cost: total,
            materials: sheet.into_lines(),
            revision: self.revision + 1,
            ..self.clone()
        }
    }

    pub fn total_amount(&self) -> Amount {
        Amount(self.total_cost)
    }

    /// Date as shown in lists (`YYYY-MM-DD`).
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::estimate::{calculate, EstimateInput};

    fn estimate() -> Estimate {
        calculate(&EstimateInput::new(
            Dimensions::new(20.0, 15.0, 3.0),
            ["Cement", "Sand", "Gravel"],
        ))
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    #[test]
    fn test_project_from_estimate() {
        let details = ProjectDetails::new("Residential Building", ProjectType::Building, "Mumbai");
        let project = Project::from_estimate_on(&details, &estimate(), date());

        assert_eq!(project.name, "Residential Building");
        assert_eq!(project.location, "Mumbai");
        assert_eq!(project.materials.len(), 3);
        assert_eq!(project.total_cost, estimate().total_cost);
        assert_eq!(project.date_label(), "2025-11-10");
    }

    #[test]
    fn test_defaults_for_blank_fields() {
        let details = ProjectDetails::new("   ", ProjectType::Bridge, "");
        let project = Project::from_estimate_on(&details, &estimate(), date());
        assert_eq!(project.name, "Bridge Project");
        assert_eq!(project.location, DEFAULT_LOCATION);
    }

    #[test]
    fn test_recalculation_is_a_new_revision() {
        let details = ProjectDetails::new("House", ProjectType::Building, "Pune");
        let original = Project::from_estimate_on(&details, &estimate(), date());

        let mut sheet = original.rate_sheet();
        sheet.set_rate(0, 500.0).unwrap();
        let updated = original.recalculated(sheet);

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.revision, 2);
        assert_eq!(updated.materials[0].cost, 1197.0 * 500.0);
        assert_eq!(updated.materials[1], original.materials[1]);
        assert_eq!(updated.total_cost, total_cost(&updated.materials));
        // the original value is untouched
        assert_eq!(original.materials[0].rate, 450.0);
        assert_eq!(original.revision, 1);
    }

    #[test]
    fn test_project_serialization() {
        let details = ProjectDetails::new("Compound Wall", ProjectType::Wall, "Delhi");
        let project = Project::from_estimate_on(&details, &estimate(), date());
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("\"type\": \"Wall\""));
        assert!(json.contains("\"date\": \"2025-11-10\""));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, project);
    }

    #[test]
    fn test_from_parts_computes_total() {
        let project = Project::from_parts(
            "Compound Wall",
            ProjectType::Wall,
            date(),
            Dimensions::new(50.0, 0.23, 2.0),
            vec![
                MaterialLine::new("Bricks", 5000, "nos", 8.0),
                MaterialLine::new("Cement", 50, "bags", 450.0),
            ],
            "Delhi",
        );
        assert_eq!(project.total_cost, 62500.0);
    }

    #[test]
    fn test_project_type_parsing() {
        assert_eq!(ProjectType::from_str_flexible("ROAD"), Some(ProjectType::Road));
        assert_eq!(ProjectType::from_str_flexible("tunnel"), None);
        assert_eq!(ProjectType::default(), ProjectType::Building);
    }

    #[test]
    fn test_project_type_pads_in_tables() {
        assert_eq!(format!("{:<9}|", ProjectType::Wall), "Wall     |");
        assert_eq!(format!("{:>6}", ProjectType::Road), "  Road");
    }
}
