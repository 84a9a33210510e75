//! The "New Estimate" form.

use estimate_core::calculations::{calculate, DimensionsForm, EstimateInput};
use estimate_core::materials::Material;
use estimate_core::project::{Project, ProjectDetails};
use estimate_core::{EstimateError, EstimateResult};

/// Everything typed or ticked on the estimate form.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateDraft {
    pub details: ProjectDetails,
    pub dimensions: DimensionsForm,
    /// Ticked materials, in the order they were ticked
    pub selected: Vec<Material>,
}

impl Default for EstimateDraft {
    fn default() -> Self {
        EstimateDraft {
            details: ProjectDetails::default(),
            dimensions: DimensionsForm::default(),
            selected: Material::DEFAULT_SELECTION.to_vec(),
        }
    }
}

impl EstimateDraft {
    pub fn is_selected(&self, material: Material) -> bool {
        self.selected.contains(&material)
    }

    pub fn set_selected(&mut self, material: Material, selected: bool) {
        if selected && !self.is_selected(material) {
            self.selected.push(material);
        } else if !selected {
            self.selected.retain(|m| *m != material);
        }
    }

    /// Whether the Calculate button is enabled.
    pub fn is_ready(&self) -> bool {
        self.dimensions.is_filled() && !self.selected.is_empty()
    }

    /// Run the estimate and wrap it in an unsaved project.
    pub fn estimate(&self) -> EstimateResult<Project> {
        if self.selected.is_empty() {
            return Err(EstimateError::EmptySelection);
        }
        let dimensions = self.dimensions.parse()?;
        let estimate = calculate(&EstimateInput::from_materials(dimensions, &self.selected))?;
        Ok(Project::from_estimate(&self.details, &estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let draft = EstimateDraft::default();
        assert_eq!(draft.selected, vec![Material::Cement, Material::Sand, Material::Gravel]);
        assert!(!draft.is_ready());
    }

    #[test]
    fn test_toggle_keeps_tick_order() {
        let mut draft = EstimateDraft::default();
        draft.set_selected(Material::Cement, false);
        draft.set_selected(Material::Paint, true);
        draft.set_selected(Material::Paint, true);
        assert_eq!(draft.selected, vec![Material::Sand, Material::Gravel, Material::Paint]);
    }

    #[test]
    fn test_empty_selection_blocks_estimate() {
        let mut draft = EstimateDraft::default();
        draft.dimensions.length = "1".into();
        draft.dimensions.breadth = "1".into();
        draft.dimensions.height = "1".into();
        assert!(draft.is_ready());
        for m in Material::DEFAULT_SELECTION {
            draft.set_selected(m, false);
        }
        assert!(!draft.is_ready());
        assert_eq!(draft.estimate(), Err(EstimateError::EmptySelection));
    }

    #[test]
    fn test_thickness_does_not_change_costs() {
        let mut draft = EstimateDraft::default();
        draft.dimensions.length = "20".into();
        draft.dimensions.breadth = "15".into();
        draft.dimensions.height = "3".into();
        let plain = draft.estimate().unwrap();

        draft.dimensions.thickness = "0.23".into();
        let thick = draft.estimate().unwrap();
        assert_eq!(plain.materials, thick.materials);
        assert_eq!(thick.dimensions.thickness, Some(0.23));
    }
}
