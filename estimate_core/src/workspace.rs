//! # Workspace
//!
//! The in-memory registry of saved projects and their bills/documents.
//! Nothing here touches disk; the workspace lives as long as the app.
//!
//! ```text
//! Workspace
//! ├── projects: Vec<Project>    (newest first)
//! └── documents: Vec<Document>  (weak project_id links)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::documents::DocumentKind;
//! use estimate_core::workspace::Workspace;
//!
//! let workspace = Workspace::with_samples();
//! assert_eq!(workspace.project_count(), 2);
//!
//! let bills = workspace.search_documents(DocumentKind::Bill, "steel");
//! assert_eq!(bills.len(), 1);
//! assert_eq!(bills[0].title, "Steel Invoice");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::dimensions::Dimensions;
use crate::calculations::estimate::MaterialLine;
use crate::documents::{Document, DocumentKind, UNKNOWN_PROJECT};
use crate::errors::EstimateResult;
use crate::project::{Project, ProjectType};
use crate::units::Amount;

/// Number of projects shown under "Recent Estimates"
pub const RECENT_LIMIT: usize = 3;

/// Saved projects and documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    projects: Vec<Project>,
    documents: Vec<Document>,
}

impl Workspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace pre-filled with two example projects and three documents.
    pub fn with_samples() -> Self {
        let residential = Project::from_parts(
            "Residential Building",
            ProjectType::Building,
            sample_date(10),
            Dimensions::new(20.0, 15.0, 3.0),
            vec![
                MaterialLine::new("Cement", 120, "bags", 450.0),
                MaterialLine::new("Sand", 40, "m³", 800.0),
                MaterialLine::new("Gravel", 35, "m³", 900.0),
                MaterialLine::new("Steel", 1500, "kg", 65.0),
            ],
            "Mumbai",
        );
        let wall = Project::from_parts(
            "Compound Wall",
            ProjectType::Wall,
            sample_date(8),
            Dimensions::new(50.0, 0.23, 2.0),
            vec![
                MaterialLine::new("Bricks", 5000, "nos", 8.0),
                MaterialLine::new("Cement", 50, "bags", 450.0),
                MaterialLine::new("Sand", 8, "m³", 800.0),
            ],
            "Delhi",
        );

        let documents = vec![
            Document::new("Cement Purchase Bill", sample_date(10), residential.id, DocumentKind::Bill, "PDF"),
            Document::new("Steel Invoice", sample_date(9), residential.id, DocumentKind::Bill, "PDF"),
            Document::new("Site Plan", sample_date(8), wall.id, DocumentKind::Document, "PDF"),
        ];

        Workspace {
            projects: vec![residential, wall],
            documents,
        }
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Projects, newest first.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn get_project(&self, id: &Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == *id)
    }

    /// Save a project at the front of the list.
    ///
    /// A project with the same id (an earlier revision) is replaced, so a
    /// project appears at most once.
    pub fn save_project(&mut self, project: Project) {
        let existing = self.projects.iter().position(|p| p.id == project.id);
        let replaced = existing.map(|idx| self.projects.remove(idx));
        tracing::info!(
            project = %project.id,
            name = %project.name,
            revision = project.revision,
            replaced = replaced.is_some(),
            "project saved"
        );
        self.projects.insert(0, project);
    }

    /// Remove a project. Its documents stay and become unlinked.
    pub fn remove_project(&mut self, id: &Uuid) -> Option<Project> {
        let idx = self.projects.iter().position(|p| p.id == *id)?;
        let removed = self.projects.remove(idx);
        tracing::info!(project = %removed.id, "project removed");
        Some(removed)
    }

    /// Sum of every saved project's total.
    pub fn total_budget(&self) -> Amount {
        self.projects.iter().map(|p| p.total_amount()).sum()
    }

    /// The most recent projects, at most [`RECENT_LIMIT`].
    pub fn recent_projects(&self) -> &[Project] {
        let end = self.projects.len().min(RECENT_LIMIT);
        &self.projects[..end]
    }

    /// Name of the project a document points to, or "Unknown Project".
    pub fn project_name(&self, id: &Uuid) -> &str {
        self.get_project(id).map(|p| p.name.as_str()).unwrap_or(UNKNOWN_PROJECT)
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Register document metadata.
    pub fn add_document(&mut self, document: Document) {
        tracing::info!(document = %document.id, title = %document.title, "document added");
        self.documents.push(document);
    }

    pub fn count_of_kind(&self, kind: DocumentKind) -> usize {
        self.documents.iter().filter(|d| d.kind == kind).count()
    }

    /// Documents of `kind` whose title or project name contains `query`,
    /// ignoring case. A blank query matches everything of that kind.
    pub fn search_documents(&self, kind: DocumentKind, query: &str) -> Vec<&Document> {
        let needle = query.trim().to_lowercase();
        self.documents
            .iter()
            .filter(|d| d.kind == kind)
            .filter(|d| {
                needle.is_empty()
                    || d.title.to_lowercase().contains(&needle)
                    || self.project_name(&d.project_id).to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Pretty JSON snapshot of the whole workspace.
    pub fn to_json(&self) -> EstimateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn sample_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::estimate::{calculate, EstimateInput};
    use crate::project::ProjectDetails;

    fn new_project(name: &str) -> Project {
        let estimate = calculate(&EstimateInput::new(Dimensions::new(2.0, 2.0, 2.0), ["Paint"])).unwrap();
        Project::from_estimate(&ProjectDetails::new(name, ProjectType::Building, ""), &estimate)
    }

    #[test]
    fn test_samples() {
        let ws = Workspace::with_samples();
        assert_eq!(ws.project_count(), 2);
        assert_eq!(ws.documents().len(), 3);
        assert_eq!(ws.count_of_kind(DocumentKind::Bill), 2);
        assert_eq!(ws.count_of_kind(DocumentKind::Document), 1);
        // totals are consistent with their lines
        for project in ws.projects() {
            let sum: f64 = project.materials.iter().map(|m| m.cost).sum();
            assert_eq!(project.total_cost, sum);
        }
        assert_eq!(ws.total_budget(), Amount(215000.0 + 68900.0));
    }

    #[test]
    fn test_save_puts_project_first() {
        let mut ws = Workspace::with_samples();
        let project = new_project("Garage");
        ws.save_project(project.clone());
        assert_eq!(ws.projects()[0], project);
        assert_eq!(ws.project_count(), 3);
        assert_eq!(ws.recent_projects().len(), RECENT_LIMIT);
    }

    #[test]
    fn test_save_replaces_earlier_revision() {
        let mut ws = Workspace::new();
        let first = new_project("Shed");
        ws.save_project(first.clone());
        ws.save_project(new_project("Porch"));

        let mut sheet = first.rate_sheet();
        sheet.set_rate(0, 300.0).unwrap();
        let second = first.recalculated(sheet);
        ws.save_project(second.clone());

        assert_eq!(ws.project_count(), 2);
        assert_eq!(ws.projects()[0], second);
        assert_eq!(ws.projects()[1].name, "Porch");
    }

    #[test]
    fn test_remove_project_keeps_documents() {
        let mut ws = Workspace::with_samples();
        let wall_id = ws.projects()[1].id;
        let removed = ws.remove_project(&wall_id).unwrap();
        assert_eq!(removed.name, "Compound Wall");

        assert_eq!(ws.documents().len(), 3);
        let docs = ws.search_documents(DocumentKind::Document, "");
        assert_eq!(ws.project_name(&docs[0].project_id), UNKNOWN_PROJECT);
        assert!(ws.remove_project(&wall_id).is_none());
    }

    #[test]
    fn test_search_by_title_or_project() {
        let ws = Workspace::with_samples();
        assert_eq!(ws.search_documents(DocumentKind::Bill, "").len(), 2);
        assert_eq!(ws.search_documents(DocumentKind::Bill, "CEMENT").len(), 1);
        // both bills belong to the residential project
        assert_eq!(ws.search_documents(DocumentKind::Bill, "residential").len(), 2);
        assert_eq!(ws.search_documents(DocumentKind::Document, "compound").len(), 1);
        assert!(ws.search_documents(DocumentKind::Document, "invoice").is_empty());
    }

    #[test]
    fn test_add_document() {
        let mut ws = Workspace::with_samples();
        let id = ws.projects()[0].id;
        ws.add_document(Document::new("Sand Receipt", sample_date(12), id, DocumentKind::Bill, "JPG"));
        assert_eq!(ws.count_of_kind(DocumentKind::Bill), 3);
        assert!(!ws.search_documents(DocumentKind::Bill, "receipt")[0].is_pdf());
    }

    #[test]
    fn test_json_snapshot() {
        let ws = Workspace::with_samples();
        let json = ws.to_json().unwrap();
        let roundtrip: Workspace = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, ws);
    }
}
