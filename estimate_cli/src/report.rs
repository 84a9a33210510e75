//! Plain-text tables for terminal output.

use estimate_core::calculations::breakdown::cost_shares;
use estimate_core::calculations::estimate::MaterialLine;
use estimate_core::documents::{Document, DocumentKind};
use estimate_core::materials::MaterialSpec;
use estimate_core::project::Project;
use estimate_core::settings::AppSettings;
use estimate_core::units::Amount;
use estimate_core::workspace::Workspace;
use serde::Serialize;

const RULE: &str = "═══════════════════════════════════════════════════════";

/// Material lines with a numbered first column (used when picking a line
/// to re-rate) and the total underneath.
pub fn lines_table(lines: &[MaterialLine]) -> String {
    let mut out = vec![format!(
        "  #  {:<10} {:>9}  {:<7} {:>10} {:>14}",
        "Material", "Quantity", "Unit", "Rate", "Cost"
    )];
    for (idx, line) in lines.iter().enumerate() {
        out.push(format!(
            "  {:<2} {:<10} {:>9}  {:<7} {:>10} {:>14}",
            idx + 1,
            line.name,
            line.quantity,
            line.unit,
            Amount(line.rate).to_string(),
            line.cost_amount().to_string(),
        ));
    }
    let total: Amount = lines.iter().map(|l| l.cost_amount()).sum();
    out.push(format!("  {:>56}", format!("Total: {}", total)));
    out.join("\n")
}

/// Full result card for one project.
pub fn project_report(project: &Project) -> String {
    let dims = &project.dimensions;
    let mut out = vec![
        RULE.to_string(),
        format!("  {} ({})", project.name, project.project_type),
        RULE.to_string(),
        format!("  Location:   {}", project.location),
        format!("  Date:       {}", project.date_label()),
        format!(
            "  Dimensions: {} x {} x {} m ({} m³)",
            dims.length,
            dims.breadth,
            dims.height,
            dims.volume_m3().value()
        ),
    ];
    if let Some(thickness) = dims.thickness {
        out.push(format!("  Thickness:  {} m", thickness));
    }
    if project.revision > 1 {
        out.push(format!("  Revision:   {}", project.revision));
    }
    out.push(String::new());
    out.push(lines_table(&project.materials));
    out.push(String::new());
    out.push("  Cost distribution:".to_string());
    for share in cost_shares(&project.materials) {
        out.push(format!("    {:<14} {}", share.label(), share.cost_amount()));
    }
    out.join("\n")
}

/// The fixed rate table.
pub fn materials_table(settings: &AppSettings) -> String {
    let mut out = vec![
        format!("Default material rates (display currency: {})", settings.currency),
        format!("  {:<10} {:>8}  {:<7} {:>8}", "Material", "Rate", "Unit", "Factor"),
    ];
    for spec in MaterialSpec::catalog() {
        out.push(format!(
            "  {:<10} {:>8}  {:<7} {:>8}",
            spec.name(),
            Amount(spec.rate).to_string(),
            spec.unit,
            spec.factor
        ));
    }
    out.join("\n")
}

/// Dashboard summary followed by every saved project.
pub fn projects_table(workspace: &Workspace) -> String {
    let mut out = vec![
        format!("Total projects: {}", workspace.project_count()),
        format!("Total budget:   {}", workspace.total_budget().thousands_label()),
        String::new(),
    ];
    if workspace.projects().is_empty() {
        out.push("No projects yet".to_string());
    }
    for project in workspace.projects() {
        out.push(format!(
            "  {:<24} {:<9} {:<14} {}  {:>12}",
            project.name,
            project.project_type,
            project.location,
            project.date_label(),
            project.total_amount().to_string(),
        ));
    }
    out.join("\n")
}

/// Documents of one kind matching `query`, with their project names.
pub fn documents_table(workspace: &Workspace, kind: DocumentKind, query: &str) -> String {
    let docs = workspace.search_documents(kind, query);
    let mut out = vec![format!("{} ({})", kind, docs.len())];
    if docs.is_empty() {
        out.push(format!("  No {} found", kind.display_name().to_lowercase()));
    }
    for doc in docs {
        out.push(format!(
            "  [{}] {:<24} {:<24} {}",
            doc.file_type,
            doc.title,
            workspace.project_name(&doc.project_id),
            doc.date_label(),
        ));
    }
    out.join("\n")
}

/// A document joined with its project name, for JSON listings.
#[derive(Debug, Serialize)]
pub struct DocumentRow<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub project_name: &'a str,
}

pub fn document_rows<'a>(workspace: &'a Workspace, kind: DocumentKind, query: &str) -> Vec<DocumentRow<'a>> {
    workspace
        .search_documents(kind, query)
        .into_iter()
        .map(|document| DocumentRow {
            document,
            project_name: workspace.project_name(&document.project_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_table_shows_total() {
        let lines = vec![
            MaterialLine::new("Cement", 1197, "bags", 450.0),
            MaterialLine::new("Sand", 378, "m³", 800.0),
        ];
        let table = lines_table(&lines);
        assert!(table.contains("₹538,650"));
        assert!(table.contains("Total: ₹841,050"));
    }

    #[test]
    fn test_materials_table_lists_catalog() {
        let table = materials_table(&AppSettings::default());
        for name in ["Cement", "Sand", "Gravel", "Steel", "Bricks", "Paint"] {
            assert!(table.contains(name));
        }
        assert!(table.contains("INR"));
    }

    #[test]
    fn test_projects_table_summary() {
        let table = projects_table(&Workspace::with_samples());
        assert!(table.starts_with("Total projects: 2"));
        assert!(table.contains("₹284K"));
        assert!(table.contains("Compound Wall"));
    }

    #[test]
    fn test_documents_table_search() {
        let ws = Workspace::with_samples();
        let table = documents_table(&ws, DocumentKind::Bill, "steel");
        assert!(table.starts_with("Bills (1)"));
        assert!(table.contains("Residential Building"));

        let empty = documents_table(&ws, DocumentKind::Document, "nothing");
        assert!(empty.contains("No documents found"));
    }

    #[test]
    fn test_document_rows_json() {
        let ws = Workspace::with_samples();
        let json = serde_json::to_value(document_rows(&ws, DocumentKind::Document, "")).unwrap();
        assert_eq!(json[0]["title"], "Site Plan");
        assert_eq!(json[0]["project_name"], "Compound Wall");
    }
}
