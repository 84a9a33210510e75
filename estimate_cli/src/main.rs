//! # BuildCost CLI
//!
//! Terminal front end for the estimator. Runs an interactive prompt by
//! default; the subcommands give one-shot access for scripts, with
//! `--json` output for machine consumers.
//!
//! ```text
//! buildcost estimate --length 20 --breadth 15 --height 3 -m Cement -m Steel --json
//! buildcost documents --kind bill --search steel
//! ```

mod logging;
mod report;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use estimate_core::calculations::{calculate, DimensionsForm, EstimateInput};
use estimate_core::documents::DocumentKind;
use estimate_core::materials::Material;
use estimate_core::project::{Project, ProjectDetails, ProjectType};
use estimate_core::settings::{AppSettings, Environment};
use estimate_core::workspace::Workspace;
use estimate_core::{EstimateError, EstimateResult};

#[derive(Debug, Parser)]
#[command(name = "buildcost", version)]
#[command(about = "BuildCost - construction material cost estimator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate quantities and costs for one structure
    Estimate(EstimateArgs),
    /// Show the default material rates
    Materials {
        #[arg(long)]
        json: bool,
    },
    /// List saved projects
    Projects {
        #[arg(long)]
        json: bool,
    },
    /// List bills and documents
    Documents {
        /// Only this kind (bill or document)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<DocumentKind>,
        /// Case-insensitive match on title or project name
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        json: bool,
    },
    /// Prompt for values step by step
    Interactive,
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// Length in meters
    #[arg(long, allow_hyphen_values = true)]
    length: String,
    /// Breadth in meters
    #[arg(long, allow_hyphen_values = true)]
    breadth: String,
    /// Height in meters
    #[arg(long, allow_hyphen_values = true)]
    height: String,
    /// Thickness in meters (recorded, not used in the formula)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    thickness: String,
    /// Material to include; repeat for several
    #[arg(short, long = "material", default_values = ["Cement", "Sand", "Gravel"])]
    materials: Vec<String>,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long = "type", value_parser = parse_project_type, default_value = "building")]
    project_type: ProjectType,
    #[arg(long, default_value = "")]
    location: String,
    /// Print the project as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn parse_kind(s: &str) -> Result<DocumentKind, String> {
    DocumentKind::from_str_flexible(s).ok_or_else(|| format!("unknown document kind '{}' (bill, document)", s))
}

fn parse_project_type(s: &str) -> Result<ProjectType, String> {
    ProjectType::from_str_flexible(s)
        .ok_or_else(|| format!("unknown project type '{}' (building, road, wall, bridge)", s))
}

fn main() -> ExitCode {
    logging::init_logging(Environment::from_env());

    let cli = Cli::parse();
    let settings = AppSettings::from_env();
    let mut workspace = Workspace::with_samples();

    let command = cli.command.unwrap_or(Command::Interactive);
    let json_errors = matches!(&command, Command::Estimate(args) if args.json);

    match run(command, &settings, &mut workspace) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if json_errors {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, settings: &AppSettings, workspace: &mut Workspace) -> EstimateResult<()> {
    match command {
        Command::Estimate(args) => {
            let form = DimensionsForm {
                length: args.length,
                breadth: args.breadth,
                height: args.height,
                thickness: args.thickness,
            };
            let details = ProjectDetails::new(args.name, args.project_type, args.location);
            let project = estimate_project(&form, args.materials, &details)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                println!("{}", report::project_report(&project));
            }
        }
        Command::Materials { json } => {
            if json {
                let catalog = estimate_core::materials::MaterialSpec::catalog();
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("{}", report::materials_table(settings));
            }
        }
        Command::Projects { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(workspace.projects())?);
            } else {
                println!("{}", report::projects_table(workspace));
            }
        }
        Command::Documents { kind, search, json } => {
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => DocumentKind::ALL.to_vec(),
            };
            if json {
                let ws: &Workspace = workspace;
                let rows: Vec<_> = kinds
                    .iter()
                    .flat_map(|k| report::document_rows(ws, *k, &search))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for kind in kinds {
                    println!("{}", report::documents_table(workspace, kind, &search));
                    println!();
                }
            }
        }
        Command::Interactive => interactive(settings, workspace)?,
    }
    Ok(())
}

fn estimate_project(form: &DimensionsForm, materials: Vec<String>, details: &ProjectDetails) -> EstimateResult<Project> {
    let dimensions = form.parse()?;
    let estimate = calculate(&EstimateInput::new(dimensions, materials))?;
    for name in estimate.unrecognized() {
        tracing::warn!(material = name, "unknown material, quantity set to 0");
    }
    Ok(Project::from_estimate(details, &estimate))
}

// ============================================================================
// Interactive mode
// ============================================================================

/// Read one trimmed line. `None` on end of input.
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_or(label: &str, default: &str) -> String {
    match prompt(label) {
        Some(answer) if !answer.is_empty() => answer,
        _ => default.to_string(),
    }
}

fn interactive(settings: &AppSettings, workspace: &mut Workspace) -> EstimateResult<()> {
    println!("BuildCost CLI - Construction Material Estimator");
    println!("===============================================");
    println!("Rates in {}", settings.currency.code());
    println!();

    let form = DimensionsForm {
        length: prompt_or("Length (m): ", ""),
        breadth: prompt_or("Breadth (m): ", ""),
        height: prompt_or("Height (m): ", ""),
        thickness: prompt_or("Thickness (m, optional): ", ""),
    };

    let default_selection: Vec<&str> = Material::DEFAULT_SELECTION.iter().map(|m| m.display_name()).collect();
    let all: Vec<&str> = Material::ALL.iter().map(|m| m.display_name()).collect();
    println!("Available materials: {}", all.join(", "));
    let selection = prompt_or(
        &format!("Materials, comma separated [{}]: ", default_selection.join(", ")),
        &default_selection.join(","),
    );
    let materials: Vec<String> = selection
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let name = prompt_or("Project name (optional): ", "");
    let project_type = loop {
        let raw = prompt_or("Project type (Building/Road/Wall/Bridge) [Building]: ", "Building");
        match ProjectType::from_str_flexible(&raw) {
            Some(t) => break t,
            None => println!("  Unknown type '{}'", raw),
        }
    };
    let location = prompt_or("Location (optional): ", "");

    let details = ProjectDetails::new(name, project_type, location);
    let mut project = estimate_project(&form, materials, &details)?;
    println!();
    println!("{}", report::project_report(&project));

    project = edit_rates(project)?;

    workspace.save_project(project);
    println!();
    println!("Project saved successfully!");
    println!();
    println!("{}", report::projects_table(workspace));
    Ok(())
}

/// Let the user re-rate lines until they enter a blank line number.
fn edit_rates(project: Project) -> EstimateResult<Project> {
    let mut sheet = project.rate_sheet();
    let mut edited = false;

    loop {
        println!();
        let Some(raw) = prompt("Edit a rate? Line number (blank to finish): ") else {
            break;
        };
        if raw.is_empty() {
            break;
        }
        let index = match raw.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("  Enter a line number between 1 and {}", sheet.len());
                continue;
            }
        };
        let Some(line) = sheet.lines().get(index) else {
            println!("  Enter a line number between 1 and {}", sheet.len());
            continue;
        };
        let rate = prompt_or(&format!("New rate for {} [{}]: ", line.name, line.rate), &line.rate.to_string());

        match sheet.set_rate_text(index, &rate) {
            Ok(()) => {
                edited = true;
                println!("{}", report::lines_table(sheet.lines()));
            }
            Err(EstimateError::InvalidInput { reason, .. }) => println!("  {}", reason),
            Err(e) => return Err(e),
        }
    }

    if edited {
        let updated = project.recalculated(sheet);
        println!();
        println!("Recalculated: {}", updated.total_amount());
        Ok(updated)
    } else {
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_estimate() {
        let cli = Cli::try_parse_from([
            "buildcost", "estimate", "--length", "20", "--breadth", "15", "--height", "3", "-m", "Cement", "--type",
            "wall", "--json",
        ])
        .unwrap();
        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        assert_eq!(args.materials, vec!["Cement"]);
        assert_eq!(args.project_type, ProjectType::Wall);
        assert!(args.json);
    }

    #[test]
    fn test_default_material_selection() {
        let cli =
            Cli::try_parse_from(["buildcost", "estimate", "--length", "1", "--breadth", "1", "--height", "1"]).unwrap();
        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        assert_eq!(args.materials, vec!["Cement", "Sand", "Gravel"]);
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["buildcost", "documents", "--kind", "photo"]).is_err());
        assert!(Cli::try_parse_from(["buildcost"]).unwrap().command.is_none());
    }

    #[test]
    fn test_negative_thickness_reaches_validation() {
        let cli = Cli::try_parse_from([
            "buildcost", "estimate", "--length", "20", "--breadth", "15", "--height", "3", "--thickness", "-0.2",
        ])
        .unwrap();
        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate subcommand");
        };
        assert_eq!(args.thickness, "-0.2");

        let form = DimensionsForm {
            length: args.length,
            breadth: args.breadth,
            height: args.height,
            thickness: args.thickness,
        };
        assert!(matches!(
            form.parse(),
            Err(EstimateError::InvalidInput { ref field, .. }) if field == "thickness"
        ));
    }

    #[test]
    fn test_estimate_project() {
        let form = DimensionsForm {
            length: "20".into(),
            breadth: "15".into(),
            height: "3".into(),
            thickness: String::new(),
        };
        let details = ProjectDetails::new("", ProjectType::Road, "");
        let project = estimate_project(&form, vec!["Cement".into()], &details).unwrap();
        assert_eq!(project.name, "Road Project");
        assert_eq!(project.total_cost, 538650.0);

        let bad = DimensionsForm {
            height: "abc".into(),
            ..form
        };
        assert!(matches!(
            estimate_project(&bad, vec!["Cement".into()], &details),
            Err(EstimateError::InvalidInput { .. })
        ));
    }
}
